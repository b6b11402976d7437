//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user plus an event they organize.
///
/// Convenience for the very common "organizer acting on their own event"
/// setup. The user is created with defaults, the event with all feature
/// flags at their defaults, and an organizer link between the two.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, event))` - The organizer and their event
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_organizer(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::event::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let event = crate::factory::event::create_event(db, user.id).await?;
    crate::factory::participation::create_organizer(db, event.id, user.id).await?;

    Ok((user, event))
}

/// Creates a user plus a group they administer.
///
/// The user is created with defaults, the group with defaults, and an admin
/// membership linking the two (mirroring what group creation does in
/// production).
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, group))` - The admin and their group
/// - `Err(DbErr)` - Database error during creation
pub async fn create_group_with_admin(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::group::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let group = crate::factory::group::create_group(db, user.id).await?;
    crate::factory::group::MembershipFactory::new(db, group.id, user.id)
        .is_admin(true)
        .can_create_events(true)
        .build()
        .await?;

    Ok((user, group))
}

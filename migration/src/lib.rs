pub use sea_orm_migration::prelude::*;

mod m20260715_000001_create_users_table;
mod m20260715_000002_create_groups_table;
mod m20260715_000003_create_group_memberships_table;
mod m20260716_000004_create_events_table;
mod m20260716_000005_create_event_organizers_table;
mod m20260716_000006_create_event_participants_table;
mod m20260717_000007_create_discussion_threads_table;
mod m20260717_000008_create_messages_table;
mod m20260718_000009_create_photo_albums_table;
mod m20260718_000010_create_photos_table;
mod m20260718_000011_create_photo_comments_table;
mod m20260719_000012_create_polls_table;
mod m20260719_000013_create_poll_questions_table;
mod m20260719_000014_create_poll_options_table;
mod m20260719_000015_create_poll_votes_table;
mod m20260720_000016_create_ticket_types_table;
mod m20260720_000017_create_tickets_table;
mod m20260721_000018_create_shopping_items_table;
mod m20260721_000019_create_carpool_offers_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260715_000001_create_users_table::Migration),
            Box::new(m20260715_000002_create_groups_table::Migration),
            Box::new(m20260715_000003_create_group_memberships_table::Migration),
            Box::new(m20260716_000004_create_events_table::Migration),
            Box::new(m20260716_000005_create_event_organizers_table::Migration),
            Box::new(m20260716_000006_create_event_participants_table::Migration),
            Box::new(m20260717_000007_create_discussion_threads_table::Migration),
            Box::new(m20260717_000008_create_messages_table::Migration),
            Box::new(m20260718_000009_create_photo_albums_table::Migration),
            Box::new(m20260718_000010_create_photos_table::Migration),
            Box::new(m20260718_000011_create_photo_comments_table::Migration),
            Box::new(m20260719_000012_create_polls_table::Migration),
            Box::new(m20260719_000013_create_poll_questions_table::Migration),
            Box::new(m20260719_000014_create_poll_options_table::Migration),
            Box::new(m20260719_000015_create_poll_votes_table::Migration),
            Box::new(m20260720_000016_create_ticket_types_table::Migration),
            Box::new(m20260720_000017_create_tickets_table::Migration),
            Box::new(m20260721_000018_create_shopping_items_table::Migration),
            Box::new(m20260721_000019_create_carpool_offers_table::Migration),
        ]
    }
}

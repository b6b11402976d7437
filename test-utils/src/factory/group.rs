//! Group and membership factories.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::group::GroupType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups with customizable fields.
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    group_type: GroupType,
    allow_member_posts: bool,
    allow_member_events: bool,
    created_by_id: i32,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory owned by the given user.
    ///
    /// Defaults: `"Group {id}"`, public, member posts and member events
    /// allowed.
    pub fn new(db: &'a DatabaseConnection, created_by_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Group {}", id),
            group_type: GroupType::Public,
            allow_member_posts: true,
            allow_member_events: true,
            created_by_id,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn group_type(mut self, group_type: GroupType) -> Self {
        self.group_type = group_type;
        self
    }

    pub fn allow_member_posts(mut self, allow: bool) -> Self {
        self.allow_member_posts = allow;
        self
    }

    pub fn allow_member_events(mut self, allow: bool) -> Self {
        self.allow_member_events = allow;
        self
    }

    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        entity::group::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            icon: ActiveValue::Set(None),
            cover_photo: ActiveValue::Set(None),
            group_type: ActiveValue::Set(self.group_type),
            allow_member_posts: ActiveValue::Set(self.allow_member_posts),
            allow_member_events: ActiveValue::Set(self.allow_member_events),
            created_by_id: ActiveValue::Set(self.created_by_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Factory for creating membership rows with explicit role flags.
pub struct MembershipFactory<'a> {
    db: &'a DatabaseConnection,
    group_id: i32,
    user_id: i32,
    is_admin: bool,
    can_create_events: bool,
}

impl<'a> MembershipFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, group_id: i32, user_id: i32) -> Self {
        Self {
            db,
            group_id,
            user_id,
            is_admin: false,
            can_create_events: false,
        }
    }

    pub fn is_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    pub fn can_create_events(mut self, can_create_events: bool) -> Self {
        self.can_create_events = can_create_events;
        self
    }

    pub async fn build(self) -> Result<entity::group_membership::Model, DbErr> {
        entity::group_membership::ActiveModel {
            group_id: ActiveValue::Set(self.group_id),
            user_id: ActiveValue::Set(self.user_id),
            is_admin: ActiveValue::Set(self.is_admin),
            can_create_events: ActiveValue::Set(self.can_create_events),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group with default values owned by the given user.
pub async fn create_group(
    db: &DatabaseConnection,
    created_by_id: i32,
) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db, created_by_id).build().await
}

/// Creates a plain (non-admin) membership.
pub async fn create_membership(
    db: &DatabaseConnection,
    group_id: i32,
    user_id: i32,
) -> Result<entity::group_membership::Model, DbErr> {
    MembershipFactory::new(db, group_id, user_id).build().await
}

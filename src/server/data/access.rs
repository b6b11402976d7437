//! Capability queries backing the authorization guard.
//!
//! Every role check in the API goes through this repository so that the
//! membership/organizer semantics are defined in exactly one place.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

pub struct AccessRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccessRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether the user holds any membership in the group.
    pub async fn is_group_member(&self, group_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::GroupMembership::find()
            .filter(entity::group_membership::Column::GroupId.eq(group_id))
            .filter(entity::group_membership::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether the user holds an admin membership in the group.
    pub async fn is_group_admin(&self, group_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::GroupMembership::find()
            .filter(entity::group_membership::Column::GroupId.eq(group_id))
            .filter(entity::group_membership::Column::UserId.eq(user_id))
            .filter(entity::group_membership::Column::IsAdmin.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether the user may create events under the group: admins always can,
    /// plain members need the can_create_events flag.
    pub async fn can_create_group_events(
        &self,
        group_id: i32,
        user_id: i32,
    ) -> Result<bool, DbErr> {
        let membership = entity::prelude::GroupMembership::find()
            .filter(entity::group_membership::Column::GroupId.eq(group_id))
            .filter(entity::group_membership::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(membership
            .map(|m| m.is_admin || m.can_create_events)
            .unwrap_or(false))
    }

    /// Whether the user is an organizer of the event.
    pub async fn is_event_organizer(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::EventOrganizer::find()
            .filter(entity::event_organizer::Column::EventId.eq(event_id))
            .filter(entity::event_organizer::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether the user is a participant of the event.
    pub async fn is_event_participant(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::EventParticipant::find()
            .filter(entity::event_participant::Column::EventId.eq(event_id))
            .filter(entity::event_participant::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether the user may act inside the event at all: participants and
    /// organizers both qualify.
    pub async fn has_event_access(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        if self.is_event_participant(event_id, user_id).await? {
            return Ok(true);
        }

        self.is_event_organizer(event_id, user_id).await
    }
}

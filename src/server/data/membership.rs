use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter,
};

use crate::server::model::group::{AddMemberParams, UpdateMemberParams};

pub struct MembershipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add(
        &self,
        params: AddMemberParams,
    ) -> Result<entity::group_membership::Model, DbErr> {
        entity::group_membership::ActiveModel {
            group_id: ActiveValue::Set(params.group_id),
            user_id: ActiveValue::Set(params.user_id),
            is_admin: ActiveValue::Set(params.is_admin),
            can_create_events: ActiveValue::Set(params.can_create_events),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find(
        &self,
        group_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::group_membership::Model>, DbErr> {
        entity::prelude::GroupMembership::find()
            .filter(entity::group_membership::Column::GroupId.eq(group_id))
            .filter(entity::group_membership::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Applies a partial role update to an existing membership.
    pub async fn update(
        &self,
        membership: entity::group_membership::Model,
        params: UpdateMemberParams,
    ) -> Result<entity::group_membership::Model, DbErr> {
        let mut active_model: entity::group_membership::ActiveModel = membership.into();

        if let Some(is_admin) = params.is_admin {
            active_model.is_admin = ActiveValue::Set(is_admin);
        }
        if let Some(can_create_events) = params.can_create_events {
            active_model.can_create_events = ActiveValue::Set(can_create_events);
        }

        active_model.update(self.db).await
    }

    pub async fn remove(&self, membership: entity::group_membership::Model) -> Result<(), DbErr> {
        membership.delete(self.db).await?;

        Ok(())
    }
}

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::group::{CreateGroupParams, GroupWithMembers, UpdateGroupParams};

pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a group and its creator's admin membership in one transaction.
    ///
    /// The creator is always admitted as an admin with event-creation rights,
    /// so a group can never exist without at least one administrator.
    pub async fn create(&self, params: CreateGroupParams) -> Result<entity::group::Model, DbErr> {
        let txn = self.db.begin().await?;

        let group = entity::group::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            icon: ActiveValue::Set(params.icon),
            cover_photo: ActiveValue::Set(params.cover_photo),
            group_type: ActiveValue::Set(params.group_type),
            allow_member_posts: ActiveValue::Set(params.allow_member_posts),
            allow_member_events: ActiveValue::Set(params.allow_member_events),
            created_by_id: ActiveValue::Set(params.created_by_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::group_membership::ActiveModel {
            group_id: ActiveValue::Set(group.id),
            user_id: ActiveValue::Set(params.created_by_id),
            is_admin: ActiveValue::Set(true),
            can_create_events: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(group)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::group::Model>, DbErr> {
        entity::prelude::Group::find_by_id(id).one(self.db).await
    }

    /// Gets a group together with its membership rows.
    pub async fn get_with_members(&self, id: i32) -> Result<Option<GroupWithMembers>, DbErr> {
        let Some(group) = entity::prelude::Group::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let members = entity::prelude::GroupMembership::find()
            .filter(entity::group_membership::Column::GroupId.eq(id))
            .order_by_asc(entity::group_membership::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(GroupWithMembers { group, members }))
    }

    pub async fn get_all(&self) -> Result<Vec<entity::group::Model>, DbErr> {
        entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies a partial update; unset fields keep their current value.
    pub async fn update(
        &self,
        group: entity::group::Model,
        params: UpdateGroupParams,
    ) -> Result<entity::group::Model, DbErr> {
        let mut active_model: entity::group::ActiveModel = group.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(icon) = params.icon {
            active_model.icon = ActiveValue::Set(Some(icon));
        }
        if let Some(cover_photo) = params.cover_photo {
            active_model.cover_photo = ActiveValue::Set(Some(cover_photo));
        }
        if let Some(group_type) = params.group_type {
            active_model.group_type = ActiveValue::Set(group_type);
        }
        if let Some(allow_member_posts) = params.allow_member_posts {
            active_model.allow_member_posts = ActiveValue::Set(allow_member_posts);
        }
        if let Some(allow_member_events) = params.allow_member_events {
            active_model.allow_member_events = ActiveValue::Set(allow_member_events);
        }

        active_model.update(self.db).await
    }

    /// Deletes a group. Memberships, group threads and group events go with
    /// it through the storage-layer cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Group::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}

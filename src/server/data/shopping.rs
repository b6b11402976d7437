use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

use crate::server::model::addon::{CreateShoppingItemParams, UpdateShoppingItemParams};

pub struct ShoppingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShoppingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateShoppingItemParams,
    ) -> Result<entity::shopping_item::Model, DbErr> {
        entity::shopping_item::ActiveModel {
            event_id: ActiveValue::Set(params.event_id),
            owner_id: ActiveValue::Set(params.owner_id),
            name: ActiveValue::Set(params.name),
            quantity: ActiveValue::Set(params.quantity),
            arrival_time: ActiveValue::Set(params.arrival_time),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::shopping_item::Model>, DbErr> {
        entity::prelude::ShoppingItem::find_by_id(id).one(self.db).await
    }

    /// Finds an item by its name within one event, for the duplicate-name
    /// rule.
    pub async fn find_by_name(
        &self,
        event_id: i32,
        name: &str,
    ) -> Result<Option<entity::shopping_item::Model>, DbErr> {
        entity::prelude::ShoppingItem::find()
            .filter(entity::shopping_item::Column::EventId.eq(event_id))
            .filter(entity::shopping_item::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn get_for_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::shopping_item::Model>, DbErr> {
        entity::prelude::ShoppingItem::find()
            .filter(entity::shopping_item::Column::EventId.eq(event_id))
            .order_by_asc(entity::shopping_item::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        item: entity::shopping_item::Model,
        params: UpdateShoppingItemParams,
    ) -> Result<entity::shopping_item::Model, DbErr> {
        let mut active_model: entity::shopping_item::ActiveModel = item.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(quantity) = params.quantity {
            active_model.quantity = ActiveValue::Set(quantity);
        }
        if let Some(arrival_time) = params.arrival_time {
            active_model.arrival_time = ActiveValue::Set(arrival_time);
        }

        active_model.update(self.db).await
    }

    pub async fn delete(&self, item: entity::shopping_item::Model) -> Result<(), DbErr> {
        item.delete(self.db).await?;

        Ok(())
    }
}

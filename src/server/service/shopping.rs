use sea_orm::DatabaseConnection;

use crate::server::{
    data::{event::EventRepository, shopping::ShoppingRepository},
    error::AppError,
    model::addon::{CreateShoppingItemParams, UpdateShoppingItemParams},
};

pub struct ShoppingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShoppingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up the event and enforces the shopping-list feature flag.
    pub async fn require_shopping_event(
        &self,
        event_id: i32,
    ) -> Result<entity::event::Model, AppError> {
        let event = EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        if !event.shopping_list_enabled {
            return Err(AppError::PreconditionFailed(
                "Shopping list is not enabled for this event".to_string(),
            ));
        }

        Ok(event)
    }

    /// Registers an item. Item names are unique within an event.
    pub async fn create(
        &self,
        params: CreateShoppingItemParams,
    ) -> Result<entity::shopping_item::Model, AppError> {
        self.require_shopping_event(params.event_id).await?;

        if params.quantity < 1 {
            return Err(AppError::validation(
                "quantity",
                "quantity must be at least 1",
            ));
        }

        let repo = ShoppingRepository::new(self.db);

        if repo
            .find_by_name(params.event_id, &params.name)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Item already registered for this event".to_string(),
            ));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn list_for_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::shopping_item::Model>, AppError> {
        self.require_shopping_event(event_id).await?;

        Ok(ShoppingRepository::new(self.db)
            .get_for_event(event_id)
            .await?)
    }

    pub async fn get_item(&self, item_id: i32) -> Result<entity::shopping_item::Model, AppError> {
        ShoppingRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Shopping item not found".to_string()))
    }

    pub async fn update_item(
        &self,
        item: entity::shopping_item::Model,
        params: UpdateShoppingItemParams,
    ) -> Result<entity::shopping_item::Model, AppError> {
        if let Some(quantity) = params.quantity {
            if quantity < 1 {
                return Err(AppError::validation(
                    "quantity",
                    "quantity must be at least 1",
                ));
            }
        }

        let repo = ShoppingRepository::new(self.db);

        if let Some(name) = &params.name {
            if let Some(existing) = repo.find_by_name(item.event_id, name).await? {
                if existing.id != item.id {
                    return Err(AppError::Conflict(
                        "Item already registered for this event".to_string(),
                    ));
                }
            }
        }

        Ok(repo.update(item, params).await?)
    }

    pub async fn delete_item(&self, item: entity::shopping_item::Model) -> Result<(), AppError> {
        Ok(ShoppingRepository::new(self.db).delete(item).await?)
    }
}

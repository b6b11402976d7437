use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::ticket::{
    CreateTicketTypeParams, PurchaseOutcome, PurchaseTicketParams,
};

pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_type(
        &self,
        params: CreateTicketTypeParams,
    ) -> Result<entity::ticket_type::Model, DbErr> {
        entity::ticket_type::ActiveModel {
            event_id: ActiveValue::Set(params.event_id),
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            quantity: ActiveValue::Set(params.quantity),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_type(&self, id: i32) -> Result<Option<entity::ticket_type::Model>, DbErr> {
        entity::prelude::TicketType::find_by_id(id).one(self.db).await
    }

    pub async fn get_types(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::ticket_type::Model>, DbErr> {
        entity::prelude::TicketType::find()
            .filter(entity::ticket_type::Column::EventId.eq(event_id))
            .order_by_asc(entity::ticket_type::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count_sold(&self, ticket_type_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::TicketTypeId.eq(ticket_type_id))
            .count(self.db)
            .await
    }

    /// Attempts a purchase against the type's quota.
    ///
    /// The sold-count check, the duplicate-email check and the insert all run
    /// inside one write transaction, so two concurrent purchases for the last
    /// ticket (or for the same email) cannot both succeed. The
    /// (ticket_type_id, purchaser_email) unique index backs the duplicate
    /// rule at the storage layer as well.
    ///
    /// Business-rule rejections are values, not errors; only database
    /// failures surface as `DbErr`.
    pub async fn purchase(
        &self,
        ticket_type: &entity::ticket_type::Model,
        params: PurchaseTicketParams,
    ) -> Result<PurchaseOutcome, DbErr> {
        let txn = self.db.begin().await?;

        // Duplicate email takes precedence over the quota: an attendee who
        // already holds a ticket gets the conflict answer even when the type
        // is sold out.
        let existing = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::TicketTypeId.eq(ticket_type.id))
            .filter(entity::ticket::Column::PurchaserEmail.eq(params.purchaser_email.clone()))
            .count(&txn)
            .await?;

        if existing > 0 {
            txn.rollback().await?;
            return Ok(PurchaseOutcome::AlreadyPurchased);
        }

        let sold = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::TicketTypeId.eq(ticket_type.id))
            .count(&txn)
            .await?;

        if sold >= ticket_type.quantity as u64 {
            txn.rollback().await?;
            return Ok(PurchaseOutcome::QuotaExhausted);
        }

        let ticket = entity::ticket::ActiveModel {
            ticket_type_id: ActiveValue::Set(ticket_type.id),
            purchaser_first_name: ActiveValue::Set(params.purchaser_first_name),
            purchaser_last_name: ActiveValue::Set(params.purchaser_last_name),
            purchaser_email: ActiveValue::Set(params.purchaser_email),
            purchaser_address: ActiveValue::Set(params.purchaser_address),
            purchased_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await;

        let ticket = match ticket {
            Ok(ticket) => ticket,
            // The unique index caught a purchase that raced past the
            // in-transaction check on a backend with weaker isolation.
            Err(err) if is_unique_violation(&err) => {
                txn.rollback().await?;
                return Ok(PurchaseOutcome::AlreadyPurchased);
            }
            Err(err) => return Err(err),
        };

        txn.commit().await?;

        Ok(PurchaseOutcome::Purchased(ticket))
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
}

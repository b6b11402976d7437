use sea_orm::DatabaseConnection;

use crate::server::{
    data::{event::EventRepository, ticket::TicketRepository},
    error::AppError,
    model::ticket::{CreateTicketTypeParams, PurchaseOutcome, PurchaseTicketParams},
};

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up the event and enforces the ticketing feature flag.
    pub async fn require_ticketing_event(
        &self,
        event_id: i32,
    ) -> Result<entity::event::Model, AppError> {
        let event = EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        if !event.ticketing_enabled {
            return Err(AppError::PreconditionFailed(
                "Ticketing is not enabled for this event".to_string(),
            ));
        }

        Ok(event)
    }

    /// Creates a ticket type under an event with ticketing enabled.
    pub async fn create_type(
        &self,
        params: CreateTicketTypeParams,
    ) -> Result<entity::ticket_type::Model, AppError> {
        self.require_ticketing_event(params.event_id).await?;

        if params.price < 0.0 {
            return Err(AppError::validation("price", "price must not be negative"));
        }
        if params.quantity < 0 {
            return Err(AppError::validation(
                "quantity",
                "quantity must not be negative",
            ));
        }

        Ok(TicketRepository::new(self.db).create_type(params).await?)
    }

    pub async fn list_types(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::ticket_type::Model>, AppError> {
        self.require_ticketing_event(event_id).await?;

        Ok(TicketRepository::new(self.db).get_types(event_id).await?)
    }

    /// Purchases one ticket of the given type.
    ///
    /// The quota check and the insert are a single storage-layer transaction
    /// (see `TicketRepository::purchase`), so concurrent purchases cannot
    /// oversell the type or double-book an email.
    pub async fn purchase(
        &self,
        ticket_type_id: i32,
        params: PurchaseTicketParams,
    ) -> Result<entity::ticket::Model, AppError> {
        let repo = TicketRepository::new(self.db);

        let ticket_type = repo
            .find_type(ticket_type_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ticket type not found".to_string()))?;

        self.require_ticketing_event(ticket_type.event_id).await?;

        match repo.purchase(&ticket_type, params).await? {
            PurchaseOutcome::Purchased(ticket) => Ok(ticket),
            PurchaseOutcome::QuotaExhausted => Err(AppError::PreconditionFailed(
                "No more tickets available".to_string(),
            )),
            PurchaseOutcome::AlreadyPurchased => Err(AppError::Conflict(
                "This attendee already has a ticket".to_string(),
            )),
        }
    }
}

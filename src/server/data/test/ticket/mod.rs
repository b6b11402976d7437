use crate::server::data::ticket::TicketRepository;
use crate::server::model::ticket::{PurchaseOutcome, PurchaseTicketParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_event_with_organizer};

mod purchase;

fn purchase_params(email: &str) -> PurchaseTicketParams {
    PurchaseTicketParams {
        purchaser_first_name: "Bea".to_string(),
        purchaser_last_name: "Martin".to_string(),
        purchaser_email: email.to_string(),
        purchaser_address: None,
    }
}

//! SeaORM entities for the huddle database schema.
//!
//! One module per table. The `prelude` re-exports every `Entity` under its
//! table name for use in queries and test schema setup.

pub mod prelude;

pub mod carpool_offer;
pub mod discussion_thread;
pub mod event;
pub mod event_organizer;
pub mod event_participant;
pub mod group;
pub mod group_membership;
pub mod message;
pub mod photo;
pub mod photo_album;
pub mod photo_comment;
pub mod poll;
pub mod poll_option;
pub mod poll_question;
pub mod poll_vote;
pub mod shopping_item;
pub mod ticket;
pub mod ticket_type;
pub mod user;

//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally; multi-row
//! writes run inside a single transaction so a failed request leaves no partial state.
//! All database queries, inserts, updates, and deletes are performed through these
//! repositories.

pub mod access;
pub mod carpool;
pub mod discussion;
pub mod event;
pub mod group;
pub mod media;
pub mod membership;
pub mod participation;
pub mod poll;
pub mod shopping;
pub mod ticket;
pub mod user;

#[cfg(test)]
mod test;

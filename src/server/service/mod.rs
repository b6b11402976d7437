//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Rules**: Feature-flag gates, uniqueness rules, structural validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Role and ownership checks stay in the controller layer (through
//! `middleware::auth::AuthGuard`); services assume the caller is already
//! authorized and enforce only resource-state rules.

pub mod auth;
pub mod carpool;
pub mod discussion;
pub mod event;
pub mod group;
pub mod media;
pub mod poll;
pub mod shopping;
pub mod ticket;
pub mod user;

#[cfg(test)]
mod test;

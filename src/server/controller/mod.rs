//! HTTP request handlers.
//!
//! Controllers are the outermost application layer: they resolve the current
//! user, run capability checks through `AuthGuard`, convert DTOs to parameter
//! types, call into the service layer and shape the HTTP response. Each
//! handler carries a `#[utoipa::path]` annotation feeding the OpenAPI
//! document assembled in `router`.

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

//! API data transfer objects.
//!
//! Request and response body types for every resource, serialized with serde
//! and described for the OpenAPI document with utoipa. Conversions from
//! entity models live next to the response types.

pub mod addon;
pub mod api;
pub mod auth;
pub mod discussion;
pub mod event;
pub mod group;
pub mod media;
pub mod poll;
pub mod ticket;
pub mod user;

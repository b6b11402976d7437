//! Server-side domain models and operation parameter types.
//!
//! Parameter structs carry validated input from the controller layer into
//! repositories; aggregate structs bundle an entity with the related rows a
//! read endpoint returns. DTO conversion lives here (`from_dto` on params,
//! `into_dto` on aggregates) so the controller stays thin.

pub mod addon;
pub mod discussion;
pub mod event;
pub mod group;
pub mod poll;
pub mod ticket;

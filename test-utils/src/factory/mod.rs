//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle foreign key fields,
//! making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let event = factory::event::create_event(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (organizer, event) = factory::helpers::create_event_with_organizer(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let event = factory::event::EventFactory::new(&db, user.id)
//!     .polls_enabled(false)
//!     .ticketing_enabled(true)
//!     .build()
//!     .await?;
//! ```

pub mod carpool_offer;
pub mod discussion;
pub mod event;
pub mod group;
pub mod helpers;
pub mod media;
pub mod participation;
pub mod poll;
pub mod shopping_item;
pub mod ticket;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use carpool_offer::create_carpool_offer;
pub use discussion::{create_event_thread, create_group_thread, create_message};
pub use event::create_event;
pub use group::{create_group, create_membership};
pub use media::{create_album, create_comment, create_photo};
pub use participation::{create_organizer, create_participant};
pub use poll::{create_option, create_poll, create_question};
pub use shopping_item::create_shopping_item;
pub use ticket::create_ticket_type;
pub use user::create_user;

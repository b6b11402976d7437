use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Group, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Group)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements generated from entity models, executed in the
    /// order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements executed after table creation. Used for the
    /// composite unique keys the production migrations declare.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the users table.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(User)
    }

    /// Adds the tables for group membership operations: users, groups and the
    /// membership join table with its (group_id, user_id) unique key.
    pub fn with_group_tables(mut self) -> Self {
        self = self.with_auth_tables().with_table(Group);
        self = self.with_table(GroupMembership);
        self.indexes.push(
            Index::create()
                .unique()
                .name("idx_group_membership_unique")
                .table(GroupMembership)
                .col(entity::group_membership::Column::GroupId)
                .col(entity::group_membership::Column::UserId)
                .to_owned(),
        );
        self
    }

    /// Adds the tables for event operations on top of the group tables:
    /// events plus the organizer/participant join tables with their unique
    /// keys.
    pub fn with_event_tables(mut self) -> Self {
        self = self
            .with_group_tables()
            .with_table(Event)
            .with_table(EventOrganizer)
            .with_table(EventParticipant);
        self.indexes.push(
            Index::create()
                .unique()
                .name("idx_event_organizer_unique")
                .table(EventOrganizer)
                .col(entity::event_organizer::Column::EventId)
                .col(entity::event_organizer::Column::UserId)
                .to_owned(),
        );
        self.indexes.push(
            Index::create()
                .unique()
                .name("idx_event_participant_unique")
                .table(EventParticipant)
                .col(entity::event_participant::Column::EventId)
                .col(entity::event_participant::Column::UserId)
                .to_owned(),
        );
        self
    }

    /// Adds the discussion tables (threads and messages) on top of the event
    /// tables.
    pub fn with_discussion_tables(self) -> Self {
        self.with_event_tables()
            .with_table(DiscussionThread)
            .with_table(Message)
    }

    /// Adds the media tables (albums, photos, comments) on top of the event
    /// tables.
    pub fn with_media_tables(self) -> Self {
        self.with_event_tables()
            .with_table(PhotoAlbum)
            .with_table(Photo)
            .with_table(PhotoComment)
    }

    /// Adds the poll tables on top of the event tables, including the
    /// (question_id, voter_id) unique key that backs single-vote enforcement.
    pub fn with_poll_tables(mut self) -> Self {
        self = self
            .with_event_tables()
            .with_table(Poll)
            .with_table(PollQuestion)
            .with_table(PollOption)
            .with_table(PollVote);
        self.indexes.push(
            Index::create()
                .unique()
                .name("idx_poll_vote_unique")
                .table(PollVote)
                .col(entity::poll_vote::Column::QuestionId)
                .col(entity::poll_vote::Column::VoterId)
                .to_owned(),
        );
        self
    }

    /// Adds the ticketing tables on top of the event tables, including the
    /// (ticket_type_id, purchaser_email) unique key.
    pub fn with_ticket_tables(mut self) -> Self {
        self = self.with_event_tables().with_table(TicketType).with_table(Ticket);
        self.indexes.push(
            Index::create()
                .unique()
                .name("idx_ticket_type_email_unique")
                .table(Ticket)
                .col(entity::ticket::Column::TicketTypeId)
                .col(entity::ticket::Column::PurchaserEmail)
                .to_owned(),
        );
        self
    }

    /// Adds the add-on tables (shopping items and carpool offers) on top of
    /// the event tables, including the (event_id, name) unique key on
    /// shopping items.
    pub fn with_addon_tables(mut self) -> Self {
        self = self
            .with_event_tables()
            .with_table(ShoppingItem)
            .with_table(CarpoolOffer);
        self.indexes.push(
            Index::create()
                .unique()
                .name("idx_shopping_item_name_unique")
                .table(ShoppingItem)
                .col(entity::shopping_item::Column::EventId)
                .col(entity::shopping_item::Column::Name)
                .to_owned(),
        );
        self
    }

    /// Builds the configured test context.
    ///
    /// Connects to an in-memory SQLite database and creates all configured
    /// tables and indexes.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready-to-use test context
    /// - `Err(TestError::Database)` - Failed to connect or create schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_schema(self.tables, self.indexes).await?;
        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

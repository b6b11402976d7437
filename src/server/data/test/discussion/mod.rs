use crate::server::data::discussion::DiscussionRepository;
use crate::server::model::discussion::{CreateMessageParams, CreateThreadParams, ThreadScope};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_event_with_organizer};

mod create_message;
mod create_thread;

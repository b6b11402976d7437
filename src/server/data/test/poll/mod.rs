use crate::server::data::poll::PollRepository;
use crate::server::model::poll::{CreatePollParams, CreateQuestionParams};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_event_with_organizer};

mod cast_vote;
mod create;
mod tally;

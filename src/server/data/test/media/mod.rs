use crate::server::data::media::MediaRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_event_with_organizer};

mod delete_album;

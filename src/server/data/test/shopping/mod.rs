use crate::server::data::shopping::ShoppingRepository;
use crate::server::model::addon::CreateShoppingItemParams;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::helpers::create_event_with_organizer};

mod create;

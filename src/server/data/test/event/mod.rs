use chrono::{Duration, Utc};

use crate::server::data::event::EventRepository;
use crate::server::model::event::CreateEventParams;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;

fn create_params(created_by_id: i32, organizer_ids: Vec<i32>) -> CreateEventParams {
    let start = Utc::now() + Duration::days(5);
    CreateEventParams {
        name: "Launch Event".to_string(),
        description: None,
        start_date: start,
        end_date: start + Duration::hours(4),
        location: "Paris HQ".to_string(),
        cover_photo: None,
        is_private: false,
        created_by_id,
        group_id: None,
        polls_enabled: true,
        ticketing_enabled: true,
        shopping_list_enabled: false,
        carpool_enabled: false,
        organizer_ids,
    }
}

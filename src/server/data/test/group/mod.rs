use crate::server::data::group::GroupRepository;
use crate::server::model::group::{CreateGroupParams, UpdateGroupParams};
use entity::group::GroupType;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

fn create_params(created_by_id: i32) -> CreateGroupParams {
    CreateGroupParams {
        name: "Hiking Club".to_string(),
        description: None,
        icon: None,
        cover_photo: None,
        group_type: GroupType::Public,
        allow_member_posts: true,
        allow_member_events: true,
        created_by_id,
    }
}

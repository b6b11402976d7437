use crate::server::data::membership::MembershipRepository;
use crate::server::model::group::{AddMemberParams, UpdateMemberParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_group_with_admin};

mod add;
mod update;

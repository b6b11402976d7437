//! Group domain models and parameters.

use entity::group::GroupType;

use crate::model::group::{
    AddMemberDto, CreateGroupDto, GroupDetailDto, MembershipDto, UpdateGroupDto, UpdateMemberDto,
};

#[derive(Debug, Clone)]
pub struct CreateGroupParams {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub cover_photo: Option<String>,
    pub group_type: GroupType,
    pub allow_member_posts: bool,
    pub allow_member_events: bool,
    pub created_by_id: i32,
}

impl CreateGroupParams {
    pub fn from_dto(created_by_id: i32, dto: CreateGroupDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            icon: dto.icon,
            cover_photo: dto.cover_photo,
            group_type: dto.group_type,
            allow_member_posts: dto.allow_member_posts,
            allow_member_events: dto.allow_member_events,
            created_by_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateGroupParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub cover_photo: Option<String>,
    pub group_type: Option<GroupType>,
    pub allow_member_posts: Option<bool>,
    pub allow_member_events: Option<bool>,
}

impl UpdateGroupParams {
    pub fn from_dto(dto: UpdateGroupDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            icon: dto.icon,
            cover_photo: dto.cover_photo,
            group_type: dto.group_type,
            allow_member_posts: dto.allow_member_posts,
            allow_member_events: dto.allow_member_events,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddMemberParams {
    pub group_id: i32,
    pub user_id: i32,
    pub is_admin: bool,
    pub can_create_events: bool,
}

impl AddMemberParams {
    pub fn from_dto(group_id: i32, dto: AddMemberDto) -> Self {
        Self {
            group_id,
            user_id: dto.user_id,
            is_admin: dto.is_admin,
            can_create_events: dto.can_create_events,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateMemberParams {
    pub is_admin: Option<bool>,
    pub can_create_events: Option<bool>,
}

impl UpdateMemberParams {
    pub fn from_dto(dto: UpdateMemberDto) -> Self {
        Self {
            is_admin: dto.is_admin,
            can_create_events: dto.can_create_events,
        }
    }
}

/// A group together with its membership rows.
#[derive(Debug, Clone)]
pub struct GroupWithMembers {
    pub group: entity::group::Model,
    pub members: Vec<entity::group_membership::Model>,
}

impl GroupWithMembers {
    pub fn into_dto(self) -> GroupDetailDto {
        GroupDetailDto {
            group: self.group.into(),
            members: self.members.into_iter().map(MembershipDto::from).collect(),
        }
    }
}

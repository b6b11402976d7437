use chrono::{DateTime, Utc};
use entity::group::GroupType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateGroupDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub cover_photo: Option<String>,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub group_type: GroupType,
    #[serde(default = "default_true")]
    pub allow_member_posts: bool,
    #[serde(default = "default_true")]
    pub allow_member_events: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateGroupDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub cover_photo: Option<String>,
    #[serde(default, rename = "type")]
    #[schema(value_type = Option<String>)]
    pub group_type: Option<GroupType>,
    #[serde(default)]
    pub allow_member_posts: Option<bool>,
    #[serde(default)]
    pub allow_member_events: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub cover_photo: Option<String>,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub group_type: GroupType,
    pub allow_member_posts: bool,
    pub allow_member_events: bool,
    pub created_by_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<entity::group::Model> for GroupDto {
    fn from(group: entity::group::Model) -> Self {
        Self {
            id: group.id,
            name: group.name,
            description: group.description,
            icon: group.icon,
            cover_photo: group.cover_photo,
            group_type: group.group_type,
            allow_member_posts: group.allow_member_posts,
            allow_member_events: group.allow_member_events,
            created_by_id: group.created_by_id,
            created_at: group.created_at,
        }
    }
}

/// Group with its member list, returned by the single-group endpoint.
#[derive(Serialize, ToSchema)]
pub struct GroupDetailDto {
    #[serde(flatten)]
    pub group: GroupDto,
    pub members: Vec<MembershipDto>,
}

#[derive(Deserialize, ToSchema)]
pub struct AddMemberDto {
    pub user_id: i32,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub can_create_events: bool,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateMemberDto {
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub can_create_events: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MembershipDto {
    pub id: i32,
    pub group_id: i32,
    pub user_id: i32,
    pub is_admin: bool,
    pub can_create_events: bool,
    pub created_at: DateTime<Utc>,
}

impl From<entity::group_membership::Model> for MembershipDto {
    fn from(membership: entity::group_membership::Model) -> Self {
        Self {
            id: membership.id,
            group_id: membership.group_id,
            user_id: membership.user_id,
            is_admin: membership.is_admin,
            can_create_events: membership.can_create_events,
            created_at: membership.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_type_serializes_under_type_key() {
        let dto = GroupDto {
            id: 1,
            name: "Hiking Club".to_string(),
            description: None,
            icon: None,
            cover_photo: None,
            group_type: GroupType::Secret,
            allow_member_posts: true,
            allow_member_events: true,
            created_by_id: 7,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["type"], "secret");
        assert!(value.get("group_type").is_none());
    }

    #[test]
    fn create_dto_defaults_optional_fields() {
        let dto: CreateGroupDto = serde_json::from_value(serde_json::json!({
            "name": "Hiking Club",
            "type": "private"
        }))
        .unwrap();

        assert!(matches!(dto.group_type, GroupType::Private));
        assert!(dto.allow_member_posts);
        assert!(dto.allow_member_events);
        assert!(dto.description.is_none());
    }

    #[test]
    fn create_dto_rejects_unknown_group_type() {
        let result = serde_json::from_value::<CreateGroupDto>(serde_json::json!({
            "name": "Hiking Club",
            "type": "hidden"
        }));

        assert!(result.is_err());
    }
}

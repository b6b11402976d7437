use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        group::{
            AddMemberDto, CreateGroupDto, GroupDetailDto, GroupDto, MembershipDto,
            UpdateGroupDto, UpdateMemberDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, CurrentUser, Permission},
        model::group::{AddMemberParams, CreateGroupParams, UpdateGroupParams, UpdateMemberParams},
        service::group::GroupService,
        state::AppState,
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "groups";

/// Create a new group.
///
/// The caller becomes the group's first admin member in the same
/// transaction.
///
/// # Returns
/// - `201 Created` - The new group
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Group created", body = GroupDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let params = CreateGroupParams::from_dto(user.id, payload);

    let group = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(GroupDto::from(group))))
}

/// List all groups.
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "All groups", body = [GroupDto]),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn list_groups(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let groups = GroupService::new(&state.db).get_all().await?;

    let groups: Vec<GroupDto> = groups.into_iter().map(GroupDto::from).collect();

    Ok((StatusCode::OK, Json(groups)))
}

/// Get a group with its member list.
#[utoipa::path(
    get,
    path = "/api/groups/{group_id}",
    tag = GROUP_TAG,
    params(("group_id" = i32, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group detail", body = GroupDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(group_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db)
        .get_with_members(group_id)
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Update a group's settings.
///
/// # Access Control
/// - `GroupAdmin` - Only group admins may change settings
#[utoipa::path(
    patch,
    path = "/api/groups/{group_id}",
    tag = GROUP_TAG,
    params(("group_id" = i32, Path, description = "Group id")),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Updated group", body = GroupDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Administrator privileges required", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(group_id): Path<i32>,
    Json(payload): Json<UpdateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&user, &[Permission::GroupAdmin(group_id)])
        .await?;

    let group = GroupService::new(&state.db)
        .update(group_id, UpdateGroupParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(GroupDto::from(group))))
}

/// Delete a group.
///
/// Memberships, group threads and group-scoped events are removed with it.
///
/// # Access Control
/// - `GroupAdmin` - Only group admins may delete the group
#[utoipa::path(
    delete,
    path = "/api/groups/{group_id}",
    tag = GROUP_TAG,
    params(("group_id" = i32, Path, description = "Group id")),
    responses(
        (status = 204, description = "Group deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Administrator privileges required", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(group_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&user, &[Permission::GroupAdmin(group_id)])
        .await?;

    GroupService::new(&state.db).delete(group_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a member to a group.
///
/// # Access Control
/// - `GroupAdmin` - Only group admins may add members
///
/// # Returns
/// - `201 Created` - The new membership
/// - `404 Not Found` - Target user does not exist
/// - `409 Conflict` - User already a member
#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/members",
    tag = GROUP_TAG,
    params(("group_id" = i32, Path, description = "Group id")),
    request_body = AddMemberDto,
    responses(
        (status = 201, description = "Member added", body = MembershipDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Administrator privileges required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "User already member", body = ErrorDto)
    ),
)]
pub async fn add_group_member(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(group_id): Path<i32>,
    Json(payload): Json<AddMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&user, &[Permission::GroupAdmin(group_id)])
        .await?;

    let membership = GroupService::new(&state.db)
        .add_member(AddMemberParams::from_dto(group_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(MembershipDto::from(membership))))
}

/// List a group's members.
///
/// # Access Control
/// - `GroupMember` - Visible to any member
#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/members",
    tag = GROUP_TAG,
    params(("group_id" = i32, Path, description = "Group id")),
    responses(
        (status = 200, description = "Member list", body = [MembershipDto]),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Group membership required", body = ErrorDto)
    ),
)]
pub async fn list_group_members(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(group_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&user, &[Permission::GroupMember(group_id)])
        .await?;

    let members = GroupService::new(&state.db).list_members(group_id).await?;

    let members: Vec<MembershipDto> = members.into_iter().map(MembershipDto::from).collect();

    Ok((StatusCode::OK, Json(members)))
}

/// Change a member's role flags.
///
/// # Access Control
/// - `GroupAdmin` - Only group admins may change roles
#[utoipa::path(
    patch,
    path = "/api/groups/{group_id}/members/{user_id}",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group id"),
        ("user_id" = i32, Path, description = "Member's user id")
    ),
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Updated membership", body = MembershipDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Administrator privileges required", body = ErrorDto),
        (status = 404, description = "Membership not found", body = ErrorDto)
    ),
)]
pub async fn update_group_member(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((group_id, user_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&user, &[Permission::GroupAdmin(group_id)])
        .await?;

    let membership = GroupService::new(&state.db)
        .update_member(group_id, user_id, UpdateMemberParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(MembershipDto::from(membership))))
}

/// Remove a member from a group.
///
/// # Access Control
/// - `GroupAdmin` - Only group admins may remove members
#[utoipa::path(
    delete,
    path = "/api/groups/{group_id}/members/{user_id}",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group id"),
        ("user_id" = i32, Path, description = "Member's user id")
    ),
    responses(
        (status = 204, description = "Member removed"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Administrator privileges required", body = ErrorDto),
        (status = 404, description = "Membership not found", body = ErrorDto)
    ),
)]
pub async fn remove_group_member(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((group_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db)
        .require(&user, &[Permission::GroupAdmin(group_id)])
        .await?;

    GroupService::new(&state.db)
        .remove_member(group_id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{group::GroupRepository, membership::MembershipRepository, user::UserRepository},
    error::AppError,
    model::group::{
        AddMemberParams, CreateGroupParams, GroupWithMembers, UpdateGroupParams,
        UpdateMemberParams,
    },
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a group; the creator becomes an admin member in the same
    /// transaction.
    pub async fn create(&self, params: CreateGroupParams) -> Result<entity::group::Model, AppError> {
        let repo = GroupRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<entity::group::Model>, AppError> {
        Ok(GroupRepository::new(self.db).get_all().await?)
    }

    /// Gets a group with its member list.
    pub async fn get_with_members(&self, id: i32) -> Result<GroupWithMembers, AppError> {
        GroupRepository::new(self.db)
            .get_with_members(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))
    }

    /// Applies a partial update to the group's settings.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateGroupParams,
    ) -> Result<entity::group::Model, AppError> {
        let repo = GroupRepository::new(self.db);

        let group = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))?;

        Ok(repo.update(group, params).await?)
    }

    /// Deletes the group; memberships, threads and group events cascade.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = GroupRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Group not found".to_string()));
        }

        Ok(repo.delete(id).await?)
    }

    /// Adds a member to the group.
    ///
    /// The target user must exist and must not already hold a membership;
    /// the (group, user) unique key backs the duplicate rule at the storage
    /// layer.
    pub async fn add_member(
        &self,
        params: AddMemberParams,
    ) -> Result<entity::group_membership::Model, AppError> {
        let membership_repo = MembershipRepository::new(self.db);

        if membership_repo
            .find(params.group_id, params.user_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("User already member".to_string()));
        }

        if UserRepository::new(self.db)
            .find_by_id(params.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(membership_repo.add(params).await?)
    }

    pub async fn list_members(
        &self,
        group_id: i32,
    ) -> Result<Vec<entity::group_membership::Model>, AppError> {
        Ok(self.get_with_members(group_id).await?.members)
    }

    /// Changes a member's role flags.
    pub async fn update_member(
        &self,
        group_id: i32,
        user_id: i32,
        params: UpdateMemberParams,
    ) -> Result<entity::group_membership::Model, AppError> {
        let repo = MembershipRepository::new(self.db);

        let membership = repo
            .find(group_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Membership not found".to_string()))?;

        Ok(repo.update(membership, params).await?)
    }

    /// Removes a member from the group.
    pub async fn remove_member(&self, group_id: i32, user_id: i32) -> Result<(), AppError> {
        let repo = MembershipRepository::new(self.db);

        let membership = repo
            .find(group_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Membership not found".to_string()))?;

        Ok(repo.remove(membership).await?)
    }
}

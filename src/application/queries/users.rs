// src/application/queries/users.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto, UserListDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        pagination::PageRequest,
        user::{UserId, UserRepository},
    },
};

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn get_profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        self.find(actor.id).await
    }

    pub async fn get_user(&self, id: i64) -> ApplicationResult<UserDto> {
        self.find(UserId::new(id)?).await
    }

    /// Users by reputation, highest first.
    pub async fn list_users(&self, page: PageRequest) -> ApplicationResult<UserListDto> {
        let (users, total) = self
            .user_repo
            .list_by_reputation(page.limit, page.skip)
            .await?;
        Ok(UserListDto {
            users_count: total,
            users: users.into_iter().map(Into::into).collect(),
        })
    }

    async fn find(&self, id: UserId) -> ApplicationResult<UserDto> {
        self.user_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }
}

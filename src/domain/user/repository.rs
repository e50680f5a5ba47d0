use crate::domain::errors::DomainResult;
use crate::domain::user::{
    UserId,
    entity::{NewUser, User},
    value_objects::Username,
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Users ordered by reputation, highest first, plus the total count.
    async fn list_by_reputation(&self, limit: u32, skip: u32) -> DomainResult<(Vec<User>, u64)>;
}

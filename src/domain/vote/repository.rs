use crate::domain::errors::DomainResult;
use crate::domain::ids::UserId;
use crate::domain::post::PostRef;
use crate::domain::vote::{Vote, VoteTally, VoteValue};
use async_trait::async_trait;

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Record `voter`'s vote on `target`, replacing any earlier vote by the
    /// same voter on the same target.
    async fn upsert(&self, target: PostRef, voter: UserId, value: VoteValue) -> DomainResult<Vote>;

    /// Returns `false` when the voter had no vote on the target.
    async fn remove(&self, target: PostRef, voter: UserId) -> DomainResult<bool>;

    async fn tally(&self, target: PostRef, viewer: Option<UserId>) -> DomainResult<VoteTally>;
}

use crate::domain::answer::acceptance::{AcceptancePlan, AcceptancePolicy};
use crate::domain::answer::entity::{Answer, AnswerBody, AnswerView, NewAnswer};
use crate::domain::errors::DomainResult;
use crate::domain::ids::{AnswerId, QuestionId, UserId};
use crate::domain::pagination::PageRequest;
use crate::domain::post::CascadeReport;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait AnswerWriteRepository: Send + Sync {
    async fn insert(&self, answer: NewAnswer) -> DomainResult<Answer>;

    async fn update_body(
        &self,
        id: AnswerId,
        body: AnswerBody,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Answer>;

    /// Toggle the answer's acceptance under `policy`. The current flag and the
    /// accepted siblings are read in the same unit of work that writes the
    /// flags and reputation, so concurrent toggles of one question apply one
    /// after the other.
    async fn toggle_acceptance(
        &self,
        id: AnswerId,
        policy: AcceptancePolicy,
    ) -> DomainResult<AcceptancePlan>;

    /// Remove the answer with its comments and votes.
    async fn delete_cascade(&self, id: AnswerId) -> DomainResult<CascadeReport>;
}

#[async_trait]
pub trait AnswerReadRepository: Send + Sync {
    async fn find_by_id(&self, id: AnswerId) -> DomainResult<Option<Answer>>;

    async fn find_view(
        &self,
        id: AnswerId,
        viewer: Option<UserId>,
    ) -> DomainResult<Option<AnswerView>>;

    /// Answers to `question`, oldest first, with the total answer count.
    async fn list_for_question(
        &self,
        question: QuestionId,
        page: PageRequest,
        viewer: Option<UserId>,
    ) -> DomainResult<(Vec<AnswerView>, u64)>;

    async fn list_by_owner(&self, owner: UserId, limit: u32) -> DomainResult<Vec<AnswerView>>;
}

// tests/support/mocks/store.rs
//! One in-memory store implementing every repository port, so tests can
//! inspect the state a command leaves behind.
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use overflow_core::domain::answer::{
    AcceptancePlan, AcceptancePolicy, Answer, AnswerBody, AnswerId, AnswerReadRepository, AnswerView,
    AnswerWriteRepository, NewAnswer,
};
use overflow_core::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use overflow_core::domain::errors::{DomainError, DomainResult};
use overflow_core::domain::ids::{QuestionId, TagId, UserId, VoteId};
use overflow_core::domain::pagination::PageRequest;
use overflow_core::domain::post::{CascadePolicy, CascadeReport, PostRef};
use overflow_core::domain::question::{
    NewQuestion, Question, QuestionReadRepository, QuestionUpdate, QuestionView,
    QuestionWriteRepository,
};
use overflow_core::domain::tag::{Tag, TagName, TagRepository};
use overflow_core::domain::user::{
    NewUser, PasswordHash, Reputation, User, UserRepository, UserSummary, Username,
};
use overflow_core::domain::vote::{Vote, VoteRepository, VoteTally, VoteValue};

use super::time::fixed_now;

#[derive(Default)]
pub struct StoreState {
    pub users: BTreeMap<UserId, User>,
    pub questions: BTreeMap<QuestionId, Question>,
    pub answers: BTreeMap<AnswerId, Answer>,
    pub tags: BTreeMap<TagId, Tag>,
    pub votes: Vec<Vote>,
    pub comments: Vec<Comment>,
    pub tag_inserts: u32,
    last_id: i64,
}

impl StoreState {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn summary(&self, id: UserId) -> DomainResult<UserSummary> {
        self.users
            .get(&id)
            .map(User::summary)
            .ok_or_else(|| DomainError::Persistence(format!("user {id} missing")))
    }

    fn tally(&self, target: PostRef, viewer: Option<UserId>) -> VoteTally {
        VoteTally::from_votes(self.votes.iter().filter(|v| v.target == target), viewer)
    }

    fn counted(&self, tag: &Tag) -> Tag {
        let total = self
            .questions
            .values()
            .filter(|q| q.tag_ids.contains(&tag.id))
            .count();
        Tag {
            total_questions: total as u64,
            ..tag.clone()
        }
    }

    /// Answers of `question`, oldest first.
    fn answers_of(&self, question: QuestionId) -> Vec<&Answer> {
        let mut answers: Vec<&Answer> = self
            .answers
            .values()
            .filter(|a| a.question_id == question)
            .collect();
        answers.sort_by_key(|a| (a.created_at, a.id));
        answers
    }

    fn question_view(&self, question: &Question, viewer: Option<UserId>) -> DomainResult<QuestionView> {
        let mut tags: Vec<Tag> = question
            .tag_ids
            .iter()
            .filter_map(|id| self.tags.get(id))
            .map(|tag| self.counted(tag))
            .collect();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        let answers = self.answers_of(question.id);

        Ok(QuestionView {
            question: question.clone(),
            owner: self.summary(question.owner_id)?,
            tags,
            tally: self.tally(PostRef::Question(question.id), viewer),
            answers_count: answers.len() as u64,
            answer_accepted: answers.iter().find(|a| a.accepted).map(|a| a.id),
        })
    }

    fn answer_view(&self, answer: &Answer, viewer: Option<UserId>) -> DomainResult<AnswerView> {
        Ok(AnswerView {
            answer: answer.clone(),
            owner: self.summary(answer.owner_id)?,
            tally: self.tally(PostRef::Answer(answer.id), viewer),
        })
    }

    /// Questions newest first.
    fn questions_newest<'a>(&'a self, filter: impl Fn(&Question) -> bool) -> Vec<&'a Question> {
        let mut questions: Vec<&Question> =
            self.questions.values().filter(|q| filter(q)).collect();
        questions.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        questions
    }

    fn drop_post(&mut self, post: PostRef, report: &mut CascadeReport) {
        let comments = self.comments.len();
        self.comments.retain(|c| c.post != post);
        report.comments += (comments - self.comments.len()) as u64;

        let votes = self.votes.len();
        self.votes.retain(|v| v.target != post);
        report.votes += (votes - self.votes.len()) as u64;
    }
}

fn page<T>(items: Vec<T>, page: PageRequest) -> Vec<T> {
    items
        .into_iter()
        .skip(page.skip as usize)
        .take(page.limit as usize)
        .collect()
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().expect("store lock poisoned")
    }

    /// Seed a user directly, bypassing registration.
    pub fn add_user(&self, username: &str, reputation: i64) -> User {
        let mut state = self.state();
        let id = UserId::new(state.next_id()).expect("positive id");
        let user = User {
            id,
            username: Username::new(username).expect("valid username"),
            password_hash: PasswordHash::new("hash::password1").expect("valid hash"),
            reputation: Reputation(reputation),
            created_at: fixed_now(),
        };
        state.users.insert(id, user.clone());
        user
    }

    pub fn reputation_of(&self, id: UserId) -> i64 {
        self.state().users[&id].reputation.value()
    }

    pub fn remove_user(&self, id: UserId) {
        self.state().users.remove(&id);
    }

    pub fn tag_names_of(&self, question: QuestionId) -> Vec<String> {
        let state = self.state();
        let mut names: Vec<String> = state.questions[&question]
            .tag_ids
            .iter()
            .map(|id| state.tags[id].name.as_str().to_string())
            .collect();
        names.sort();
        names
    }

    pub fn accepted_answers(&self, question: QuestionId) -> Vec<AnswerId> {
        self.state()
            .answers_of(question)
            .into_iter()
            .filter(|a| a.accepted)
            .map(|a| a.id)
            .collect()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.state();
        if state.users.values().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let id = UserId::new(state.next_id())?;
        let user = User {
            id,
            username: new_user.username,
            password_hash: new_user.password_hash,
            reputation: Reputation::default(),
            created_at: new_user.created_at,
        };
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .state()
            .users
            .values()
            .find(|u| &u.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.state().users.get(&id).cloned())
    }

    async fn list_by_reputation(&self, limit: u32, skip: u32) -> DomainResult<(Vec<User>, u64)> {
        let state = self.state();
        let mut users: Vec<User> = state.users.values().cloned().collect();
        users.sort_by(|a, b| b.reputation.cmp(&a.reputation).then(a.id.cmp(&b.id)));
        let total = users.len() as u64;
        Ok((page(users, PageRequest::new(limit, skip)), total))
    }
}

#[async_trait]
impl QuestionWriteRepository for MemoryStore {
    async fn insert(&self, question: NewQuestion) -> DomainResult<Question> {
        let mut state = self.state();
        if !state.users.contains_key(&question.owner_id) {
            return Err(DomainError::not_found("owner not found"));
        }
        let id = QuestionId::new(state.next_id())?;
        let stored = Question {
            id,
            title: question.title,
            body: question.body,
            owner_id: question.owner_id,
            tag_ids: question.tag_ids,
            created_at: question.created_at,
            updated_at: question.created_at,
        };
        state.questions.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: QuestionUpdate) -> DomainResult<()> {
        let mut state = self.state();
        let question = state
            .questions
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::not_found("question not found"))?;
        if let Some(title) = update.title {
            question.title = title;
        }
        if let Some(body) = update.body {
            question.body = body;
        }
        if let Some(delta) = update.tags {
            question.apply_tags(&delta, update.updated_at);
        }
        question.updated_at = update.updated_at;
        Ok(())
    }

    async fn delete_cascade(
        &self,
        id: QuestionId,
        policy: CascadePolicy,
    ) -> DomainResult<CascadeReport> {
        let mut state = self.state();
        if !state.questions.contains_key(&id) {
            return Err(DomainError::not_found("question not found"));
        }

        let answer_ids: Vec<AnswerId> = state.answers_of(id).iter().map(|a| a.id).collect();
        let mut report = CascadeReport::default();

        state.drop_post(PostRef::Question(id), &mut report);
        if policy == CascadePolicy::Transitive {
            for answer in &answer_ids {
                state.drop_post(PostRef::Answer(*answer), &mut report);
            }
        }
        for answer in &answer_ids {
            state.answers.remove(answer);
        }
        report.answers = answer_ids.len() as u64;
        state.questions.remove(&id);

        Ok(report)
    }
}

#[async_trait]
impl QuestionReadRepository for MemoryStore {
    async fn find_by_id(&self, id: QuestionId) -> DomainResult<Option<Question>> {
        Ok(self.state().questions.get(&id).cloned())
    }

    async fn find_view(
        &self,
        id: QuestionId,
        viewer: Option<UserId>,
    ) -> DomainResult<Option<QuestionView>> {
        let state = self.state();
        state
            .questions
            .get(&id)
            .map(|q| state.question_view(q, viewer))
            .transpose()
    }

    async fn list(&self, page_request: PageRequest) -> DomainResult<(Vec<QuestionView>, u64)> {
        let state = self.state();
        let questions = state.questions_newest(|_| true);
        let total = questions.len() as u64;
        let views = page(questions, page_request)
            .into_iter()
            .map(|q| state.question_view(q, None))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((views, total))
    }

    async fn list_by_tag(
        &self,
        tag: TagId,
        page_request: PageRequest,
    ) -> DomainResult<(Vec<QuestionView>, u64)> {
        let state = self.state();
        let questions = state.questions_newest(|q| q.tag_ids.contains(&tag));
        let total = questions.len() as u64;
        let views = page(questions, page_request)
            .into_iter()
            .map(|q| state.question_view(q, None))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((views, total))
    }

    async fn list_by_owner(&self, owner: UserId, limit: u32) -> DomainResult<Vec<QuestionView>> {
        let state = self.state();
        state
            .questions_newest(|q| q.owner_id == owner)
            .into_iter()
            .take(limit as usize)
            .map(|q| state.question_view(q, None))
            .collect()
    }
}

#[async_trait]
impl AnswerWriteRepository for MemoryStore {
    async fn insert(&self, answer: NewAnswer) -> DomainResult<Answer> {
        let mut state = self.state();
        if !state.questions.contains_key(&answer.question_id) {
            return Err(DomainError::not_found("question not found"));
        }
        if !state.users.contains_key(&answer.owner_id) {
            return Err(DomainError::not_found("owner not found"));
        }
        let id = AnswerId::new(state.next_id())?;
        let stored = Answer {
            id,
            question_id: answer.question_id,
            owner_id: answer.owner_id,
            body: answer.body,
            accepted: false,
            created_at: answer.created_at,
            updated_at: answer.created_at,
        };
        state.answers.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update_body(
        &self,
        id: AnswerId,
        body: AnswerBody,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Answer> {
        let mut state = self.state();
        let answer = state
            .answers
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("answer not found"))?;
        answer.set_body(body, updated_at);
        Ok(answer.clone())
    }

    /// All-or-nothing: the plan is built and every referenced row checked
    /// before anything moves, all under the store lock.
    async fn toggle_acceptance(
        &self,
        id: AnswerId,
        policy: AcceptancePolicy,
    ) -> DomainResult<AcceptancePlan> {
        let mut state = self.state();
        let answer = state
            .answers
            .get(&id)
            .ok_or_else(|| DomainError::not_found("answer not found"))?;
        let accepted: Vec<Answer> = state
            .answers_of(answer.question_id)
            .into_iter()
            .filter(|a| a.accepted)
            .cloned()
            .collect();
        let plan = AcceptancePlan::for_toggle(answer, &accepted, policy);

        for transition in plan.transitions() {
            if !state.users.contains_key(&transition.owner_id) {
                return Err(DomainError::not_found("answer owner not found"));
            }
        }

        for transition in plan.transitions() {
            if let Some(answer) = state.answers.get_mut(&transition.answer_id) {
                answer.accepted = transition.to.is_accepted();
            }
            if let Some(owner) = state.users.get_mut(&transition.owner_id) {
                owner.reputation = owner.reputation.adjusted(transition.reputation_delta);
            }
        }
        Ok(plan)
    }

    async fn delete_cascade(&self, id: AnswerId) -> DomainResult<CascadeReport> {
        let mut state = self.state();
        if state.answers.remove(&id).is_none() {
            return Err(DomainError::not_found("answer not found"));
        }
        let mut report = CascadeReport {
            answers: 1,
            ..CascadeReport::default()
        };
        state.drop_post(PostRef::Answer(id), &mut report);
        Ok(report)
    }
}

#[async_trait]
impl AnswerReadRepository for MemoryStore {
    async fn find_by_id(&self, id: AnswerId) -> DomainResult<Option<Answer>> {
        Ok(self.state().answers.get(&id).cloned())
    }

    async fn find_view(
        &self,
        id: AnswerId,
        viewer: Option<UserId>,
    ) -> DomainResult<Option<AnswerView>> {
        let state = self.state();
        state
            .answers
            .get(&id)
            .map(|a| state.answer_view(a, viewer))
            .transpose()
    }

    async fn list_for_question(
        &self,
        question: QuestionId,
        page_request: PageRequest,
        viewer: Option<UserId>,
    ) -> DomainResult<(Vec<AnswerView>, u64)> {
        let state = self.state();
        let answers = state.answers_of(question);
        let total = answers.len() as u64;
        let views = page(answers, page_request)
            .into_iter()
            .map(|a| state.answer_view(a, viewer))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((views, total))
    }

    async fn list_by_owner(&self, owner: UserId, limit: u32) -> DomainResult<Vec<AnswerView>> {
        let state = self.state();
        let mut answers: Vec<&Answer> = state
            .answers
            .values()
            .filter(|a| a.owner_id == owner)
            .collect();
        answers.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        answers
            .into_iter()
            .take(limit as usize)
            .map(|a| state.answer_view(a, None))
            .collect()
    }
}

#[async_trait]
impl TagRepository for MemoryStore {
    async fn find_by_names(&self, names: &[TagName]) -> DomainResult<Vec<Tag>> {
        let state = self.state();
        Ok(state
            .tags
            .values()
            .filter(|tag| names.contains(&tag.name))
            .map(|tag| state.counted(tag))
            .collect())
    }

    async fn insert_or_get(&self, name: &TagName) -> DomainResult<Tag> {
        let mut state = self.state();
        if let Some(existing) = state.tags.values().find(|tag| &tag.name == name) {
            return Ok(state.counted(existing));
        }
        let id = TagId::new(state.next_id())?;
        let tag = Tag {
            id,
            name: name.clone(),
            info: String::new(),
            total_questions: 0,
        };
        state.tags.insert(id, tag.clone());
        state.tag_inserts += 1;
        Ok(tag)
    }

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        let state = self.state();
        Ok(state.tags.get(&id).map(|tag| state.counted(tag)))
    }

    async fn list(
        &self,
        limit: u32,
        skip: u32,
        prefix: Option<&str>,
    ) -> DomainResult<(Vec<Tag>, u64)> {
        let state = self.state();
        let mut tags: Vec<Tag> = state
            .tags
            .values()
            .filter(|tag| prefix.is_none_or(|p| tag.name.as_str().starts_with(p)))
            .map(|tag| state.counted(tag))
            .collect();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        let total = tags.len() as u64;
        Ok((page(tags, PageRequest::new(limit, skip)), total))
    }

    async fn update_info(&self, id: TagId, info: String) -> DomainResult<Tag> {
        let mut state = self.state();
        let tag = state
            .tags
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("tag not found"))?;
        tag.info = info;
        let tag = tag.clone();
        Ok(state.counted(&tag))
    }
}

#[async_trait]
impl VoteRepository for MemoryStore {
    async fn upsert(&self, target: PostRef, voter: UserId, value: VoteValue) -> DomainResult<Vote> {
        let mut state = self.state();
        if let Some(existing) = state
            .votes
            .iter_mut()
            .find(|v| v.target == target && v.voter == voter)
        {
            existing.value = value;
            return Ok(existing.clone());
        }
        let vote = Vote {
            id: VoteId::new(state.next_id())?,
            target,
            voter,
            value,
        };
        state.votes.push(vote.clone());
        Ok(vote)
    }

    async fn remove(&self, target: PostRef, voter: UserId) -> DomainResult<bool> {
        let mut state = self.state();
        let before = state.votes.len();
        state.votes.retain(|v| !(v.target == target && v.voter == voter));
        Ok(state.votes.len() != before)
    }

    async fn tally(&self, target: PostRef, viewer: Option<UserId>) -> DomainResult<VoteTally> {
        Ok(self.state().tally(target, viewer))
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.state();
        let owner = state
            .summary(comment.owner_id)
            .map_err(|_| DomainError::not_found("owner not found"))?;
        let stored = Comment {
            id: CommentId::new(state.next_id())?,
            post: comment.post,
            owner,
            body: comment.body,
            created_at: comment.created_at,
        };
        state.comments.push(stored.clone());
        Ok(stored)
    }

    async fn list_for_post(&self, post: PostRef) -> DomainResult<Vec<Comment>> {
        let state = self.state();
        let mut comments: Vec<Comment> = state
            .comments
            .iter()
            .filter(|c| c.post == post)
            .cloned()
            .collect();
        comments.sort_by_key(|c| (c.created_at, c.id));
        Ok(comments)
    }
}

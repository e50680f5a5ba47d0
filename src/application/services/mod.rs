// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            answers::AnswerCommandService, comments::CommentCommandService,
            questions::QuestionCommandService, tags::TagCommandService, users::UserCommandService,
            votes::VoteCommandService,
        },
        dto::AuthenticatedUser,
        error::ApplicationResult,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{
            answers::AnswerQueryService, comments::CommentQueryService,
            questions::QuestionQueryService, tags::TagQueryService, users::UserQueryService,
            votes::VoteQueryService,
        },
    },
    domain::{
        answer::{AcceptancePolicy, AnswerReadRepository, AnswerWriteRepository},
        comment::CommentRepository,
        post::CascadePolicy,
        question::{QuestionReadRepository, QuestionWriteRepository},
        tag::{TagReconciler, TagRepository},
        user::UserRepository,
        vote::VoteRepository,
    },
};

/// Every persistence port the services depend on.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub question_write: Arc<dyn QuestionWriteRepository>,
    pub question_read: Arc<dyn QuestionReadRepository>,
    pub answer_write: Arc<dyn AnswerWriteRepository>,
    pub answer_read: Arc<dyn AnswerReadRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub votes: Arc<dyn VoteRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

/// Behaviour switches read from configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServicePolicies {
    pub acceptance: AcceptancePolicy,
    pub cascade: CascadePolicy,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub question_commands: Arc<QuestionCommandService>,
    pub answer_commands: Arc<AnswerCommandService>,
    pub vote_commands: Arc<VoteCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub tag_commands: Arc<TagCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub question_queries: Arc<QuestionQueryService>,
    pub answer_queries: Arc<AnswerQueryService>,
    pub vote_queries: Arc<VoteQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub tag_queries: Arc<TagQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        policies: ServicePolicies,
    ) -> Self {
        let tag_reconciler = Arc::new(TagReconciler::new(Arc::clone(&repos.tags)));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            password_hasher,
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));

        let question_commands = Arc::new(QuestionCommandService::new(
            Arc::clone(&repos.question_write),
            Arc::clone(&repos.question_read),
            tag_reconciler,
            Arc::clone(&clock),
            policies.cascade,
        ));

        let answer_commands = Arc::new(AnswerCommandService::new(
            Arc::clone(&repos.answer_write),
            Arc::clone(&repos.answer_read),
            Arc::clone(&repos.question_read),
            Arc::clone(&repos.users),
            Arc::clone(&clock),
            policies.acceptance,
        ));

        let vote_commands = Arc::new(VoteCommandService::new(
            Arc::clone(&repos.votes),
            Arc::clone(&repos.question_read),
            Arc::clone(&repos.answer_read),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.question_read),
            Arc::clone(&repos.answer_read),
            Arc::clone(&clock),
        ));

        let tag_commands = Arc::new(TagCommandService::new(Arc::clone(&repos.tags)));

        Self {
            user_commands,
            question_commands,
            answer_commands,
            vote_commands,
            comment_commands,
            tag_commands,
            user_queries: Arc::new(UserQueryService::new(Arc::clone(&repos.users))),
            question_queries: Arc::new(QuestionQueryService::new(
                Arc::clone(&repos.question_read),
                Arc::clone(&repos.tags),
            )),
            answer_queries: Arc::new(AnswerQueryService::new(
                Arc::clone(&repos.answer_read),
                Arc::clone(&repos.question_read),
            )),
            vote_queries: Arc::new(VoteQueryService::new(Arc::clone(&repos.votes))),
            comment_queries: Arc::new(CommentQueryService::new(Arc::clone(&repos.comments))),
            tag_queries: Arc::new(TagQueryService::new(Arc::clone(&repos.tags))),
            token_manager,
        }
    }

    /// Resolve a raw bearer token into the authenticated principal.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}

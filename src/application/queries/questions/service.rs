use std::sync::Arc;

use crate::domain::{question::QuestionReadRepository, tag::TagRepository};

pub struct QuestionQueryService {
    pub(super) read_repo: Arc<dyn QuestionReadRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
}

impl QuestionQueryService {
    pub fn new(
        read_repo: Arc<dyn QuestionReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
    ) -> Self {
        Self {
            read_repo,
            tag_repo,
        }
    }
}

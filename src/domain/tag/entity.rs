// src/domain/tag/entity.rs
use crate::domain::tag::{TagId, value_objects::TagName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
    pub info: String,
    /// Number of questions currently carrying the tag.
    pub total_questions: u64,
}

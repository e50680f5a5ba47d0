// src/domain/comment/mod.rs
pub mod entity;
pub mod repository;

pub use crate::domain::ids::CommentId;
pub use entity::{Comment, CommentBody, NewComment};
pub use repository::CommentRepository;

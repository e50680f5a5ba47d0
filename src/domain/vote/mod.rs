// src/domain/vote/mod.rs
pub mod entity;
pub mod repository;
pub mod tally;

pub use crate::domain::ids::VoteId;
pub use entity::{Vote, VoteValue};
pub use repository::VoteRepository;
pub use tally::VoteTally;

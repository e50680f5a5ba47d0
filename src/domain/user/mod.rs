// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use crate::domain::ids::UserId;
pub use entity::{NewUser, User, UserSummary};
pub use repository::UserRepository;
pub use value_objects::{PasswordHash, Reputation, Username};

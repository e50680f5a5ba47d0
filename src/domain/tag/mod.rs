// src/domain/tag/mod.rs
pub mod entity;
pub mod reconciler;
pub mod repository;
pub mod value_objects;

pub use crate::domain::ids::TagId;
pub use entity::Tag;
pub use reconciler::{TagDelta, TagReconciler};
pub use repository::TagRepository;
pub use value_objects::TagName;

pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use crate::domain::ids::QuestionId;
pub use entity::{NewQuestion, Question, QuestionUpdate, QuestionView};
pub use repository::{QuestionReadRepository, QuestionWriteRepository};
pub use value_objects::{QuestionBody, QuestionTitle};

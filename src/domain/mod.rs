pub mod answer;
pub mod comment;
pub mod errors;
pub mod ids;
pub mod pagination;
pub mod post;
pub mod question;
pub mod tag;
pub mod user;
pub mod vote;

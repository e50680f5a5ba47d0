pub mod answers;
pub mod comments;
mod ownership;
pub mod questions;
pub mod tags;
pub mod users;
pub mod votes;

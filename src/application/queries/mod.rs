pub mod answers;
pub mod comments;
pub mod questions;
pub mod tags;
pub mod users;
pub mod votes;

// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod store;
pub mod time;

pub use security::{DummyPasswordHasher, DummyTokenManager, bearer, token_for};
pub use store::{MemoryStore, StoreState};
pub use time::{FixedClock, fixed_now};

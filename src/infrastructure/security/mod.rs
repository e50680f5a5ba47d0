// src/infrastructure/security/mod.rs
mod claims;
pub mod password;
pub mod token;

pub use password::Argon2PasswordHasher;
pub use token::BiscuitTokenManager;

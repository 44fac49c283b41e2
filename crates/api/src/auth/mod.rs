//! Authentication building blocks: credential store, password hashing, JWTs.

pub mod credentials;
pub mod jwt;
pub mod password;

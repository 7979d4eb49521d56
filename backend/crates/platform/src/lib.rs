//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Random secrets and Base64 helpers
//! - Password hashing (Argon2id, NFKC, pepper)
//! - Signed, expiring access tokens (HS256 JWT)
//! - Upload acceptance policy (size ceiling, MIME allow-list)

pub mod crypto;
pub mod password;
pub mod token;
pub mod upload;

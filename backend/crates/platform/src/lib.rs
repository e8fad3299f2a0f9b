//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, base64url, constant-time compare)
//! - Password hashing (Argon2id with an injectable cost)
//! - Bearer credential extraction from the `Authorization` header

pub mod bearer;
pub mod crypto;
pub mod password;

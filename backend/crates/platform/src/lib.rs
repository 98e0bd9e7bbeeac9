//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id) and password policy
//! - HS256 JSON Web Token encoding and validation

pub mod jwt;
pub mod password;

//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// POST /api/users/register
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub email_address: String,
    #[serde(default)]
    pub username: Option<String>,
    pub password: String,
}

/// POST /api/users/login
///
/// At least one of `emailAddress` / `username` must be present.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenDto {
    pub token: String,
}

//! Wire Models
//!
//! Mirror the API's JSON (camelCase). User models validate themselves before
//! they are sent.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 48;
pub const USERNAME_MIN_LENGTH: usize = 4;
pub const USERNAME_MAX_LENGTH: usize = 48;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorModel {
    #[serde(default)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub books: Vec<BookModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookModel {
    #[serde(default)]
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    pub isbn: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub author_id: Option<i32>,
    #[serde(default)]
    pub author: Option<Box<AuthorModel>>,
}

/// POST /api/users/register
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationModel {
    pub email_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub password: String,
    pub confirmation_password: String,
}

impl RegistrationModel {
    pub fn validate(&self) -> ClientResult<()> {
        validate_email(&self.email_address)?;
        if let Some(username) = &self.username {
            validate_length(
                username,
                USERNAME_MIN_LENGTH,
                USERNAME_MAX_LENGTH,
                "The Username Must Be Between 4 And 48 Characters Long",
            )?;
        }
        validate_password(&self.password)?;
        if self.password != self.confirmation_password {
            return Err(ClientError::validation("The Passwords Do Not Match"));
        }
        Ok(())
    }
}

/// POST /api/users/login
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginModel {
    pub email_address: String,
    pub password: String,
}

impl LoginModel {
    pub fn validate(&self) -> ClientResult<()> {
        validate_email(&self.email_address)?;
        validate_password(&self.password)
    }
}

/// Body of a successful login
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TokenResponse {
    pub token: String,
}

fn validate_email(email: &str) -> ClientResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ClientError::validation("The Email Address field is required"));
    }

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(ClientError::validation(
            "The Email Address field is not a valid e-mail address",
        ));
    }
    Ok(())
}

fn validate_password(password: &str) -> ClientResult<()> {
    if password.is_empty() {
        return Err(ClientError::validation("The Password field is required"));
    }
    validate_length(
        password,
        PASSWORD_MIN_LENGTH,
        PASSWORD_MAX_LENGTH,
        "The Password Must Be Between 8 And 48 Characters Long",
    )
}

fn validate_length(value: &str, min: usize, max: usize, message: &str) -> ClientResult<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ClientError::validation(message));
    }
    Ok(())
}

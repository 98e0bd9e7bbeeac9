//! Email Value Object
//!
//! Represents a validated email address.
//! The address is stored as typed; uniqueness is checked on the lowercase
//! canonical form.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email {
    original: String,
    canonical: String,
}

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let original = email.into().trim().to_string();

        if original.is_empty() {
            return Err(AppError::bad_request("The Email Address field is required"));
        }

        if original.len() > EMAIL_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        if !Self::is_valid_format(&original) {
            return Err(AppError::bad_request(
                "The Email Address field is not a valid e-mail address",
            ));
        }

        let canonical = original.to_lowercase();
        Ok(Self {
            original,
            canonical,
        })
    }

    /// Basic email format validation
    fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || local.len() > 64 || domain.contains('@') {
            return false;
        }

        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        !(domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']))
    }

    /// Rebuild from stored columns (assumed already validated)
    pub fn from_db(original: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            canonical: canonical.into(),
        }
    }

    /// Email as submitted at registration
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Lowercase form used for lookups
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.original)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("reader@bookstore.com").is_ok());
        assert!(Email::new("first.last@shop.co.uk").is_ok());
        assert!(Email::new("reader+tag@bookstore.com").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("   ").is_err());
        assert!(Email::new("readerbookstore.com").is_err());
        assert!(Email::new("reader@").is_err());
        assert!(Email::new("@bookstore.com").is_err());
        assert!(Email::new("reader@@bookstore.com").is_err());
        assert!(Email::new("reader@bookstore").is_err());
        assert!(Email::new("reader@-bookstore.com").is_err());
    }

    #[test]
    fn test_email_keeps_original_and_canonical() {
        let email = Email::new("  Admin@BookStore.com ").unwrap();
        assert_eq!(email.as_str(), "Admin@BookStore.com");
        assert_eq!(email.canonical(), "admin@bookstore.com");
    }
}

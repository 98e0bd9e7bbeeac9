//! User Name Value Object
//!
//! ユーザー名はログイン時の識別子。登録時に省略された場合はメールアドレスを
//! そのままユーザー名として使う。
//!
//! ## 設計方針
//! - ASCII英数字と `- . _ @ +` のみ許可（メールアドレスを流用できるように）
//! - 大文字入力は受け付けるが、canonical（正規形）は小文字
//! - NFKC正規化 → trim → 検証 の順で処理
//!
//! ## 不変条件
//! - 明示的に入力された場合の長さ: 4〜48文字（正規化後）
//! - 空白禁止

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

use crate::domain::value_object::email::Email;

/// Minimum length for a user-chosen user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 4;

/// Maximum length for a user-chosen user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 48;

/// Allowed special characters in user name
const ALLOWED_SPECIAL_CHARS: &[char] = &['-', '.', '_', '@', '+'];

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// Length outside USER_NAME_MIN_LENGTH..=USER_NAME_MAX_LENGTH
    Length { length: usize },

    /// Character outside the allowed set
    InvalidCharacter { char: char, position: usize },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { .. } => write!(
                f,
                "The Username Must Be Between {USER_NAME_MIN_LENGTH} And {USER_NAME_MAX_LENGTH} Characters Long"
            ),
            Self::InvalidCharacter { char, position } => write!(
                f,
                "Invalid character '{char}' at position {position}. Only letters, digits, -, ., _, @, + are allowed"
            ),
        }
    }
}

impl std::error::Error for UserNameError {}

/// Validated, normalized user name
///
/// # Storage
/// - `original`: The user's input (trimmed, NFKC normalized, preserves case)
/// - `canonical`: Lowercase form for uniqueness checks
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName {
    original: String,
    canonical: String,
}

impl UserName {
    /// Parse a user-chosen name
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let original: String = input.as_ref().nfkc().collect::<String>().trim().to_string();

        let length = original.chars().count();
        if !(USER_NAME_MIN_LENGTH..=USER_NAME_MAX_LENGTH).contains(&length) {
            return Err(UserNameError::Length { length });
        }

        if let Some((position, char)) = original
            .chars()
            .enumerate()
            .find(|&(_, c)| !Self::is_valid_char(c))
        {
            return Err(UserNameError::InvalidCharacter { char, position });
        }

        Ok(Self::from_db(original))
    }

    /// Normalize a name typed at login the way `new` does, without the
    /// policy checks; a name that fails them simply matches no one.
    pub fn for_lookup(input: impl AsRef<str>) -> Self {
        Self::from_db(input.as_ref().nfkc().collect::<String>().trim())
    }

    /// Default user name for registrations that leave it blank
    pub fn from_email(email: &Email) -> Self {
        Self::from_db(email.as_str())
    }

    /// Create from database value (assumes already validated)
    pub fn from_db(original: impl Into<String>) -> Self {
        let original = original.into();
        let canonical = original.to_lowercase();
        Self {
            original,
            canonical,
        }
    }

    #[inline]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[inline]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    #[inline]
    fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || ALLOWED_SPECIAL_CHARS.contains(&c)
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserName")
            .field("original", &self.original)
            .field("canonical", &self.canonical)
            .finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_names() {
        assert!(UserName::new("reader").is_ok());
        assert!(UserName::new("Book.Worm_42").is_ok());
        assert!(UserName::new("a".repeat(48)).is_ok());
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(
            UserName::new("abc"),
            Err(UserNameError::Length { length: 3 })
        );
        assert_eq!(
            UserName::new("a".repeat(49)),
            Err(UserNameError::Length { length: 49 })
        );
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            UserName::new("book worm"),
            Err(UserNameError::InvalidCharacter {
                char: ' ',
                position: 4
            })
        );
        assert!(UserName::new("読書好きさん").is_err());
    }

    #[test]
    fn test_canonical_is_lowercase() {
        let name = UserName::new("  BookWorm ").unwrap();
        assert_eq!(name.original(), "BookWorm");
        assert_eq!(name.canonical(), "bookworm");
    }

    #[test]
    fn test_fullwidth_is_normalized() {
        let name = UserName::new("ｒｅａｄｅｒ").unwrap();
        assert_eq!(name.canonical(), "reader");
    }

    #[test]
    fn test_lookup_matches_registration() {
        let registered = UserName::new("ｒｅａｄｅｒ").unwrap();
        let typed = UserName::for_lookup("  ＲＥＡＤＥＲ ");
        assert_eq!(typed.canonical(), registered.canonical());

        // No policy at lookup time
        assert_eq!(UserName::for_lookup("abc").canonical(), "abc");
    }

    #[test]
    fn test_from_email() {
        let email = Email::new("Reader@BookStore.com").unwrap();
        let name = UserName::from_email(&email);
        assert_eq!(name.original(), "Reader@BookStore.com");
        assert_eq!(name.canonical(), "reader@bookstore.com");
    }
}

//! User Entity
//!
//! Identity principal: credentials plus role memberships.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    email::Email, user_name::UserName, user_password::UserPassword, user_role::UserRole,
};

#[derive(Debug, Clone)]
pub struct User {
    /// Database identity; unassigned until created
    pub id: UserId,
    pub email: Email,
    /// Login name (defaults to the email address)
    pub user_name: UserName,
    pub password_hash: UserPassword,
    pub roles: Vec<UserRole>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// New user without any role membership
    pub fn new(email: Email, user_name: Option<UserName>, password_hash: UserPassword) -> Self {
        let user_name = user_name.unwrap_or_else(|| UserName::from_email(&email));
        Self {
            id: UserId::unassigned(),
            email,
            user_name,
            password_hash,
            roles: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    fn password() -> UserPassword {
        let raw = RawPassword::new("Dune#Arrakis65".to_string()).unwrap();
        UserPassword::from_raw(&raw, None).unwrap()
    }

    #[test]
    fn test_explicit_user_name_is_kept() {
        let email = Email::new("admin@bookstore.com").unwrap();
        let user = User::new(email, Some(UserName::new("Admin").unwrap()), password());

        assert_eq!(user.user_name.original(), "Admin");
        assert_eq!(user.email.as_str(), "admin@bookstore.com");
    }

    #[test]
    fn test_new_user_defaults() {
        let email = Email::new("reader@bookstore.com").unwrap();
        let user = User::new(email, None, password());

        assert!(!user.id.is_assigned());
        assert_eq!(user.user_name.original(), "reader@bookstore.com");
        assert!(user.roles.is_empty());
    }
}

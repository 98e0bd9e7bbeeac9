//! Login Use Case
//!
//! Verifies credentials and issues a bearer token.

use std::sync::{Arc, LazyLock};

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

const ACTION: &str = "Users - Login";

/// Verified against when no user matches, so unknown and known accounts
/// cost the same Argon2 work.
static UNKNOWN_USER_HASH: LazyLock<Option<UserPassword>> = LazyLock::new(|| {
    let raw = RawPassword::new("unknown-user-placeholder".to_string()).ok()?;
    UserPassword::from_raw(&raw, None).ok()
});

pub struct LoginInput {
    pub email_address: Option<String>,
    /// Takes precedence over the email address when present
    pub user_name: Option<String>,
    pub password: String,
}

pub struct LoginOutput {
    pub token: String,
}

pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let user_name = non_blank(input.user_name);
        let email_address = non_blank(input.email_address);

        let user = match (user_name, email_address) {
            (Some(name), _) => {
                tracing::info!(action = ACTION, user = %name, "Attempted");
                self.user_repo
                    .find_by_user_name(&UserName::for_lookup(name))
                    .await?
            }
            (None, Some(address)) => {
                tracing::info!(action = ACTION, user = %address, "Attempted");
                // A malformed address cannot belong to anyone
                match Email::new(address) {
                    Ok(email) => self.user_repo.find_by_email(&email).await?,
                    Err(_) => None,
                }
            }
            (None, None) => {
                return Err(AuthError::Validation(
                    "The Email Address or Username field is required".to_string(),
                ));
            }
        };

        let raw_password = RawPassword::for_login(input.password);
        let pepper = self.config.pepper();
        let user = match user {
            Some(user) => user.password_hash.verify(&raw_password, pepper).then_some(user),
            None => {
                if let Some(hash) = UNKNOWN_USER_HASH.as_ref() {
                    let _ = hash.verify(&raw_password, pepper);
                }
                None
            }
        };
        let Some(user) = user else {
            tracing::info!(action = ACTION, "Not Authenticated");
            return Err(AuthError::InvalidCredentials);
        };

        let token = self.tokens.issue(&user)?;
        tracing::info!(action = ACTION, user_id = %user.id, "Successful");

        Ok(LoginOutput { token })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_user_hash_is_usable() {
        let hash = UNKNOWN_USER_HASH.as_ref().unwrap();
        assert!(hash.as_phc_string().starts_with("$argon2id$"));
        assert!(!hash.verify(&RawPassword::for_login("Dune#Arrakis65".to_string()), None));
    }
}

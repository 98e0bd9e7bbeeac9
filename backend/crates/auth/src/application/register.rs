//! Register Use Case
//!
//! Creates a new identity user. No role is assigned.

use kernel::id::UserId;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

const ACTION: &str = "Users - Register";

pub struct RegisterInput {
    pub email_address: String,
    /// Blank or absent means "use the email address"
    pub user_name: Option<String>,
    pub password: String,
}

pub struct RegisterOutput {
    pub user_id: UserId,
}

pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let email = Email::new(input.email_address)?;
        tracing::info!(action = ACTION, email = %email, "Attempted");

        let user_name = match input.user_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => {
                Some(UserName::new(name).map_err(|e| AuthError::Validation(e.to_string()))?)
            }
            _ => None,
        };

        let raw_password = RawPassword::new(input.password)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let mut user = User::new(email, user_name, password_hash);
        self.user_repo.create(&mut user).await?;

        tracing::info!(
            action = ACTION,
            user_id = %user.id,
            user_name = %user.user_name,
            "Successful"
        );

        Ok(RegisterOutput { user_id: user.id })
    }
}

//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AuthResult;

/// User (identity) repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert the user and assign its generated id.
    ///
    /// Fails with `AuthError::RegistrationFailed` when the email or
    /// user name is already taken.
    async fn create(&self, user: &mut User) -> AuthResult<()>;

    /// Find user (with roles) by canonical user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Find user (with roles) by canonical email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;
}

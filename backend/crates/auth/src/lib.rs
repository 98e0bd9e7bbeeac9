//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Users, roles, value objects, repository traits
//! - `application/` - Register/login use cases and the token service
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, bearer guards
//!
//! ## Features
//! - Registration with email, optional user name and password
//! - Login by user name or email, answered with a signed bearer token
//! - Role-based access (`Administrator`, `Customer`)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - HS256 tokens, five minute lifetime, issuer doubles as audience
//! - No refresh and no revocation: a token is valid until it expires

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{AccessClaims, TokenService};
pub use domain::value_object::user_role::UserRole;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{AuthGuard, CurrentUser, require_administrator, require_bearer};
pub use presentation::router::{users_router, users_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

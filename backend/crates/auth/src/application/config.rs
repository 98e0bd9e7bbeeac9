//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

/// Default token issuer (and audience)
pub const DEFAULT_JWT_ISSUER: &str = "bookstore";

/// Bearer token lifetime
pub const TOKEN_TTL: Duration = Duration::from_secs(5 * 60);

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 signing key
    pub jwt_secret: Vec<u8>,
    /// Written to both `iss` and `aud`
    pub jwt_issuer: String,
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>, jwt_issuer: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            jwt_issuer: jwt_issuer.into(),
            token_ttl: TOKEN_TTL,
            password_pepper: None,
        }
    }

    /// Create config with a random signing key (for development).
    ///
    /// Tokens do not survive a restart.
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::new(secret.to_vec(), DEFAULT_JWT_ISSUER)
    }

    pub fn with_pepper(mut self, pepper: impl Into<Vec<u8>>) -> Self {
        self.password_pepper = Some(pepper.into());
        self
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_issuer", &self.jwt_issuer)
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret_defaults() {
        let config = AuthConfig::with_random_secret();
        assert_eq!(config.jwt_secret.len(), 32);
        assert_eq!(config.jwt_issuer, DEFAULT_JWT_ISSUER);
        assert_eq!(config.token_ttl, Duration::from_secs(300));
        assert!(config.pepper().is_none());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = AuthConfig::new(b"super-secret-key".to_vec(), "bookstore").with_pepper("pep");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret-key"));
        assert!(!debug.contains("pep\""));
        assert!(debug.contains("bookstore"));
    }
}

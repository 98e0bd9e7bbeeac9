//! Server configuration from the environment

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::application::config::DEFAULT_JWT_ISSUER;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug)]
pub struct ApiConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub auth: AuthConfig,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// `development` allows a missing `JWT_KEY` (a random key is generated)
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        development: bool,
    ) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR is not a socket address")?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .context("DATABASE_MAX_CONNECTIONS is not a number")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| DEFAULT_JWT_ISSUER.to_string());
        let mut auth = match lookup("JWT_KEY") {
            Some(key) if !key.is_empty() => AuthConfig::new(key.into_bytes(), issuer),
            _ if development => {
                tracing::warn!("JWT_KEY not set, using a random signing key");
                AuthConfig {
                    jwt_issuer: issuer,
                    ..AuthConfig::with_random_secret()
                }
            }
            _ => bail!("JWT_KEY must be set in production"),
        };

        if let Some(pepper) = lookup("PASSWORD_PEPPER").filter(|p| !p.is_empty()) {
            auth = auth.with_pepper(pepper.into_bytes());
        }

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            auth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            ApiConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://db/books")]), true)
                .unwrap();

        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.auth.jwt_issuer, DEFAULT_JWT_ISSUER);
        assert_eq!(config.auth.jwt_secret.len(), 32);
        assert!(config.auth.pepper().is_none());
    }

    #[test]
    fn test_explicit_values() {
        let config = ApiConfig::from_lookup(
            lookup(&[
                ("DATABASE_URL", "postgres://db/books"),
                ("BIND_ADDR", "127.0.0.1:8080"),
                ("DATABASE_MAX_CONNECTIONS", "12"),
                ("JWT_KEY", "a-very-long-signing-key"),
                ("JWT_ISSUER", "bookstore-test"),
                ("PASSWORD_PEPPER", "pepper"),
            ]),
            false,
        )
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.auth.jwt_secret, b"a-very-long-signing-key");
        assert_eq!(config.auth.jwt_issuer, "bookstore-test");
        assert_eq!(config.auth.pepper(), Some(&b"pepper"[..]));
    }

    #[test]
    fn test_missing_database_url() {
        assert!(ApiConfig::from_lookup(lookup(&[]), true).is_err());
    }

    #[test]
    fn test_production_requires_jwt_key() {
        let vars = [("DATABASE_URL", "postgres://db/books")];
        assert!(ApiConfig::from_lookup(lookup(&vars), false).is_err());
    }

    #[test]
    fn test_bad_numbers_are_rejected() {
        let vars = [
            ("DATABASE_URL", "postgres://db/books"),
            ("DATABASE_MAX_CONNECTIONS", "many"),
        ];
        assert!(ApiConfig::from_lookup(lookup(&vars), true).is_err());
    }
}

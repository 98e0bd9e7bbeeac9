//! HS256 JSON Web Tokens
//!
//! The issuer doubles as the audience: tokens are minted and consumed by
//! the same service.

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind as JwtErrorKind,
};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("Token has expired")]
    Expired,

    #[error("Invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// Symmetric token codec bound to one secret and one issuer
#[derive(Clone)]
pub struct JwtCodec {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtCodec {
    pub fn hs256(secret: &[u8], issuer: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.leeway = 0;

        Self {
            header: Header::new(Algorithm::HS256),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn encode<C: Serialize>(&self, claims: &C) -> Result<String, JwtError> {
        encode(&self.header, claims, &self.encoding_key).map_err(JwtError::Encode)
    }

    /// Checks signature, expiry, issuer and audience.
    pub fn decode<C: DeserializeOwned>(&self, token: &str) -> Result<C, JwtError> {
        decode::<C>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::Invalid(e),
            })
    }
}

impl std::fmt::Debug for JwtCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtCodec")
            .field("algorithm", &self.header.alg)
            .field("issuer", &self.validation.iss)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Claims {
        sub: String,
        iss: String,
        aud: String,
        exp: u64,
    }

    fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    fn claims(issuer: &str, exp: u64) -> Claims {
        Claims {
            sub: "reader@bookstore.test".to_string(),
            iss: issuer.to_string(),
            aud: issuer.to_string(),
            exp,
        }
    }

    #[test]
    fn test_encode_decode() {
        let codec = JwtCodec::hs256(b"test-secret-key", "bookstore");
        let original = claims("bookstore", now() + 300);

        let token = codec.encode(&original).unwrap();
        let decoded: Claims = codec.decode(&token).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let issuing = JwtCodec::hs256(b"test-secret-key", "bookstore");
        let verifying = JwtCodec::hs256(b"another-secret", "bookstore");

        let token = issuing.encode(&claims("bookstore", now() + 300)).unwrap();
        let result = verifying.decode::<Claims>(&token);
        assert!(matches!(result, Err(JwtError::Invalid(_))));
    }

    #[test]
    fn test_wrong_issuer_is_invalid() {
        let codec = JwtCodec::hs256(b"test-secret-key", "bookstore");
        let token = codec.encode(&claims("elsewhere", now() + 300)).unwrap();

        let result = codec.decode::<Claims>(&token);
        assert!(matches!(result, Err(JwtError::Invalid(_))));
    }

    #[test]
    fn test_expired_token() {
        let codec = JwtCodec::hs256(b"test-secret-key", "bookstore");
        let token = codec.encode(&claims("bookstore", now() - 10)).unwrap();

        let result = codec.decode::<Claims>(&token);
        assert!(matches!(result, Err(JwtError::Expired)));
    }

    #[test]
    fn test_garbage_token() {
        let codec = JwtCodec::hs256(b"test-secret-key", "bookstore");
        assert!(matches!(
            codec.decode::<Claims>("not.a.token"),
            Err(JwtError::Invalid(_))
        ));
    }
}

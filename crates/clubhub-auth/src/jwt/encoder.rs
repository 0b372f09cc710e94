//! Token issuing for local development and tests.
//!
//! Production tokens come from the identity provider; this encoder signs
//! tokens with the same settings so that a local setup can produce them.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use clubhub_core::config::AuthConfig;
use clubhub_core::error::AppError;
use clubhub_core::result::AppResult;

use super::claims::{Audience, Claims};

/// Signs HS256 identity tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    issuer: Option<String>,
    audience: Option<String>,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

impl JwtEncoder {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
        }
    }

    /// Issue a token for `subject` valid for `ttl`. A negative `ttl`
    /// produces an already expired token.
    pub fn issue(&self, subject: &str, ttl: Duration) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            exp: (now + ttl).timestamp(),
            iat: Some(now.timestamp()),
            iss: self.issuer.clone(),
            aud: self.audience.clone().map(Audience::One),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode identity token: {e}")))
    }
}

//! Identity provider token configuration.

use serde::{Deserialize, Serialize};

/// Settings for verifying bearer tokens issued by the external identity
/// provider. Tokens are HS256 JWTs whose `sub` claim is the caller identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared HMAC secret used by the identity provider to sign tokens.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Expected `iss` claim, if the provider sets one.
    #[serde(default)]
    pub issuer: Option<String>,
    /// Expected `aud` claim, if the provider sets one.
    #[serde(default)]
    pub audience: Option<String>,
    /// Allowed clock skew when checking `exp`.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            issuer: None,
            audience: None,
            leeway_seconds: default_leeway(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_leeway() -> u64 {
    5
}

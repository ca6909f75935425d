//! Configuration surface consumed by the engine at construction
//!
//! The surrounding bootstrap layer deserializes this from whatever source it
//! likes (file, environment, inline defaults) and hands it to
//! [`Jwt::from_config`](crate::Jwt::from_config). The engine treats the
//! resulting policy as immutable for its lifetime; reconfiguration means
//! constructing a new engine.

use serde::Deserialize;

/// Token engine configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    /// Signing algorithm identifier (`HS256`..`RS512`)
    pub algorithm: String,

    /// Shared secret, used by the symmetric (HS) family only
    pub secret: Option<String>,

    /// RSA key material, used by the asymmetric (RS) family only
    pub keys: Option<KeysConfig>,

    /// Clock-skew tolerance in seconds applied to timestamp comparisons
    pub leeway: i64,

    /// Token lifetime in minutes; `None` yields never-expiring tokens
    pub ttl: Option<i64>,

    /// Refresh grace window in minutes after issuance; `None` means
    /// refreshing is never time-limited
    pub refresh_ttl: Option<i64>,

    /// Claims that must be present in any validated payload
    pub required_claims: Vec<String>,

    /// Issuer (`iss`) claim override for newly issued tokens
    pub issuer: Option<String>,
}

/// RSA key material: literal PEM or filesystem paths
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeysConfig {
    /// Public key (PEM content or path)
    pub public: Option<String>,

    /// Private key (PEM content or path)
    pub private: Option<String>,

    /// Passphrase for an encrypted private key
    pub passphrase: Option<String>,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            algorithm: "HS512".to_string(),
            secret: None,
            keys: None,
            leeway: 0,
            ttl: Some(60),
            refresh_ttl: Some(20160), // 2 weeks
            required_claims: default_required_claims(),
            issuer: None,
        }
    }
}

pub(crate) fn default_required_claims() -> Vec<String> {
    ["iss", "iat", "exp", "nbf", "sub", "jti"]
        .iter()
        .map(|claim| claim.to_string())
        .collect()
}

impl JwtConfig {
    /// Configuration for a symmetric deployment with the given secret
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
            ..Self::default()
        }
    }

    /// Configuration for an asymmetric deployment with the given key material
    pub fn with_keys(algorithm: impl Into<String>, keys: KeysConfig) -> Self {
        Self {
            algorithm: algorithm.into(),
            keys: Some(keys),
            ..Self::default()
        }
    }
}

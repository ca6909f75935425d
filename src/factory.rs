//! Claim assembly for token issuance
//!
//! The [`Factory`] collects caller claims into a buffer, fills in the
//! registered defaults (`iss`, `iat`, `exp`, `nbf`, `jti`) for whatever the
//! caller left out, and emits an immutable [`Payload`]. Claims buffered via
//! [`add_custom_claims`](Factory::add_custom_claims) override everything,
//! including the defaults.

use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::config::JwtConfig;
use crate::payload::{ClaimSet, Payload};
use crate::utils::time;

const DEFAULT_ISSUER: &str = "http://localhost";

/// Claim names the factory fills in when the caller does not
const DEFAULT_CLAIMS: [&str; 5] = ["iss", "iat", "exp", "nbf", "jti"];

/// Builds payloads from caller claims plus registered defaults
#[derive(Debug, Clone)]
pub struct Factory {
    ttl: Option<i64>,
    issuer: Option<String>,
    claims: ClaimSet,
    custom_claims: ClaimSet,
}

impl Factory {
    /// A factory issuing tokens valid for `ttl` minutes
    ///
    /// A `None` ttl issues tokens with no `exp` claim at all.
    pub fn new(ttl: Option<i64>, issuer: Option<String>) -> Self {
        Self {
            ttl,
            issuer,
            claims: ClaimSet::new(),
            custom_claims: ClaimSet::new(),
        }
    }

    /// Derive a factory from the configuration surface
    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(config.ttl, config.issuer.clone())
    }

    /// Buffer a single claim for the next payload
    pub fn add_claim(&mut self, name: impl Into<String>, value: Value) -> &mut Self {
        self.claims.insert(name.into(), value);
        self
    }

    /// Buffer a set of claims for the next payload
    pub fn add_claims(&mut self, claims: ClaimSet) -> &mut Self {
        self.claims.extend(claims);
        self
    }

    /// Buffer claims that override defaults and regular claims alike
    pub fn add_custom_claims(&mut self, claims: ClaimSet) -> &mut Self {
        self.custom_claims.extend(claims);
        self
    }

    /// Assemble the buffered claims into a payload
    ///
    /// Drains both buffers. Also returns the names of timestamp claims the
    /// caller supplied explicitly, so validation can leave those alone.
    pub fn make(&mut self) -> (Payload, Vec<String>) {
        let mut claims = std::mem::take(&mut self.claims);
        let custom = std::mem::take(&mut self.custom_claims);

        let except: Vec<String> = ["iat", "nbf", "exp"]
            .iter()
            .filter(|name| claims.contains_key(**name) || custom.contains_key(**name))
            .map(|name| name.to_string())
            .collect();

        let now = time::now();
        for name in DEFAULT_CLAIMS {
            if claims.contains_key(name) {
                continue;
            }
            if let Some(value) = self.default_claim(name, now, &claims) {
                claims.insert(name.to_string(), value);
            }
        }

        claims.extend(custom);

        (Payload::new(claims), except)
    }

    fn default_claim(&self, name: &str, now: i64, claims: &ClaimSet) -> Option<Value> {
        match name {
            "iss" => Some(Value::from(
                self.issuer.as_deref().unwrap_or(DEFAULT_ISSUER),
            )),
            "iat" => Some(Value::from(now)),
            "exp" => self.ttl.map(|ttl| Value::from(now + ttl * 60)),
            "nbf" => Some(Value::from(now)),
            "jti" => Some(Value::from(token_id(claims))),
            _ => None,
        }
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::new(Some(60), None)
    }
}

/// A unique token id: hex over a hash of the claims plus fresh randomness
fn token_id(claims: &ClaimSet) -> String {
    use rand::RngCore;

    let mut hasher = Sha256::new();
    if let Ok(json) = serde_json::to_string(claims) {
        hasher.update(json.as_bytes());
    }

    let mut nonce = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut nonce);
    hasher.update(nonce);

    let digest = hasher.finalize();
    digest[..16].iter().map(|byte| format!("{byte:02x}")).collect()
}

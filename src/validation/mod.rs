//! Claim validation against an explicit policy
//!
//! Validation is driven by a [`ValidationPolicy`] value handed in at
//! construction. There is no ambient or global policy; two engines with
//! different policies can coexist in one process.

pub mod structure;

pub use structure::TokenStructure;

use serde_json::Value;

use crate::config::JwtConfig;
use crate::error::{Error, Result};
use crate::payload::ClaimSet;
use crate::utils::time;

/// Rules a claim set must satisfy to be accepted
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationPolicy {
    /// Claims that must be present
    pub required_claims: Vec<String>,

    /// Clock-skew tolerance in seconds for timestamp comparisons
    pub leeway: i64,

    /// Refresh grace window in minutes after issuance; `None` disables the
    /// refresh deadline entirely
    pub refresh_ttl: Option<i64>,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            required_claims: crate::config::default_required_claims(),
            leeway: 0,
            refresh_ttl: Some(20160),
        }
    }
}

impl ValidationPolicy {
    /// Derive a policy from the configuration surface
    pub fn from_config(config: &JwtConfig) -> Self {
        Self {
            required_claims: config.required_claims.clone(),
            leeway: config.leeway,
            refresh_ttl: config.refresh_ttl,
        }
    }
}

/// Applies a [`ValidationPolicy`] to decoded or about-to-be-issued claims
#[derive(Debug, Clone)]
pub struct ClaimsValidation {
    policy: ValidationPolicy,
}

impl ClaimsValidation {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Check presence of required claims and the temporal window
    ///
    /// Names listed in `except` are exempt from both the presence and the
    /// timestamp rules; issuance uses this for caller-supplied timestamps.
    pub fn check(&self, claims: &ClaimSet, except: &[String]) -> Result<()> {
        self.check_required(claims, except)?;
        self.check_timestamps(claims, except)
    }

    /// Check whether a token is still within its refresh window
    ///
    /// The window runs from the issued-at (`iat`) timestamp for
    /// `refresh_ttl` minutes. A policy without a refresh ttl never closes
    /// the window; a token without `iat` cannot be dated and passes too.
    pub fn check_refresh(&self, claims: &ClaimSet) -> Result<()> {
        let Some(refresh_ttl) = self.policy.refresh_ttl else {
            return Ok(());
        };

        let Some(issued_at) = numeric_claim(claims, "iat")? else {
            return Ok(());
        };

        if time::is_past(issued_at + refresh_ttl * 60, self.policy.leeway) {
            return Err(Error::TokenExpired(
                "token has expired and can no longer be refreshed".to_string(),
            ));
        }

        Ok(())
    }

    fn check_required(&self, claims: &ClaimSet, except: &[String]) -> Result<()> {
        let missing: Vec<&str> = self
            .policy
            .required_claims
            .iter()
            .filter(|claim| !except.contains(claim) && !claims.contains_key(claim.as_str()))
            .map(String::as_str)
            .collect();

        if !missing.is_empty() {
            return Err(Error::TokenInvalid(format!(
                "claims are missing: {}",
                missing.join(", ")
            )));
        }

        Ok(())
    }

    fn check_timestamps(&self, claims: &ClaimSet, except: &[String]) -> Result<()> {
        let leeway = self.policy.leeway;

        if !except.iter().any(|name| name == "nbf") {
            if let Some(not_before) = numeric_claim(claims, "nbf")? {
                if time::is_future(not_before, leeway) {
                    return Err(Error::TokenBeforeValid(
                        "not before claim is in the future".to_string(),
                    ));
                }
            }
        }

        if !except.iter().any(|name| name == "iat") {
            if let Some(issued_at) = numeric_claim(claims, "iat")? {
                if time::is_future(issued_at, leeway) {
                    return Err(Error::TokenBeforeValid(
                        "issued at claim is in the future".to_string(),
                    ));
                }
            }
        }

        if !except.iter().any(|name| name == "exp") {
            if let Some(expires) = numeric_claim(claims, "exp")? {
                if time::is_past(expires, leeway) {
                    return Err(Error::TokenExpired("token has expired".to_string()));
                }
            }
        }

        Ok(())
    }
}

/// Read a claim expected to hold a Unix timestamp
///
/// Absent is `None`; present but non-numeric is a `TokenInvalid` error
/// rather than being silently ignored.
fn numeric_claim(claims: &ClaimSet, name: &str) -> Result<Option<i64>> {
    match claims.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_i64().map(Some).ok_or_else(|| {
            Error::TokenInvalid(format!("claim {name} must be a numeric timestamp"))
        }),
    }
}

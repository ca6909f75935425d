//! Immutable claim container
//!
//! A [`Payload`] owns an ordered claim map and exposes read-only access.
//! Immutability is structural: there is no mutating API, so a decoded or
//! constructed payload cannot be altered after the fact. The claim map keeps
//! insertion order, which makes JSON serialization deterministic.

use serde_json::Value;

use crate::error::Result;

/// Ordered mapping from claim name to JSON value
pub type ClaimSet = serde_json::Map<String, Value>;

static NULL: Value = Value::Null;

/// Read-only view over a token's claim set
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    claims: ClaimSet,
}

impl Payload {
    /// Wrap a claim set
    pub fn new(claims: ClaimSet) -> Self {
        Self { claims }
    }

    /// Get a single claim value, or JSON null when absent
    pub fn get(&self, claim: &str) -> &Value {
        self.claims.get(claim).unwrap_or(&NULL)
    }

    /// Get several claim values in one call, preserving argument order
    pub fn get_many(&self, claims: &[&str]) -> Vec<&Value> {
        claims.iter().map(|claim| self.get(claim)).collect()
    }

    /// Whether the payload carries the claim
    pub fn has(&self, claim: &str) -> bool {
        self.claims.contains_key(claim)
    }

    /// The full claim set
    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }

    /// Unwrap into the owned claim set
    pub fn into_claims(self) -> ClaimSet {
        self.claims
    }

    /// Number of claims
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Whether the payload carries no claims at all
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Serialize the claim set to JSON
    ///
    /// Key order follows insertion order and forward slashes stay
    /// unescaped, matching the wire format.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.claims).map_err(|err| crate::error::Error::Json(err.to_string()))
    }
}

impl std::ops::Index<&str> for Payload {
    type Output = Value;

    fn index(&self, claim: &str) -> &Value {
        self.get(claim)
    }
}

impl From<ClaimSet> for Payload {
    fn from(claims: ClaimSet) -> Self {
        Self::new(claims)
    }
}

impl std::fmt::Display for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_json().map_err(|_| std::fmt::Error)?)
    }
}

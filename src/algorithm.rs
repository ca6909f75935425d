//! Signing algorithm identifiers
//!
//! The six supported algorithms form a closed set: three HMAC variants over
//! a shared secret and three RSASSA-PKCS1-v1_5 variants over a key pair.
//! Anything else, including the unsigned `none` algorithm, is rejected at
//! parse time so unsupported states never reach the signer.

use crate::error::{Error, Result};

/// Algorithm identifier carried in the token header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// HMAC with SHA-256
    Hs256,

    /// HMAC with SHA-384
    Hs384,

    /// HMAC with SHA-512
    Hs512,

    /// RSA PKCS#1 v1.5 with SHA-256
    Rs256,

    /// RSA PKCS#1 v1.5 with SHA-384
    Rs384,

    /// RSA PKCS#1 v1.5 with SHA-512
    Rs512,
}

impl Algorithm {
    /// Parse an algorithm identifier string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "HS256" => Ok(Algorithm::Hs256),
            "HS384" => Ok(Algorithm::Hs384),
            "HS512" => Ok(Algorithm::Hs512),
            "RS256" => Ok(Algorithm::Rs256),
            "RS384" => Ok(Algorithm::Rs384),
            "RS512" => Ok(Algorithm::Rs512),
            other => Err(Error::UnsupportedAlgorithm(other.to_string())),
        }
    }

    /// String representation used in the token header
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Hs256 => "HS256",
            Algorithm::Hs384 => "HS384",
            Algorithm::Hs512 => "HS512",
            Algorithm::Rs256 => "RS256",
            Algorithm::Rs384 => "RS384",
            Algorithm::Rs512 => "RS512",
        }
    }

    /// Whether the algorithm is HMAC-based (shared secret)
    pub fn is_symmetric(&self) -> bool {
        matches!(self, Algorithm::Hs256 | Algorithm::Hs384 | Algorithm::Hs512)
    }

    /// Whether the algorithm is RSA-based (public/private key pair)
    pub fn is_asymmetric(&self) -> bool {
        !self.is_symmetric()
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

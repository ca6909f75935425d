//! Pluggable signing strategy
//!
//! A [`Signer`] is a closed tagged variant over the six supported
//! algorithms, each carrying exactly the key material it needs: HMAC
//! variants hold a [`SymmetricKey`], RSA variants an [`RsaKeyPair`]. Mixing
//! an algorithm with the wrong family of material is rejected at
//! construction, so an unsupported combination is unrepresentable at sign
//! or verify time.

mod hmac;
mod rsa;

pub use self::rsa::RsaKeyPair;
pub use hmac::SymmetricKey;

use crate::algorithm::Algorithm;
use crate::config::JwtConfig;
use crate::error::{Error, Result};

/// Signs a byte string and verifies a signature against it
#[derive(Debug, Clone)]
pub enum Signer {
    /// HMAC-SHA256 over a shared secret
    Hs256(SymmetricKey),

    /// HMAC-SHA384 over a shared secret
    Hs384(SymmetricKey),

    /// HMAC-SHA512 over a shared secret
    Hs512(SymmetricKey),

    /// RSA PKCS#1 v1.5 with SHA-256 over a key pair
    Rs256(RsaKeyPair),

    /// RSA PKCS#1 v1.5 with SHA-384 over a key pair
    Rs384(RsaKeyPair),

    /// RSA PKCS#1 v1.5 with SHA-512 over a key pair
    Rs512(RsaKeyPair),
}

impl Signer {
    /// Build a symmetric signer from a shared secret
    ///
    /// Fails with `MissingSecret` on an empty secret and
    /// `UnsupportedAlgorithm` when handed an RSA identifier.
    pub fn symmetric(algorithm: Algorithm, secret: impl Into<Vec<u8>>) -> Result<Self> {
        let key = SymmetricKey::new(secret)?;
        match algorithm {
            Algorithm::Hs256 => Ok(Signer::Hs256(key)),
            Algorithm::Hs384 => Ok(Signer::Hs384(key)),
            Algorithm::Hs512 => Ok(Signer::Hs512(key)),
            other => Err(Error::UnsupportedAlgorithm(format!(
                "{other} does not take a shared secret"
            ))),
        }
    }

    /// Build an asymmetric signer from RSA key material
    ///
    /// Fails with `UnsupportedAlgorithm` when handed an HMAC identifier.
    pub fn asymmetric(algorithm: Algorithm, keys: RsaKeyPair) -> Result<Self> {
        match algorithm {
            Algorithm::Rs256 => Ok(Signer::Rs256(keys)),
            Algorithm::Rs384 => Ok(Signer::Rs384(keys)),
            Algorithm::Rs512 => Ok(Signer::Rs512(keys)),
            other => Err(Error::UnsupportedAlgorithm(format!(
                "{other} does not take an RSA key pair"
            ))),
        }
    }

    /// Build a signer from the configuration surface
    pub fn from_config(config: &JwtConfig) -> Result<Self> {
        let algorithm = Algorithm::from_str(&config.algorithm)?;

        if algorithm.is_symmetric() {
            let secret = config.secret.as_deref().ok_or(Error::MissingSecret)?;
            Signer::symmetric(algorithm, secret)
        } else {
            let keys = match &config.keys {
                Some(keys) => RsaKeyPair::from_pem(
                    keys.private.as_deref(),
                    keys.public.as_deref(),
                    keys.passphrase.as_deref(),
                )?,
                None => RsaKeyPair::from_pem(None, None, None)?,
            };
            Signer::asymmetric(algorithm, keys)
        }
    }

    /// The algorithm identifier this signer produces
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Signer::Hs256(_) => Algorithm::Hs256,
            Signer::Hs384(_) => Algorithm::Hs384,
            Signer::Hs512(_) => Algorithm::Hs512,
            Signer::Rs256(_) => Algorithm::Rs256,
            Signer::Rs384(_) => Algorithm::Rs384,
            Signer::Rs512(_) => Algorithm::Rs512,
        }
    }

    /// Sign an arbitrary byte string
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        match self {
            Signer::Hs256(key) => hmac::sign_hs256(key.as_bytes(), message),
            Signer::Hs384(key) => hmac::sign_hs384(key.as_bytes(), message),
            Signer::Hs512(key) => hmac::sign_hs512(key.as_bytes(), message),
            Signer::Rs256(keys) => rsa::sign_rs256(keys.private()?, message),
            Signer::Rs384(keys) => rsa::sign_rs384(keys.private()?, message),
            Signer::Rs512(keys) => rsa::sign_rs512(keys.private()?, message),
        }
    }

    /// Verify a signature against a byte string
    ///
    /// A signature that is structurally sound but does not match yields
    /// `Ok(false)`. Missing or unusable key material is an error.
    pub fn verify(&self, signature: &[u8], message: &[u8]) -> Result<bool> {
        match self {
            Signer::Hs256(key) => hmac::verify_hs256(key.as_bytes(), signature, message),
            Signer::Hs384(key) => hmac::verify_hs384(key.as_bytes(), signature, message),
            Signer::Hs512(key) => hmac::verify_hs512(key.as_bytes(), signature, message),
            Signer::Rs256(keys) => Ok(rsa::verify_rs256(keys.public()?, signature, message)),
            Signer::Rs384(keys) => Ok(rsa::verify_rs384(keys.public()?, signature, message)),
            Signer::Rs512(keys) => Ok(rsa::verify_rs512(keys.public()?, signature, message)),
        }
    }
}

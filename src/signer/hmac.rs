use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

use crate::error::{Error, Result};

/// Shared secret for the HMAC algorithm family
///
/// Construction rejects an empty secret, so a `SymmetricKey` always holds
/// usable material.
#[derive(Debug, Clone)]
pub struct SymmetricKey {
    secret: Vec<u8>,
}

impl SymmetricKey {
    /// Create a symmetric key, failing with `MissingSecret` on empty input
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(Error::MissingSecret);
        }
        Ok(Self { secret })
    }

    /// Get the secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.secret
    }
}

/// Compute an HS256 tag over the message
pub(crate) fn sign_hs256(secret: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret)
        .map_err(|err| Error::KeyParse(err.to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Compute an HS384 tag over the message
pub(crate) fn sign_hs384(secret: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    let mut mac = Hmac::<Sha384>::new_from_slice(secret)
        .map_err(|err| Error::KeyParse(err.to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Compute an HS512 tag over the message
pub(crate) fn sign_hs512(secret: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    let mut mac = Hmac::<Sha512>::new_from_slice(secret)
        .map_err(|err| Error::KeyParse(err.to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Verify an HS256 tag with constant-time comparison
pub(crate) fn verify_hs256(secret: &[u8], signature: &[u8], message: &[u8]) -> Result<bool> {
    let expected = sign_hs256(secret, message)?;
    Ok(tags_match(signature, &expected))
}

/// Verify an HS384 tag with constant-time comparison
pub(crate) fn verify_hs384(secret: &[u8], signature: &[u8], message: &[u8]) -> Result<bool> {
    let expected = sign_hs384(secret, message)?;
    Ok(tags_match(signature, &expected))
}

/// Verify an HS512 tag with constant-time comparison
pub(crate) fn verify_hs512(secret: &[u8], signature: &[u8], message: &[u8]) -> Result<bool> {
    let expected = sign_hs512(secret, message)?;
    Ok(tags_match(signature, &expected))
}

fn tags_match(provided: &[u8], expected: &[u8]) -> bool {
    if provided.len() != expected.len() {
        return false;
    }
    constant_time_eq(provided, expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGE: &[u8] = b"eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";

    #[test]
    fn test_hs256_roundtrip() {
        let secret = b"your-256-bit-secret";
        let tag = sign_hs256(secret, MESSAGE).unwrap();
        assert!(verify_hs256(secret, &tag, MESSAGE).unwrap());
    }

    #[test]
    fn test_hs384_roundtrip() {
        let secret = b"your-384-bit-secret-needs-to-be-longer";
        let tag = sign_hs384(secret, MESSAGE).unwrap();
        assert!(verify_hs384(secret, &tag, MESSAGE).unwrap());
    }

    #[test]
    fn test_hs512_roundtrip() {
        let secret = b"your-512-bit-secret-needs-to-be-even-longer-than-384-bit";
        let tag = sign_hs512(secret, MESSAGE).unwrap();
        assert!(verify_hs512(secret, &tag, MESSAGE).unwrap());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let tag = sign_hs256(b"your-256-bit-secret", MESSAGE).unwrap();
        assert!(!verify_hs256(b"wrong-secret", &tag, MESSAGE).unwrap());
    }

    #[test]
    fn test_tampered_tag_rejected() {
        let secret = b"your-256-bit-secret";
        let mut tag = sign_hs256(secret, MESSAGE).unwrap();
        tag[0] ^= 0x01;
        assert!(!verify_hs256(secret, &tag, MESSAGE).unwrap());
    }

    #[test]
    fn test_truncated_tag_rejected() {
        let secret = b"your-256-bit-secret";
        let tag = sign_hs256(secret, MESSAGE).unwrap();
        assert!(!verify_hs256(secret, &tag[..16], MESSAGE).unwrap());
    }

    #[test]
    fn test_empty_secret_rejected_at_construction() {
        assert!(matches!(
            SymmetricKey::new(Vec::new()),
            Err(Error::MissingSecret)
        ));
    }
}

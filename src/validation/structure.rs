//! Structural validation of the compact wire format
//!
//! Kept separate from [`Token`](crate::Token) construction so the segment
//! rules can be tested in isolation, even though every parse runs through
//! here.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::utils::base64url;

/// Checks that a wire string is shaped like a compact token
pub struct TokenStructure;

impl TokenStructure {
    /// Validate the three-segment shape and segment contents
    ///
    /// The trimmed segments must reconstruct the input verbatim; this
    /// rejects whitespace smuggled into a segment as well as empty
    /// segments.
    pub fn check(value: &str) -> Result<()> {
        let parts: Vec<&str> = value.split('.').collect();

        if parts.len() != 3 {
            return Err(Error::TokenInvalid(
                "wrong number of segments for token".to_string(),
            ));
        }

        let trimmed: Vec<&str> = parts
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect();

        if trimmed.len() != 3 || trimmed.join(".") != value {
            return Err(Error::TokenInvalid("malformed token".to_string()));
        }

        Self::check_segments(parts[0], parts[1], parts[2])
    }

    fn check_segments(header_b64: &str, payload_b64: &str, signature_b64: &str) -> Result<()> {
        if !decodes_to_object(header_b64) {
            return Err(Error::TokenMalformed(
                "invalid header segment encoding".to_string(),
            ));
        }

        if !decodes_to_object(payload_b64) {
            return Err(Error::TokenMalformed(
                "invalid payload segment encoding".to_string(),
            ));
        }

        let signature = base64url::decode_bytes(signature_b64)
            .map_err(|_| Error::TokenMalformed("invalid signature segment encoding".to_string()))?;

        if signature.is_empty() {
            return Err(Error::TokenMalformed(
                "empty signature segment".to_string(),
            ));
        }

        Ok(())
    }
}

fn decodes_to_object(segment: &str) -> bool {
    let Ok(json) = base64url::decode(segment) else {
        return false;
    };
    matches!(serde_json::from_str::<Value>(&json), Ok(Value::Object(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(header: &str, payload: &str, signature: &[u8]) -> String {
        format!(
            "{}.{}.{}",
            base64url::encode(header),
            base64url::encode(payload),
            base64url::encode_bytes(signature)
        )
    }

    #[test]
    fn test_valid_shape() {
        let value = wire(
            r#"{"typ":"JWT","alg":"HS256"}"#,
            r#"{"sub":"user"}"#,
            b"signature-bytes",
        );
        assert!(TokenStructure::check(&value).is_ok());
    }

    #[test]
    fn test_wrong_segment_count() {
        assert!(matches!(
            TokenStructure::check("a.b"),
            Err(Error::TokenInvalid(_))
        ));
        assert!(matches!(
            TokenStructure::check("a.b.c.d"),
            Err(Error::TokenInvalid(_))
        ));
        assert!(matches!(
            TokenStructure::check("not a token at all"),
            Err(Error::TokenInvalid(_))
        ));
    }

    #[test]
    fn test_whitespace_inside_segment_rejected() {
        let value = wire(r#"{"alg":"HS256"}"#, r#"{"sub":"user"}"#, b"sig");
        let smuggled = value.replacen('.', " .", 1);
        assert!(matches!(
            TokenStructure::check(&smuggled),
            Err(Error::TokenInvalid(_))
        ));
    }

    #[test]
    fn test_empty_segment_rejected() {
        assert!(matches!(
            TokenStructure::check("a..c"),
            Err(Error::TokenInvalid(_))
        ));
    }

    #[test]
    fn test_header_must_be_json_object() {
        let value = format!(
            "{}.{}.{}",
            base64url::encode("not json"),
            base64url::encode(r#"{"sub":"user"}"#),
            base64url::encode_bytes(b"sig")
        );
        assert!(matches!(
            TokenStructure::check(&value),
            Err(Error::TokenMalformed(_))
        ));
    }

    #[test]
    fn test_payload_must_be_json_object() {
        let value = format!(
            "{}.{}.{}",
            base64url::encode(r#"{"alg":"HS256"}"#),
            base64url::encode(r#""just a string""#),
            base64url::encode_bytes(b"sig")
        );
        assert!(matches!(
            TokenStructure::check(&value),
            Err(Error::TokenMalformed(_))
        ));
    }

    #[test]
    fn test_garbage_signature_segment_rejected() {
        let value = format!(
            "{}.{}.!!!",
            base64url::encode(r#"{"alg":"HS256"}"#),
            base64url::encode(r#"{"sub":"user"}"#)
        );
        assert!(matches!(
            TokenStructure::check(&value),
            Err(Error::TokenMalformed(_))
        ));
    }
}

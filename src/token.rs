//! Parsed compact token
//!
//! A [`Token`] is produced by [`Token::parse`] and keeps both the decoded
//! view (header map, payload, raw signature bytes) and the exact wire
//! segments it was built from. Verification must run over the original
//! base64 segments, not a re-serialization, so the segments are retained
//! verbatim.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::payload::{ClaimSet, Payload};
use crate::utils::base64url;
use crate::validation::TokenStructure;

/// A structurally valid, decoded token
///
/// Parsing checks structure only. The signature bytes are carried but not
/// verified; that is the engine's job.
#[derive(Debug, Clone)]
pub struct Token {
    value: String,
    header_b64: String,
    payload_b64: String,
    header: ClaimSet,
    payload: Payload,
    signature: Vec<u8>,
}

impl Token {
    /// Parse a compact wire string into its decoded parts
    pub fn parse(value: &str) -> Result<Self> {
        TokenStructure::check(value)?;

        let parts: Vec<&str> = value.split('.').collect();
        let (header_b64, payload_b64, signature_b64) = (parts[0], parts[1], parts[2]);

        let header_json = base64url::decode(header_b64)?;
        let header: ClaimSet = serde_json::from_str(&header_json)
            .map_err(|err| Error::TokenMalformed(format!("header is not a JSON object: {err}")))?;

        let payload_json = base64url::decode(payload_b64)?;
        let claims: ClaimSet = serde_json::from_str(&payload_json)
            .map_err(|err| Error::TokenMalformed(format!("payload is not a JSON object: {err}")))?;

        let signature = base64url::decode_bytes(signature_b64)?;

        Ok(Self {
            value: value.to_string(),
            header_b64: header_b64.to_string(),
            payload_b64: payload_b64.to_string(),
            header,
            payload: Payload::new(claims),
            signature,
        })
    }

    /// The header segment exactly as it appeared on the wire
    pub fn header_base64(&self) -> &str {
        &self.header_b64
    }

    /// The payload segment exactly as it appeared on the wire
    pub fn payload_base64(&self) -> &str {
        &self.payload_b64
    }

    /// The decoded header map
    pub fn header(&self) -> &ClaimSet {
        &self.header
    }

    /// The decoded payload
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The decoded claim set
    pub fn claims(&self) -> &ClaimSet {
        self.payload.claims()
    }

    /// The raw signature bytes
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// A single claim value, or JSON null when absent
    pub fn get(&self, claim: &str) -> &Value {
        self.payload.get(claim)
    }

    /// The full wire string
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Unwrap into the owned payload
    pub fn into_payload(self) -> Payload {
        self.payload
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

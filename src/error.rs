//! Error types for token processing
//!
//! This module defines the error taxonomy for issuing, parsing, verifying and
//! validating tokens. All errors implement `std::error::Error` and carry
//! enough context for callers to distinguish "expired" (eligible for a
//! refresh retry) from "invalid" (not eligible) without matching on message
//! strings.

/// Errors that can occur during token processing
///
/// The variants fall into two groups:
/// - Validation failures (`TokenMalformed`, `TokenInvalid`,
///   `TokenInvalidSignature`, `TokenExpired`, `TokenBeforeValid`) describe an
///   untrusted or stale token presented by a caller.
/// - Configuration failures (`UnsupportedAlgorithm`, `MissingSecret`,
///   `MissingPrivateKey`, `MissingPublicKey`, `KeyParse`,
///   `KeyFileUnreadable`) describe a broken deployment and are never
///   downgraded to a boolean by [`Jwt::check`](crate::Jwt::check).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Segment decoded but is not what the wire format requires
    /// (header/payload not JSON objects, empty signature, empty algorithm)
    TokenMalformed(String),

    /// Wire string does not have three valid segments, or required claims
    /// are missing from the payload
    TokenInvalid(String),

    /// Signature is well-formed but does not verify against the computed
    /// digest
    TokenInvalidSignature,

    /// The `exp` claim is in the past beyond leeway, or the refresh window
    /// has been exceeded
    TokenExpired(String),

    /// The `nbf` or `iat` claim is in the future beyond leeway
    TokenBeforeValid(String),

    /// Configured or header-declared algorithm is not one of the six
    /// supported identifiers
    UnsupportedAlgorithm(String),

    /// A symmetric algorithm was configured without a shared secret
    MissingSecret,

    /// An asymmetric sign was attempted without a private key
    MissingPrivateKey,

    /// An asymmetric verify was attempted without a public key
    MissingPublicKey,

    /// Key material was present but could not be parsed
    KeyParse(String),

    /// Key material pointed at a file that exists but cannot be read
    KeyFileUnreadable(String),

    /// Base64URL decoding failed
    Base64(String),

    /// JSON (de)serialization failed
    Json(String),
}

impl Error {
    /// Whether this error belongs to the validation taxonomy
    ///
    /// `Jwt::check` downgrades exactly this subset to `false`; everything
    /// else indicates a broken deployment and keeps propagating.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::TokenMalformed(_)
                | Error::TokenInvalid(_)
                | Error::TokenInvalidSignature
                | Error::TokenExpired(_)
                | Error::TokenBeforeValid(_)
        )
    }

    /// Whether the token may still be exchanged for a fresh one
    ///
    /// Middleware maps this to a 401 response that invites a refresh retry.
    pub fn is_expired(&self) -> bool {
        matches!(self, Error::TokenExpired(_))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::TokenMalformed(msg) => write!(f, "Malformed token: {msg}"),
            Error::TokenInvalid(msg) => write!(f, "Invalid token: {msg}"),
            Error::TokenInvalidSignature => write!(f, "Signature verification failed"),
            Error::TokenExpired(msg) => write!(f, "{msg}"),
            Error::TokenBeforeValid(msg) => write!(f, "{msg}"),
            Error::UnsupportedAlgorithm(alg) => {
                write!(f, "Unsupported or invalid signing algorithm: {alg}")
            }
            Error::MissingSecret => write!(f, "Secret not provided for symmetric algorithm"),
            Error::MissingPrivateKey => write!(f, "Private key not provided"),
            Error::MissingPublicKey => write!(f, "Public key not provided"),
            Error::KeyParse(msg) => write!(f, "Unable to parse key material: {msg}"),
            Error::KeyFileUnreadable(msg) => write!(f, "Key file is not readable: {msg}"),
            Error::Base64(msg) => write!(f, "Base64URL decoding failed: {msg}"),
            Error::Json(msg) => write!(f, "JSON processing failed: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias for jwtforge operations
pub type Result<T> = std::result::Result<T, Error>;

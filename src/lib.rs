//! # jwtforge
//!
//! A small engine for issuing, verifying and validating JSON Web Tokens in
//! compact serialization.
//!
//! The engine separates three concerns that are easy to blur together:
//!
//! - **Signing** is handled by a [`Signer`], a closed set of six algorithms
//!   (`HS256`/`HS384`/`HS512` over a shared secret, `RS256`/`RS384`/`RS512`
//!   over RSA PKCS#1 v1.5 key material). The unauthenticated `none`
//!   algorithm is not representable.
//! - **Issuance** runs through a [`Factory`] that fills in registered
//!   claims (`iss`, `iat`, `exp`, `nbf`, `jti`) the caller left out and
//!   produces an immutable [`Payload`].
//! - **Validation** applies an explicit [`ValidationPolicy`] (required
//!   claims, clock-skew leeway, refresh window) to a decoded claim set.
//!
//! ## Quick start
//!
//! ```no_run
//! use jwtforge::{ClaimSet, Jwt, JwtConfig};
//! use serde_json::json;
//!
//! # fn main() -> jwtforge::Result<()> {
//! let config = JwtConfig {
//!     algorithm: "HS256".to_string(),
//!     ..JwtConfig::with_secret("keep-this-out-of-source-control")
//! };
//! let mut jwt = Jwt::from_config(&config)?;
//!
//! let mut claims = ClaimSet::new();
//! claims.insert("sub".to_string(), json!("543f7a76-d7ff-4f23"));
//! let token = jwt.encode(claims)?;
//!
//! // Later, on the receiving side. `Bearer `-prefixed values work too.
//! let payload = jwt.check_or_fail(token.as_str())?;
//! assert_eq!(payload["sub"], "543f7a76-d7ff-4f23");
//! # Ok(())
//! # }
//! ```
//!
//! ## Security notes
//!
//! - HMAC comparison is constant-time.
//! - [`Jwt::decode`] verifies the signature over the exact wire segments
//!   before exposing any claim; there is no way to read claims from a token
//!   whose signature did not verify, short of parsing it yourself.
//! - [`Jwt::refresh`] re-issues with fresh timestamps and token id, and
//!   refuses tokens whose issued-at has left the refresh window.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod factory;
pub mod jwt;
pub mod payload;
pub mod signer;
pub mod token;
pub mod utils;
pub mod validation;

pub use algorithm::Algorithm;
pub use config::{JwtConfig, KeysConfig};
pub use error::{Error, Result};
pub use factory::Factory;
pub use jwt::Jwt;
pub use payload::{ClaimSet, Payload};
pub use signer::{RsaKeyPair, Signer, SymmetricKey};
pub use token::Token;
pub use validation::{ClaimsValidation, TokenStructure, ValidationPolicy};

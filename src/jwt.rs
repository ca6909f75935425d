//! Token engine facade
//!
//! [`Jwt`] wires the factory, signer and validation together behind the
//! operations callers actually use: encode, decode, check and refresh.
//! Decode verifies the signature over the exact wire segments before any
//! claim is trusted; claim validation is a separate, explicit step.

use serde_json::Value;
use tracing::debug;

use crate::config::JwtConfig;
use crate::error::{Error, Result};
use crate::factory::Factory;
use crate::payload::{ClaimSet, Payload};
use crate::signer::Signer;
use crate::token::Token;
use crate::utils::base64url;
use crate::validation::{ClaimsValidation, ValidationPolicy};

/// Issues, verifies and validates compact tokens
#[derive(Debug, Clone)]
pub struct Jwt {
    signer: Signer,
    factory: Factory,
    validation: ClaimsValidation,
}

impl Jwt {
    /// Assemble an engine from its parts
    pub fn new(signer: Signer, factory: Factory, policy: ValidationPolicy) -> Self {
        Self {
            signer,
            factory,
            validation: ClaimsValidation::new(policy),
        }
    }

    /// Assemble an engine from the configuration surface
    pub fn from_config(config: &JwtConfig) -> Result<Self> {
        Ok(Self::new(
            Signer::from_config(config)?,
            Factory::from_config(config),
            ValidationPolicy::from_config(config),
        ))
    }

    /// Issue a signed token carrying the given claims
    ///
    /// The factory fills in defaults for registered claims the caller did
    /// not supply, then the assembled payload is validated before signing.
    /// A payload that would be rejected on decode is never issued.
    pub fn encode(&mut self, claims: ClaimSet) -> Result<Token> {
        self.factory.add_claims(claims);
        let (payload, except) = self.factory.make();

        self.validation.check(payload.claims(), &except)?;

        let token = self.generate(&payload)?;
        debug!(algorithm = %self.signer.algorithm(), "issued token");
        Ok(token)
    }

    /// Verify a token's signature and decode it
    ///
    /// Accepts the raw wire string or an `Authorization`-style value; the
    /// last whitespace-separated part is taken as the token, which strips a
    /// `Bearer ` prefix. Claims are not validated here.
    pub fn decode(&self, value: &str) -> Result<Token> {
        let raw = extract(value)?;
        let token = Token::parse(raw)?;

        let algorithm = token
            .header()
            .get("alg")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if algorithm.is_empty() {
            return Err(Error::TokenMalformed(
                "empty algorithm in token header".to_string(),
            ));
        }

        let message = format!("{}.{}", token.header_base64(), token.payload_base64());
        if !self.signer.verify(token.signature(), message.as_bytes())? {
            debug!("signature verification failed");
            return Err(Error::TokenInvalidSignature);
        }

        Ok(token)
    }

    /// Decode a token and validate its claims, or fail
    pub fn check_or_fail(&self, value: &str) -> Result<Payload> {
        let payload = self.decode(value)?.into_payload();
        self.validation.check(payload.claims(), &[])?;
        Ok(payload)
    }

    /// Decode a token and validate its claims
    ///
    /// Validation failures come back as `Ok(false)`; anything else (a
    /// malformed token, a bad signature, unusable keys) stays an error.
    pub fn check(&self, value: &str) -> Result<bool> {
        match self.check_or_fail(value) {
            Ok(_) => Ok(true),
            Err(err) if err.is_validation() => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Re-issue a token with fresh timestamps and id
    ///
    /// The old token's signature must still verify and its issued-at must
    /// fall within the refresh window, but an expired `exp` does not block
    /// refreshing. Timestamps and the token id are recomputed; every other
    /// claim carries over.
    pub fn refresh(&mut self, value: &str) -> Result<Token> {
        let token = self.decode(value)?;
        self.validation.check_refresh(token.claims())?;

        let mut claims = token.into_payload().into_claims();
        for name in ["iat", "nbf", "exp", "jti"] {
            claims.remove(name);
        }

        debug!("refreshing token");
        self.encode(claims)
    }

    /// The validation policy in force
    pub fn policy(&self) -> &ValidationPolicy {
        self.validation.policy()
    }

    fn generate(&self, payload: &Payload) -> Result<Token> {
        let mut header = ClaimSet::new();
        header.insert("typ".to_string(), Value::from("JWT"));
        header.insert(
            "alg".to_string(),
            Value::from(self.signer.algorithm().as_str()),
        );
        let header_json = serde_json::to_string(&header)
            .map_err(|err| Error::Json(err.to_string()))?;

        let header_b64 = base64url::encode(&header_json);
        let payload_b64 = base64url::encode(&payload.to_json()?);

        let message = format!("{header_b64}.{payload_b64}");
        let signature = self.signer.sign(message.as_bytes())?;

        let value = format!("{message}.{}", base64url::encode_bytes(&signature));
        Token::parse(&value)
    }
}

/// Pull the token out of a header-style value
///
/// The token is the last whitespace-separated part, so `Bearer <token>`
/// and the bare token both work.
fn extract(value: &str) -> Result<&str> {
    value
        .split_whitespace()
        .last()
        .filter(|part| !part.is_empty())
        .ok_or_else(|| Error::TokenInvalid("missing authentication token".to_string()))
}

//! End-to-end flows over the symmetric algorithm family

use jwtforge::utils::{base64url, time};
use jwtforge::{ClaimSet, Error, Jwt, JwtConfig};
use serde_json::json;

fn engine(algorithm: &str) -> Jwt {
    let config = JwtConfig {
        algorithm: algorithm.to_string(),
        ..JwtConfig::with_secret("integration-test-secret")
    };
    Jwt::from_config(&config).expect("engine construction")
}

fn claims(value: serde_json::Value) -> ClaimSet {
    value.as_object().expect("JSON object").clone()
}

#[test]
fn roundtrip_with_defaults() {
    for algorithm in ["HS256", "HS384", "HS512"] {
        let mut jwt = engine(algorithm);
        let token = jwt
            .encode(claims(json!({"sub": "user-1"})))
            .expect("encode");

        let payload = jwt.check_or_fail(token.as_str()).expect("check");
        assert_eq!(payload["sub"], "user-1");
        assert_eq!(payload["iss"], "http://localhost");
        assert!(payload.has("iat"));
        assert!(payload.has("nbf"));
        assert!(payload.has("exp"));
        assert!(payload.has("jti"));
    }
}

#[test]
fn url_unsafe_claim_values_survive_the_wire() {
    let mut jwt = engine("HS256");
    let token = jwt
        .encode(claims(json!({"sub": "user-1", "m": "f?", "path": "/a/b?c=d&e=f"})))
        .expect("encode");

    // The wire string must stay within the base64url alphabet plus dots
    assert!(token
        .as_str()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'));

    let payload = jwt.check_or_fail(token.as_str()).expect("check");
    assert_eq!(payload["m"], "f?");
    assert_eq!(payload["path"], "/a/b?c=d&e=f");
}

#[test]
fn bearer_prefix_is_stripped() {
    let mut jwt = engine("HS256");
    let token = jwt.encode(claims(json!({"sub": "user-1"}))).expect("encode");

    let payload = jwt
        .check_or_fail(&format!("Bearer {}", token.as_str()))
        .expect("check with prefix");
    assert_eq!(payload["sub"], "user-1");
}

#[test]
fn tampered_signature_is_rejected() {
    let mut jwt = engine("HS256");
    let token = jwt.encode(claims(json!({"sub": "user-1"}))).expect("encode");

    let parts: Vec<&str> = token.as_str().split('.').collect();
    let mut signature = base64url::decode_bytes(parts[2]).expect("signature decodes");
    signature[0] ^= 0x01;
    let tampered = format!(
        "{}.{}.{}",
        parts[0],
        parts[1],
        base64url::encode_bytes(&signature)
    );

    assert!(matches!(
        jwt.decode(&tampered),
        Err(Error::TokenInvalidSignature)
    ));
}

#[test]
fn tampered_payload_is_rejected() {
    let mut jwt = engine("HS256");
    let token = jwt.encode(claims(json!({"sub": "user-1"}))).expect("encode");

    let parts: Vec<&str> = token.as_str().split('.').collect();
    let payload_json = base64url::decode(parts[1]).expect("payload decodes");
    let swapped = payload_json.replace("user-1", "user-2");
    let tampered = format!(
        "{}.{}.{}",
        parts[0],
        base64url::encode(&swapped),
        parts[2]
    );

    assert!(matches!(
        jwt.decode(&tampered),
        Err(Error::TokenInvalidSignature)
    ));
}

#[test]
fn structural_garbage_is_rejected() {
    let jwt = engine("HS256");

    assert!(matches!(jwt.decode("a.b"), Err(Error::TokenInvalid(_))));
    assert!(matches!(
        jwt.decode("not a token at all"),
        Err(Error::TokenInvalid(_))
    ));
}

#[test]
fn check_reports_validation_failures_as_false() {
    let mut jwt = engine("HS256");
    let token = jwt.encode(claims(json!({"sub": "user-1"}))).expect("encode");

    assert!(jwt.check(token.as_str()).expect("valid token"));
    assert!(!jwt.check("a.b.c").expect("malformed is a validation failure"));
}

#[test]
fn missing_required_claim_blocks_issuance() {
    // `sub` is required by default but has no factory default
    let mut jwt = engine("HS256");
    let err = jwt.encode(ClaimSet::new()).expect_err("should not issue");
    assert!(matches!(err, Error::TokenInvalid(_)));
}

#[test]
fn caller_supplied_expiry_wins_over_ttl() {
    let mut jwt = engine("HS256");
    let exp = time::now() + 5;
    let token = jwt
        .encode(claims(json!({"sub": "user-1", "exp": exp})))
        .expect("encode");

    assert_eq!(token.get("exp"), &json!(exp));
}

#[test]
fn expired_token_fails_validation_but_not_decode() {
    let mut jwt = engine("HS256");
    let token = jwt
        .encode(claims(json!({"sub": "user-1", "exp": time::now() - 100})))
        .expect("stale expiry is accepted at issuance");

    // Signature still verifies
    assert!(jwt.decode(token.as_str()).is_ok());
    // Claim validation rejects it
    assert!(matches!(
        jwt.check_or_fail(token.as_str()),
        Err(Error::TokenExpired(_))
    ));
    assert!(!jwt.check(token.as_str()).expect("downgraded to false"));
}

#[test]
fn leeway_forgives_recent_expiry() {
    let config = JwtConfig {
        algorithm: "HS256".to_string(),
        leeway: 120,
        ..JwtConfig::with_secret("integration-test-secret")
    };
    let mut jwt = Jwt::from_config(&config).expect("engine");

    let token = jwt
        .encode(claims(json!({"sub": "user-1", "exp": time::now() - 30})))
        .expect("encode");
    assert!(jwt.check(token.as_str()).expect("inside leeway"));
}

#[test]
fn null_ttl_issues_tokens_without_expiry() {
    // `exp` must come off the required list too, or validation rejects
    // the freshly built payload
    let mut config = JwtConfig {
        algorithm: "HS256".to_string(),
        ttl: None,
        ..JwtConfig::with_secret("integration-test-secret")
    };
    config.required_claims.retain(|claim| claim != "exp");
    let mut jwt = Jwt::from_config(&config).expect("engine");

    let token = jwt.encode(claims(json!({"sub": "user-1"}))).expect("encode");
    assert!(!token.payload().has("exp"));
    assert!(jwt.check(token.as_str()).expect("valid forever"));
}

#[test]
fn algorithms_are_not_interchangeable() {
    let mut hs256 = engine("HS256");
    let hs512 = engine("HS512");

    let token = hs256.encode(claims(json!({"sub": "user-1"}))).expect("encode");
    assert!(matches!(
        hs512.decode(token.as_str()),
        Err(Error::TokenInvalidSignature)
    ));
}

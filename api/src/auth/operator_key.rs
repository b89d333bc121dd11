//! Operator key middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use sha2::{Digest, Sha256};

use crate::error::AppError;
use crate::AppState;

/// Marker inserted into request extensions once the caller is a verified operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator;

/// SHA-256 hex digest of a key, the form `OPERATOR_KEY_HASH` is configured in
pub fn hash_operator_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compare a presented key against the configured hex digest without
/// short-circuiting on the first differing byte
pub fn operator_key_matches(key: &str, expected_hash: &str) -> bool {
    let Ok(expected) = hex::decode(expected_hash.trim()) else {
        return false;
    };
    let actual = Sha256::digest(key.as_bytes());

    actual.len() == expected.len()
        && actual
            .iter()
            .zip(&expected)
            .fold(0u8, |diff, (a, b)| diff | (a ^ b))
            == 0
}

/// Extract the key from the Authorization header
fn extract_bearer(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|k| !k.is_empty())
}

/// Operator authentication middleware
///
/// Rejects every request when no operator key hash is configured.
pub async fn operator_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let expected = state
        .operator_key_hash
        .as_deref()
        .ok_or(AppError::Unauthorized)?;

    let key = extract_bearer(&request).ok_or(AppError::Unauthorized)?;

    if !operator_key_matches(key, expected) {
        tracing::warn!(path = %request.uri().path(), "Rejected operator key");
        return Err(AppError::Unauthorized);
    }

    request.extensions_mut().insert(Operator);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_lowercase_sha256_hex() {
        assert_eq!(
            hash_operator_key("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn key_matches_configured_digest() {
        let hash = hash_operator_key("correct horse");
        assert!(operator_key_matches("correct horse", &hash));
        assert!(operator_key_matches("correct horse", &hash.to_uppercase()));
        assert!(!operator_key_matches("correct horsf", &hash));
        assert!(!operator_key_matches("correct horse", &hash[..62]));
        assert!(!operator_key_matches("correct horse", "not-hex"));
    }

    #[test]
    fn bearer_prefix_is_required() {
        let request = Request::builder()
            .header("Authorization", "Basic abc")
            .body(Body::empty())
            .unwrap();
        assert!(extract_bearer(&request).is_none());

        let request = Request::builder()
            .header("Authorization", "Bearer abc")
            .body(Body::empty())
            .unwrap();
        assert_eq!(extract_bearer(&request), Some("abc"));
    }
}

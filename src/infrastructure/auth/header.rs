//! Pre-verification inspection of the JOSE header
//!
//! `jsonwebtoken` rejects headers whose `alg` it does not know (such as `none`)
//! as a JSON error, which would hide an algorithm-confusion attempt behind a
//! generic parse failure. The header is therefore read here first, without
//! trusting anything else in the token.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use jsonwebtoken::Algorithm;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::AuthError;

#[derive(Debug, Deserialize)]
struct RawHeader {
    alg: Option<Value>,
}

/// Return the declared signing algorithm if it belongs to the HMAC family.
pub fn check_signing_method(token: &str) -> Result<Algorithm, AuthError> {
    let encoded = token
        .split('.')
        .next()
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| AuthError::malformed("missing header segment"))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(encoded.trim_end_matches('='))
        .map_err(|e| AuthError::malformed(format!("invalid header encoding: {}", e)))?;

    let header: RawHeader = serde_json::from_slice(&bytes)
        .map_err(|e| AuthError::malformed(format!("invalid header: {}", e)))?;

    let alg = match header.alg {
        Some(Value::String(alg)) => alg,
        Some(other) => return Err(AuthError::unexpected_signing_method(other.to_string())),
        None => return Err(AuthError::unexpected_signing_method("<missing>")),
    };

    match alg.as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        _ => Err(AuthError::unexpected_signing_method(alg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_header(header: &str) -> String {
        format!("{}.e30.c2ln", URL_SAFE_NO_PAD.encode(header))
    }

    #[test]
    fn test_accepts_hmac_family() {
        for (alg, expected) in [
            ("HS256", Algorithm::HS256),
            ("HS384", Algorithm::HS384),
            ("HS512", Algorithm::HS512),
        ] {
            let token = token_with_header(&format!(r#"{{"alg":"{}","typ":"JWT"}}"#, alg));
            assert_eq!(check_signing_method(&token).unwrap(), expected);
        }
    }

    #[test]
    fn test_rejects_none() {
        let token = token_with_header(r#"{"alg":"none","typ":"JWT"}"#);
        assert_eq!(
            check_signing_method(&token),
            Err(AuthError::unexpected_signing_method("none"))
        );
    }

    #[test]
    fn test_rejects_asymmetric() {
        let token = token_with_header(r#"{"alg":"RS256","typ":"JWT"}"#);
        assert_eq!(
            check_signing_method(&token),
            Err(AuthError::unexpected_signing_method("RS256"))
        );
    }

    #[test]
    fn test_rejects_missing_alg() {
        let token = token_with_header(r#"{"typ":"JWT"}"#);
        assert!(matches!(
            check_signing_method(&token),
            Err(AuthError::UnexpectedSigningMethod { .. })
        ));
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert!(matches!(
            check_signing_method("not-a-token"),
            Err(AuthError::MalformedToken { .. })
        ));
        assert!(matches!(
            check_signing_method(""),
            Err(AuthError::MalformedToken { .. })
        ));
    }
}

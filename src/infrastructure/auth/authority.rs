//! HS256 token issuance and validation

use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use std::fmt::Debug;
use tracing::{debug, warn};

use super::header::check_signing_method;
use crate::config::AuthConfig;
use crate::domain::{AuthError, AuthPayload, TokenClaims};

/// Trait for token operations
pub trait TokenCodec: Send + Sync + Debug {
    /// Sign a payload into a token expiring `expiry_seconds` from now
    fn encode(&self, payload: &AuthPayload) -> Result<String, AuthError>;

    /// Verify a token and return the payload it carries
    fn decode(&self, token: &str) -> Result<AuthPayload, AuthError>;

    /// Lifetime of issued tokens in seconds
    fn expiry_seconds(&self) -> i64;
}

/// Issues and validates tokens signed with a shared secret.
///
/// Immutable once built, so a single instance can be shared across threads.
#[derive(Clone)]
pub struct TokenAuthority {
    secret: Vec<u8>,
    expiry_seconds: i64,
    leeway_seconds: u64,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for TokenAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuthority")
            .field("secret", &"[hidden]")
            .field("expiry_seconds", &self.expiry_seconds)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}

impl TokenAuthority {
    /// Create an authority. An empty secret is accepted here and rejected on use.
    pub fn new(secret: impl AsRef<[u8]>, expiry_seconds: i64) -> Result<Self, AuthError> {
        if expiry_seconds <= 0 {
            return Err(AuthError::InvalidExpiry);
        }

        let secret = secret.as_ref().to_vec();
        let encoding_key = EncodingKey::from_secret(&secret);
        let decoding_key = DecodingKey::from_secret(&secret);

        Ok(Self {
            secret,
            expiry_seconds,
            leeway_seconds: 0,
            encoding_key,
            decoding_key,
        })
    }

    /// Create an authority from loaded configuration
    pub fn from_config(config: &AuthConfig) -> Result<Self, AuthError> {
        Ok(Self::new(config.secret.as_bytes(), config.expiry_seconds)?
            .with_leeway(config.leeway_seconds))
    }

    /// Tolerate `leeway_seconds` of clock skew when checking expiry
    pub fn with_leeway(mut self, leeway_seconds: u64) -> Self {
        self.leeway_seconds = leeway_seconds;
        self
    }

    pub fn leeway_seconds(&self) -> u64 {
        self.leeway_seconds
    }

    fn check_secret(&self) -> Result<(), AuthError> {
        if self.secret.is_empty() {
            return Err(AuthError::EmptySecret);
        }
        Ok(())
    }

    fn expiry_from_now(&self) -> Result<i64, AuthError> {
        if self.expiry_seconds <= 0 {
            return Err(AuthError::InvalidExpiry);
        }
        Utc::now()
            .timestamp()
            .checked_add(self.expiry_seconds)
            .ok_or(AuthError::InvalidExpiry)
    }
}

impl TokenCodec for TokenAuthority {
    fn encode(&self, payload: &AuthPayload) -> Result<String, AuthError> {
        if payload.user_id.is_empty() {
            return Err(AuthError::EmptyUserId);
        }
        self.check_secret()?;

        let expiry = self.expiry_from_now()?;
        let claims = TokenClaims::new(payload, expiry);

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::signing(e.to_string()))?;

        debug!(user_id = %payload.user_id, expiry, "Issued token");
        Ok(token)
    }

    fn decode(&self, token: &str) -> Result<AuthPayload, AuthError> {
        self.check_secret()?;

        let algorithm = check_signing_method(token).inspect_err(|e| {
            if let AuthError::UnexpectedSigningMethod { alg } = e {
                warn!(alg = %alg, "Rejected token with unexpected signing method");
            }
        })?;

        // Expiry lives in the custom `expiry` claim and is checked below
        let mut validation = Validation::new(algorithm);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.validate_aud = false;

        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(
            |e| match e.kind() {
                ErrorKind::InvalidAlgorithm => AuthError::unexpected_signing_method(format!(
                    "{:?}",
                    algorithm
                )),
                _ => {
                    debug!(error = %e, "Rejected malformed token");
                    AuthError::malformed(e.to_string())
                }
            },
        )?;

        let claims = token_data.claims;
        if claims.is_expired(self.leeway_seconds) {
            debug!(expiry = claims.expiry, "Rejected expired token");
            return Err(AuthError::TokenExpired);
        }
        if claims.user_id.is_empty() {
            return Err(AuthError::EmptyUserId);
        }

        debug!(user_id = %claims.user_id, expiry = claims.expiry, "Accepted token");
        Ok(claims.into_payload())
    }

    fn expiry_seconds(&self) -> i64 {
        self.expiry_seconds
    }
}

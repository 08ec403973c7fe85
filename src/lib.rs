//! Token Authority
//!
//! Issues and validates signed, time-limited authentication tokens:
//! - HS256 JWTs binding a user id and optional JSON data to an expiry
//! - Rejection of non-HMAC signing methods before any claim is trusted
//! - Lenient claim decoding with well-defined errors for missing fields
//!
//! ```
//! use token_authority::{AuthPayload, TokenAuthority, TokenCodec};
//!
//! let authority = TokenAuthority::new("098f6bcd4621d373cade4e832627b4f6", 2_592_000)?;
//! let token = authority.encode(&AuthPayload::new("sampleID"))?;
//! assert_eq!(authority.decode(&token)?.user_id, "sampleID");
//! # Ok::<(), token_authority::AuthError>(())
//! ```

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use self::config::{AppConfig, AuthConfig};
pub use domain::{AuthError, AuthPayload, TokenClaims};
pub use infrastructure::auth::{TokenAuthority, TokenCodec};

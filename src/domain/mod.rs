//! Domain layer - Token payloads, claims and errors

pub mod claims;
pub mod error;
pub mod payload;

pub use claims::TokenClaims;
pub use error::AuthError;
pub use payload::AuthPayload;

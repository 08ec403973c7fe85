use thiserror::Error;

/// Errors raised while issuing or validating tokens
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("expiry period must be greater than zero")]
    InvalidExpiry,

    #[error("salt is empty string")]
    EmptySecret,

    #[error("empty user id")]
    EmptyUserId,

    #[error("unexpected signing method: {alg}")]
    UnexpectedSigningMethod { alg: String },

    #[error("malformed token: {message}")]
    MalformedToken { message: String },

    #[error("access token expired")]
    TokenExpired,

    #[error("failed to sign token: {message}")]
    Signing { message: String },
}

impl AuthError {
    pub fn unexpected_signing_method(alg: impl Into<String>) -> Self {
        Self::UnexpectedSigningMethod { alg: alg.into() }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedToken {
            message: message.into(),
        }
    }

    pub fn signing(message: impl Into<String>) -> Self {
        Self::Signing {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_signing_method_error() {
        let error = AuthError::unexpected_signing_method("RS256");
        assert_eq!(error.to_string(), "unexpected signing method: RS256");
    }

    #[test]
    fn test_malformed_error() {
        let error = AuthError::malformed("InvalidSignature");
        assert_eq!(error.to_string(), "malformed token: InvalidSignature");
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(AuthError::EmptySecret.to_string(), "salt is empty string");
        assert_eq!(AuthError::TokenExpired.to_string(), "access token expired");
        assert_eq!(AuthError::EmptyUserId.to_string(), "empty user id");
    }
}

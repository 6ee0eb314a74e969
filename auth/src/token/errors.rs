use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures are specific here for internal diagnostics;
/// callers facing clients must collapse all of them into one opaque
/// "unauthenticated" outcome.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Token signature mismatch")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,
}

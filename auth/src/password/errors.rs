use thiserror::Error;

/// Error type for password operations.
///
/// A wrong password is not an error: `verify` reports it as `Ok(false)`.
/// `MalformedHash` means the stored blob itself could not be decoded and
/// is kept distinct so callers can log it before collapsing both cases
/// into one external outcome.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Salt generation failed: {0}")]
    SaltGeneration(String),

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Malformed password hash: {0}")]
    MalformedHash(String),
}

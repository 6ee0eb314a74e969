use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Claims;
use crate::token::TokenError;
use crate::token::TokenService;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// Holds the process-wide signing secret and token lifetime; everything
/// else is per-call input.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `token_secret` - Secret key for token signing
    /// * `token_lifetime_hours` - Hours until issued tokens expire
    pub fn new(token_secret: &[u8], token_lifetime_hours: i64) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_service: TokenService::new(token_secret, token_lifetime_hours),
        }
    }

    /// Hash a password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored hash.
    ///
    /// Errors stay specific here (`MalformedHash` vs. a plain
    /// mismatch); the caller decides how much of that reaches a client.
    pub fn verify_password(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<bool, PasswordError> {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Password verification failed
    /// * `Token` - Token issuance failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_service.issue(user_id)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue an access token without password verification.
    ///
    /// Used right after registration, where the caller has just created
    /// the credential record itself.
    pub fn issue_token(&self, user_id: &str) -> Result<String, TokenError> {
        self.token_service.issue(user_id)
    }

    /// Verify a presented token and return its claims.
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_service.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(SECRET, 24);

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, "user123")
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let claims = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(claims.user_id, "user123");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(SECRET, 24);

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, "user123");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_malformed_stored_hash() {
        let authenticator = Authenticator::new(SECRET, 24);

        let result = authenticator.authenticate("my_password", "garbage", "user123");
        assert!(matches!(
            result,
            Err(AuthenticationError::Password(
                PasswordError::MalformedHash(_)
            ))
        ));
    }

    #[test]
    fn test_issue_and_validate_token() {
        let authenticator = Authenticator::new(SECRET, 24);

        let token = authenticator
            .issue_token("user123")
            .expect("Failed to issue token");

        let claims = authenticator
            .validate_token(&token)
            .expect("Failed to validate token");
        assert_eq!(claims.user_id, "user123");
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = Authenticator::new(SECRET, 24);

        let result = authenticator.validate_token("invalid.token.here");
        assert!(result.is_err());
    }
}

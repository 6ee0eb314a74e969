//! Authentication utilities library
//!
//! Provides the security core for the catalog service:
//! - Password hashing (Argon2id over a random salt, constant-time verify)
//! - Signed bearer tokens (HMAC-SHA256, compact three-segment format)
//! - Authentication coordination
//!
//! The service defines its own user store and HTTP surface and adapts
//! these implementations; nothing in this crate does I/O.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenService;
//!
//! let service = TokenService::new(b"secret_key_at_least_32_bytes_long!", 24);
//! let token = service.issue("user123").unwrap();
//! let claims = service.verify(&token).unwrap();
//! assert_eq!(claims.user_id, "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 24);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth.authenticate("password123", &hash, "user123").unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.user_id, "user123");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use subtle::ConstantTimeEq;

use super::errors::PasswordError;

/// Length of the random per-password salt, in bytes.
const SALT_LEN: usize = 16;

/// Length of the derived key, in bytes.
const KEY_LEN: usize = 16;

// Argon2id cost parameters. These are part of the stored-hash contract:
// changing any of them invalidates every previously stored hash, since
// the stored blob carries only the salt and the derived key.
const T_COST: u32 = 3;
const M_COST_KIB: u32 = 64 * 1024;
const P_COST: u32 = 2;

/// Password hashing implementation.
///
/// Derives a key from `(password, salt)` with Argon2id and stores
/// `base64(salt || key)`. Verification re-derives the key with the same
/// fixed parameters and compares in constant time.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// A fresh random salt is drawn on every call, so hashing the same
    /// password twice yields two different encoded strings.
    ///
    /// # Errors
    /// * `SaltGeneration` - The OS randomness source failed
    /// * `DerivationFailed` - Key derivation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let mut salt = [0u8; SALT_LEN];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| PasswordError::SaltGeneration(e.to_string()))?;

        let key = self.derive_key(password.as_bytes(), &salt)?;

        let mut blob = Vec::with_capacity(SALT_LEN + KEY_LEN);
        blob.extend_from_slice(&salt);
        blob.extend_from_slice(&key);

        Ok(STANDARD.encode(blob))
    }

    /// Verify a password against a stored hash.
    ///
    /// # Returns
    /// True if the password matches, false otherwise
    ///
    /// # Errors
    /// * `MalformedHash` - The stored blob is not valid base64 or has
    ///   the wrong length
    /// * `DerivationFailed` - Key derivation failed
    pub fn verify(&self, password: &str, encoded_hash: &str) -> Result<bool, PasswordError> {
        let blob = STANDARD
            .decode(encoded_hash)
            .map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        if blob.len() != SALT_LEN + KEY_LEN {
            return Err(PasswordError::MalformedHash(format!(
                "expected {} bytes, got {}",
                SALT_LEN + KEY_LEN,
                blob.len()
            )));
        }

        let (salt, stored_key) = blob.split_at(SALT_LEN);
        let key = self.derive_key(password.as_bytes(), salt)?;

        // Constant-time comparison; no early exit on the first
        // mismatching byte.
        Ok(key.ct_eq(stored_key).into())
    }

    fn derive_key(&self, password: &[u8], salt: &[u8]) -> Result<[u8; KEY_LEN], PasswordError> {
        let params = Params::new(M_COST_KIB, T_COST, P_COST, Some(KEY_LEN))
            .map_err(|e| PasswordError::DerivationFailed(e.to_string()))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let mut key = [0u8; KEY_LEN];
        argon2
            .hash_password_into(password, salt, &mut key)
            .map_err(|e| PasswordError::DerivationFailed(e.to_string()))?;

        Ok(key)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));

        assert!(!hasher
            .verify("wrong_password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_same_password_hashes_differ() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("repeated").expect("Failed to hash password");
        let second = hasher.hash("repeated").expect("Failed to hash password");

        // Random salt: two hashes of one password never collide.
        assert_ne!(first, second);

        assert!(hasher.verify("repeated", &first).unwrap());
        assert!(hasher.verify("repeated", &second).unwrap());
    }

    #[test]
    fn test_stored_format() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("password123").expect("Failed to hash password");

        let blob = STANDARD.decode(&hash).expect("Stored hash is not base64");
        assert_eq!(blob.len(), SALT_LEN + KEY_LEN);
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let hasher = PasswordHasher::new();

        let result = hasher.verify("password", "not base64!!!");
        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));

        // Valid base64, wrong length.
        let short = STANDARD.encode([0u8; 8]);
        let result = hasher.verify("password", &short);
        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));
    }
}

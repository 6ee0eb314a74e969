use serde::Deserialize;
use serde::Serialize;

/// Claims carried in the body of an access token.
///
/// The token is the only place these live: nothing is persisted server
/// side, and a token is dead the moment its `exp` passes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Identifier of the authenticated user.
    pub user_id: String,

    /// Expiration time (Unix timestamp, seconds).
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user with an absolute expiration time.
    pub fn new(user_id: impl Into<String>, exp: i64) -> Self {
        Self {
            user_id: user_id.into(),
            exp,
        }
    }

    /// Check whether the claims have expired at `now`.
    ///
    /// A token expiring in the exact second of the check counts as
    /// expired.
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_expired_boundary() {
        let claims = Claims::new("user123", 1000);

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_serialized_field_order() {
        let claims = Claims::new("abc", 42);
        let json = serde_json::to_string(&claims).unwrap();

        assert_eq!(json, r#"{"user_id":"abc","exp":42}"#);
    }
}

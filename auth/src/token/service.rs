use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::Duration;
use chrono::Utc;
use hmac::Hmac;
use hmac::Mac;
use serde::Serialize;
use sha2::Sha256;

use super::claims::Claims;
use super::errors::TokenError;

type HmacSha256 = Hmac<Sha256>;

/// Fixed token header. The algorithm is not negotiable: verification
/// never reads the presented header, it only recomputes the signature
/// over it.
#[derive(Serialize)]
struct Header {
    alg: &'static str,
    typ: &'static str,
}

const HEADER: Header = Header {
    alg: "HS256",
    typ: "JWT",
};

/// Issues and verifies signed bearer tokens.
///
/// Wire format is the compact three-segment form
/// `base64url(header) "." base64url(claims) "." base64url(signature)`
/// with unpadded URL-safe base64 and an HMAC-SHA256 signature over the
/// first two segments. Both operations are pure functions of their
/// input plus the secret; no state is kept between calls.
pub struct TokenService {
    secret: Vec<u8>,
    lifetime: Duration,
}

impl TokenService {
    /// Create a new token service.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be at least
    ///   32 bytes and stored securely)
    /// * `lifetime_hours` - Hours from issuance until a token expires
    pub fn new(secret: &[u8], lifetime_hours: i64) -> Self {
        Self {
            secret: secret.to_vec(),
            lifetime: Duration::hours(lifetime_hours),
        }
    }

    /// Issue a signed token for a user.
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or MAC setup failed
    pub fn issue(&self, user_id: &str) -> Result<String, TokenError> {
        let header_json = serde_json::to_vec(&HEADER)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        let claims = Claims::new(user_id, (Utc::now() + self.lifetime).timestamp());
        let claims_json =
            serde_json::to_vec(&claims).map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        let message = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(header_json),
            URL_SAFE_NO_PAD.encode(claims_json)
        );
        let signature = self.sign(message.as_bytes())?;

        Ok(format!("{}.{}", message, URL_SAFE_NO_PAD.encode(signature)))
    }

    /// Verify a presented token and return its claims.
    ///
    /// Accepts the raw token with or without a leading `"Bearer "`
    /// prefix, so an `Authorization` header value can be passed as-is.
    ///
    /// The signature is checked before the claims segment is decoded:
    /// attacker-controlled bytes are never parsed as structured data
    /// until they are proven to come from the holder of the secret.
    ///
    /// # Errors
    /// * `Malformed` - Wrong segment count, empty segment, or a segment
    ///   that fails to decode/parse
    /// * `InvalidSignature` - Signature does not match
    /// * `Expired` - Claims expiry is at or before the current time
    pub fn verify(&self, presented: &str) -> Result<Claims, TokenError> {
        let token = presented.strip_prefix("Bearer ").unwrap_or(presented);

        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 || segments.iter().any(|s| s.is_empty()) {
            return Err(TokenError::Malformed(
                "expected three non-empty segments".to_string(),
            ));
        }

        let signature = URL_SAFE_NO_PAD
            .decode(segments[2])
            .map_err(|e| TokenError::Malformed(format!("signature segment: {}", e)))?;

        let message = format!("{}.{}", segments[0], segments[1]);
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;
        mac.update(message.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::InvalidSignature)?;

        let claims_json = URL_SAFE_NO_PAD
            .decode(segments[1])
            .map_err(|e| TokenError::Malformed(format!("claims segment: {}", e)))?;
        let claims: Claims = serde_json::from_slice(&claims_json)
            .map_err(|e| TokenError::Malformed(format!("claims body: {}", e)))?;

        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, TokenError> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;
        mac.update(message);
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

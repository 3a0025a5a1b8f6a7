use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::InvalidTokenReason;
use super::errors::TokenError;
use crate::identity::Identity;

/// Signs and verifies identity tokens.
///
/// Tokens are JWTs signed with HS256 (HMAC with SHA-256) under the secret the
/// service was built with. Nothing is stored server-side: a token stays valid
/// until its `exp`, and replacing the secret invalidates every outstanding
/// token at once.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    default_ttl: Duration,
}

impl TokenService {
    /// Create a new token service.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    /// * `default_ttl` - Lifetime applied by [`TokenService::issue`]
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Never log or echo the secret
    pub fn new(secret: &[u8], default_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            default_ttl,
        }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Issue a token for `identity` with the default TTL.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, identity: &Identity) -> Result<String, TokenError> {
        self.issue_with_ttl(identity, self.default_ttl)
    }

    /// Issue a token for `identity` expiring `ttl` after now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_with_ttl(&self, identity: &Identity, ttl: Duration) -> Result<String, TokenError> {
        self.issue_at(identity, ttl, Utc::now())
    }

    /// Issue a token as if the current time were `issued_at`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_at(
        &self,
        identity: &Identity,
        ttl: Duration,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(identity.clone(), issued_at, ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token against the current time.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature mismatch, malformed encoding, or the
    ///   current time is outside `iat <= now < exp`
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as if the current time were `now`.
    ///
    /// # Errors
    /// * `InvalidToken` - See [`TokenService::verify`]
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below with a half-open window and no leeway.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::InvalidToken(classify(e.kind())))?;

        let now = now.timestamp();
        if claims.is_expired(now) {
            return Err(TokenError::InvalidToken(InvalidTokenReason::Expired));
        }
        if now < claims.iat {
            return Err(TokenError::InvalidToken(InvalidTokenReason::NotYetValid));
        }

        Ok(claims)
    }
}

fn classify(kind: &ErrorKind) -> InvalidTokenReason {
    match kind {
        ErrorKind::InvalidSignature => InvalidTokenReason::BadSignature,
        ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
            InvalidTokenReason::WrongAlgorithm
        }
        ErrorKind::ExpiredSignature => InvalidTokenReason::Expired,
        ErrorKind::ImmatureSignature => InvalidTokenReason::NotYetValid,
        other => InvalidTokenReason::Malformed(format!("{other:?}")),
    }
}

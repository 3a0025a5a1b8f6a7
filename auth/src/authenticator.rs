use std::sync::Arc;

use chrono::Duration;

use crate::identity::Identity;
use crate::jwt::Claims;
use crate::jwt::TokenError;
use crate::jwt::TokenService;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Holds the only process-wide state of the core: the signing secret (inside
/// the token service) and the configured password hasher. Both are read-only
/// after construction, so one instance is shared by every request.
pub struct Authenticator {
    password_hasher: Arc<dyn PasswordHasher>,
    token_service: TokenService,
    decoy_digest: Option<String>,
}

const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// Signed bearer token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    /// * `token_ttl` - Lifetime of issued tokens
    /// * `password_hasher` - Digest scheme used for stored credentials
    pub fn new(
        jwt_secret: &[u8],
        token_ttl: Duration,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        let decoy_digest = password_hasher.hash(DECOY_PASSWORD).ok();

        Self {
            password_hasher,
            token_service: TokenService::new(jwt_secret, token_ttl),
            decoy_digest,
        }
    }

    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    pub fn verify_password(&self, password: &str, stored_digest: &str) -> bool {
        self.password_hasher.verify(password, stored_digest)
    }

    /// Run one verification against a fixed digest and discard the result.
    ///
    /// Login paths that reject before reaching a stored digest call this so
    /// they cost the same as a password mismatch.
    pub fn verify_decoy(&self, password: &str) {
        if let Some(digest) = &self.decoy_digest {
            let _ = self.password_hasher.verify(password, digest);
        }
    }

    /// Verify credentials and issue a token for `identity`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Token` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_digest: &str,
        identity: &Identity,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_digest) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_service.issue(identity)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Validate a bearer token and return its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Token signature, encoding or validity window is wrong
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_service.verify(token)
    }
}

use async_trait::async_trait;
use auth::Domain;
use auth::Identity;
use uuid::Uuid;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::ChangePasswordCommand;
use crate::domain::account::models::Credential;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::LoginOutcome;
use crate::domain::account::models::Username;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Verify a username/password pair within one domain and issue a token.
    ///
    /// # Arguments
    /// * `command` - Domain, validated username and plaintext password
    ///
    /// # Returns
    /// Signed token and the credential it was issued for
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username, wrong password or inactive account
    /// * `Token` - Token generation failed
    /// * `DatabaseError` - Credential lookup failed
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, AccountError>;

    /// Load the stored credential behind an authenticated identity.
    ///
    /// # Errors
    /// * `NotFound` - The account no longer exists
    /// * `DatabaseError` - Credential lookup failed
    async fn profile(&self, identity: &Identity) -> Result<Credential, AccountError>;

    /// Replace the password of an authenticated identity.
    ///
    /// # Arguments
    /// * `identity` - Principal resolved by the auth middleware
    /// * `command` - Current and new plaintext passwords
    ///
    /// # Returns
    /// Credential with the new digest
    ///
    /// # Errors
    /// * `NotFound` - The account no longer exists
    /// * `IncorrectPassword` - Current password does not verify
    /// * `Password` - Hashing the new password failed
    /// * `DatabaseError` - Credential update failed
    async fn change_password(
        &self,
        identity: &Identity,
        command: ChangePasswordCommand,
    ) -> Result<Credential, AccountError>;
}

/// Read access to stored credentials, plus the single write the core needs.
///
/// Each domain is an independent collection: a lookup in one domain never
/// returns a record from the other, even when usernames collide.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve a credential by username within a domain.
    ///
    /// # Returns
    /// Optional credential (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(
        &self,
        domain: Domain,
        username: &Username,
    ) -> Result<Option<Credential>, AccountError>;

    /// Retrieve a credential by owner id within a domain.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, domain: Domain, id: Uuid)
        -> Result<Option<Credential>, AccountError>;

    /// Store a new password digest for an existing credential.
    ///
    /// # Errors
    /// * `NotFound` - Credential does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_password_digest(
        &self,
        domain: Domain,
        id: Uuid,
        password_digest: &str,
    ) -> Result<(), AccountError>;
}

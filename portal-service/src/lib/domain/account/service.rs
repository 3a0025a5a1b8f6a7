use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Identity;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::ChangePasswordCommand;
use crate::domain::account::models::Credential;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::LoginOutcome;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::account::ports::CredentialStore;

/// Domain service implementation for account operations.
pub struct AccountService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    authenticator: Arc<Authenticator>,
}

impl<CS> AccountService<CS>
where
    CS: CredentialStore,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential lookup implementation
    /// * `authenticator` - Password verification and token issuance
    pub fn new(store: Arc<CS>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            store,
            authenticator,
        }
    }

    async fn stored_credential(&self, identity: &Identity) -> Result<Credential, AccountError> {
        self.store
            .find_by_id(identity.domain(), identity.id())
            .await?
            .ok_or_else(|| AccountError::NotFound(identity.id().to_string()))
    }
}

#[async_trait]
impl<CS> AccountServicePort for AccountService<CS>
where
    CS: CredentialStore,
{
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, AccountError> {
        let Some(credential) = self
            .store
            .find_by_username(command.domain, &command.username)
            .await?
        else {
            tracing::info!(domain = %command.domain, "Login rejected: unknown username");
            self.authenticator.verify_decoy(&command.password);
            return Err(AccountError::InvalidCredentials);
        };

        if credential.domain() != command.domain {
            tracing::error!(
                requested = %command.domain,
                returned = %credential.domain(),
                "Credential store returned a record from the wrong domain"
            );
            self.authenticator.verify_decoy(&command.password);
            return Err(AccountError::InvalidCredentials);
        }

        if !credential.status.can_login() {
            tracing::info!(
                domain = %command.domain,
                user_id = %credential.owner_id,
                status = %credential.status,
                "Login rejected: account not active"
            );
            self.authenticator.verify_decoy(&command.password);
            return Err(AccountError::InvalidCredentials);
        }

        let identity = credential.to_identity();
        let result = self
            .authenticator
            .authenticate(&command.password, &credential.password_digest, &identity)
            .map_err(|e| {
                if matches!(e, auth::AuthenticationError::InvalidCredentials) {
                    tracing::info!(
                        domain = %command.domain,
                        user_id = %credential.owner_id,
                        "Login rejected: password mismatch"
                    );
                }
                AccountError::from(e)
            })?;

        tracing::info!(
            domain = %command.domain,
            user_id = %credential.owner_id,
            "Login succeeded"
        );

        Ok(LoginOutcome {
            token: result.access_token,
            credential,
        })
    }

    async fn profile(&self, identity: &Identity) -> Result<Credential, AccountError> {
        self.stored_credential(identity).await
    }

    async fn change_password(
        &self,
        identity: &Identity,
        command: ChangePasswordCommand,
    ) -> Result<Credential, AccountError> {
        let mut credential = self.stored_credential(identity).await?;

        if !self
            .authenticator
            .verify_password(&command.old_password, &credential.password_digest)
        {
            return Err(AccountError::IncorrectPassword);
        }

        let password_digest = self.authenticator.hash_password(&command.new_password)?;
        self.store
            .update_password_digest(credential.domain(), credential.owner_id, &password_digest)
            .await?;

        tracing::info!(
            domain = %credential.domain(),
            user_id = %credential.owner_id,
            "Password changed"
        );

        credential.password_digest = password_digest;
        Ok(credential)
    }
}

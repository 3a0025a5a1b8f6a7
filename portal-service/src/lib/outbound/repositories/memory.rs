use std::collections::HashMap;

use async_trait::async_trait;
use auth::Domain;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::SeedCredential;
use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Credential;
use crate::domain::account::models::Role;
use crate::domain::account::models::Username;
use crate::domain::account::ports::CredentialStore;

/// Process-local credential store with one collection per domain.
///
/// Used for development (`credentials.backend = "memory"`) and tests.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    admins: RwLock<HashMap<Uuid, Credential>>,
    registrants: RwLock<HashMap<Uuid, Credential>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated from configuration.
    ///
    /// # Errors
    /// * `InvalidUsername` / `InvalidStatus` - A seed entry is malformed
    /// * `UsernameAlreadyExists` - Two seed entries share a username within a domain
    pub async fn from_seed(seed: &[SeedCredential]) -> Result<Self, AccountError> {
        let store = Self::new();

        for entry in seed {
            let role = match entry.domain {
                Domain::Admin => Role::Admin { level: entry.level },
                Domain::Registrant => Role::Registrant {
                    account_type: entry.account_type.clone(),
                },
            };

            store
                .insert(Credential {
                    owner_id: Uuid::new_v4(),
                    username: Username::new(entry.username.clone())?,
                    email: entry.email.clone(),
                    password_digest: entry.password_digest.clone(),
                    role,
                    status: entry.status.parse()?,
                })
                .await?;
        }

        Ok(store)
    }

    fn collection(&self, domain: Domain) -> &RwLock<HashMap<Uuid, Credential>> {
        match domain {
            Domain::Admin => &self.admins,
            Domain::Registrant => &self.registrants,
        }
    }

    /// Add a credential to the collection of its own domain.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is taken within that domain
    pub async fn insert(&self, credential: Credential) -> Result<(), AccountError> {
        let mut collection = self.collection(credential.domain()).write().await;

        if collection
            .values()
            .any(|existing| existing.username == credential.username)
        {
            return Err(AccountError::UsernameAlreadyExists(
                credential.username.as_str().to_string(),
            ));
        }

        collection.insert(credential.owner_id, credential);
        Ok(())
    }

    pub async fn remove(&self, domain: Domain, id: Uuid) -> Option<Credential> {
        self.collection(domain).write().await.remove(&id)
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_username(
        &self,
        domain: Domain,
        username: &Username,
    ) -> Result<Option<Credential>, AccountError> {
        Ok(self
            .collection(domain)
            .read()
            .await
            .values()
            .find(|credential| &credential.username == username)
            .cloned())
    }

    async fn find_by_id(
        &self,
        domain: Domain,
        id: Uuid,
    ) -> Result<Option<Credential>, AccountError> {
        Ok(self.collection(domain).read().await.get(&id).cloned())
    }

    async fn update_password_digest(
        &self,
        domain: Domain,
        id: Uuid,
        password_digest: &str,
    ) -> Result<(), AccountError> {
        let mut collection = self.collection(domain).write().await;
        let credential = collection
            .get_mut(&id)
            .ok_or_else(|| AccountError::NotFound(id.to_string()))?;

        credential.password_digest = password_digest.to_string();
        Ok(())
    }
}

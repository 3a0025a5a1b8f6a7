use async_trait::async_trait;
use auth::Domain;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Credential;
use crate::domain::account::models::Role;
use crate::domain::account::models::Username;
use crate::domain::account::ports::CredentialStore;

/// Credential store over the `admins` and `registrants` tables.
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AdminRow {
    id: Uuid,
    username: String,
    email: String,
    password_digest: String,
    level: i32,
    status: String,
}

impl TryFrom<AdminRow> for Credential {
    type Error = AccountError;

    fn try_from(r: AdminRow) -> Result<Self, Self::Error> {
        Ok(Credential {
            owner_id: r.id,
            username: Username::new(r.username)?,
            email: r.email,
            password_digest: r.password_digest,
            role: Role::Admin { level: r.level },
            status: r.status.parse()?,
        })
    }
}

#[derive(Debug, FromRow)]
struct RegistrantRow {
    id: Uuid,
    username: String,
    email: String,
    password_digest: String,
    account_type: String,
    status: String,
}

impl TryFrom<RegistrantRow> for Credential {
    type Error = AccountError;

    fn try_from(r: RegistrantRow) -> Result<Self, Self::Error> {
        Ok(Credential {
            owner_id: r.id,
            username: Username::new(r.username)?,
            email: r.email,
            password_digest: r.password_digest,
            role: Role::Registrant {
                account_type: r.account_type,
            },
            status: r.status.parse()?,
        })
    }
}

fn database_error(e: sqlx::Error) -> AccountError {
    AccountError::DatabaseError(e.to_string())
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn find_by_username(
        &self,
        domain: Domain,
        username: &Username,
    ) -> Result<Option<Credential>, AccountError> {
        match domain {
            Domain::Admin => sqlx::query_as::<_, AdminRow>(
                r#"
                SELECT id, username, email, password_digest, level, status
                FROM admins
                WHERE username = $1
                "#,
            )
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .map(Credential::try_from)
            .transpose(),

            Domain::Registrant => sqlx::query_as::<_, RegistrantRow>(
                r#"
                SELECT id, username, email, password_digest, account_type, status
                FROM registrants
                WHERE username = $1
                "#,
            )
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .map(Credential::try_from)
            .transpose(),
        }
    }

    async fn find_by_id(
        &self,
        domain: Domain,
        id: Uuid,
    ) -> Result<Option<Credential>, AccountError> {
        match domain {
            Domain::Admin => sqlx::query_as::<_, AdminRow>(
                r#"
                SELECT id, username, email, password_digest, level, status
                FROM admins
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .map(Credential::try_from)
            .transpose(),

            Domain::Registrant => sqlx::query_as::<_, RegistrantRow>(
                r#"
                SELECT id, username, email, password_digest, account_type, status
                FROM registrants
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .map(Credential::try_from)
            .transpose(),
        }
    }

    async fn update_password_digest(
        &self,
        domain: Domain,
        id: Uuid,
        password_digest: &str,
    ) -> Result<(), AccountError> {
        let query = match domain {
            Domain::Admin => "UPDATE admins SET password_digest = $2 WHERE id = $1",
            Domain::Registrant => "UPDATE registrants SET password_digest = $2 WHERE id = $1",
        };

        let result = sqlx::query(query)
            .bind(id)
            .bind(password_digest)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(AccountError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

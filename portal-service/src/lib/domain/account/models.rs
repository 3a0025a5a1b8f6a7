use std::fmt;
use std::str::FromStr;

use auth::AdminIdentity;
use auth::Domain;
use auth::Identity;
use auth::RegistrantIdentity;
use uuid::Uuid;

use crate::domain::account::errors::AccountStatusError;
use crate::domain::account::errors::UsernameError;

/// Stored login credential of one principal.
///
/// The role decides which domain the credential lives in; usernames are
/// unique only within that domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub owner_id: Uuid,
    pub username: Username,
    pub email: String,
    pub password_digest: String,
    pub role: Role,
    pub status: AccountStatus,
}

impl Credential {
    pub fn domain(&self) -> Domain {
        self.role.domain()
    }

    /// Build the identity that gets embedded in an issued token.
    pub fn to_identity(&self) -> Identity {
        match &self.role {
            Role::Admin { level } => Identity::Admin(AdminIdentity {
                id: self.owner_id,
                username: self.username.as_str().to_string(),
                email: self.email.clone(),
                level: *level,
            }),
            Role::Registrant { account_type } => Identity::Registrant(RegistrantIdentity {
                id: self.owner_id,
                username: self.username.as_str().to_string(),
                email: self.email.clone(),
                account_type: account_type.clone(),
            }),
        }
    }
}

/// Domain-specific part of a credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin { level: i32 },
    Registrant { account_type: String },
}

impl Role {
    pub fn domain(&self) -> Domain {
        match self {
            Role::Admin { .. } => Domain::Admin,
            Role::Registrant { .. } => Domain::Registrant,
        }
    }
}

/// Lifecycle state of an account. Only active accounts may log in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    /// Registered but not yet activated with its activation code.
    Pending,
    Disabled,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Pending => "pending",
            AccountStatus::Disabled => "disabled",
        }
    }

    pub fn can_login(&self) -> bool {
        matches!(self, AccountStatus::Active)
    }
}

impl FromStr for AccountStatus {
    type Err = AccountStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(AccountStatus::Active),
            "pending" => Ok(AccountStatus::Pending),
            "disabled" => Ok(AccountStatus::Disabled),
            other => Err(AccountStatusError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Username as stored for one domain.
///
/// Only blank values are refused; any other string is a valid lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// # Errors
    /// * `Blank` - Username is empty or whitespace only
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.trim().is_empty() {
            return Err(UsernameError::Blank);
        }
        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to log in to one domain
#[derive(Debug)]
pub struct LoginCommand {
    pub domain: Domain,
    pub username: Username,
    pub password: String,
}

impl LoginCommand {
    pub fn new(domain: Domain, username: Username, password: String) -> Self {
        Self {
            domain,
            username,
            password,
        }
    }
}

/// Successful login: the signed token plus the credential it was issued for.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub credential: Credential,
}

/// Command to replace the current principal's password
#[derive(Debug)]
pub struct ChangePasswordCommand {
    pub old_password: String,
    pub new_password: String,
}

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// The two disjoint principal spaces a token can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Administrative staff.
    Admin,
    /// Self-registered registrant accounts.
    Registrant,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Admin => "admin",
            Domain::Registrant => "registrant",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Administrative staff principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub level: i32,
}

/// Registrant account principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrantIdentity {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub account_type: String,
}

/// Principal resolved from a verified token.
///
/// Serialized with an explicit `domain` tag so that the domain is part of the
/// signed claims and never inferred from which fields happen to be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "domain", rename_all = "lowercase")]
pub enum Identity {
    Admin(AdminIdentity),
    Registrant(RegistrantIdentity),
}

impl Identity {
    pub fn domain(&self) -> Domain {
        match self {
            Identity::Admin(_) => Domain::Admin,
            Identity::Registrant(_) => Domain::Registrant,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Identity::Admin(admin) => admin.id,
            Identity::Registrant(registrant) => registrant.id,
        }
    }

    pub fn username(&self) -> &str {
        match self {
            Identity::Admin(admin) => &admin.username,
            Identity::Registrant(registrant) => &registrant.username,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Identity::Admin(_))
    }
}

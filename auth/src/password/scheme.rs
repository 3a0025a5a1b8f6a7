use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use super::Argon2Hasher;
use super::LegacySha256Hasher;
use super::PasswordHasher;

/// Configurable selection of the password hashing algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordScheme {
    /// Unsalted SHA-256, compatible with previously stored digests.
    #[default]
    Legacy,
    /// Salted Argon2id.
    Argon2,
}

impl PasswordScheme {
    pub fn hasher(&self) -> Arc<dyn PasswordHasher> {
        match self {
            PasswordScheme::Legacy => Arc::new(LegacySha256Hasher::new()),
            PasswordScheme::Argon2 => Arc::new(Argon2Hasher::new()),
        }
    }
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordScheme::Legacy => f.write_str("legacy"),
            PasswordScheme::Argon2 => f.write_str("argon2"),
        }
    }
}

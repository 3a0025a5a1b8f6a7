use sha2::Digest;
use sha2::Sha256;

use super::errors::PasswordError;
use super::PasswordHasher;

/// Unsalted SHA-256 digests, hex encoded.
///
/// Kept only so that digests already stored by earlier deployments keep
/// verifying. New deployments should configure [`super::Argon2Hasher`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LegacySha256Hasher;

impl LegacySha256Hasher {
    pub fn new() -> Self {
        Self
    }

    fn digest(password: &str) -> String {
        hex::encode(Sha256::digest(password.as_bytes()))
    }
}

impl PasswordHasher for LegacySha256Hasher {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        Ok(Self::digest(password))
    }

    fn verify(&self, password: &str, digest: &str) -> bool {
        let expected = Self::digest(password);
        let stored = digest.trim().to_ascii_lowercase();

        constant_time_eq(expected.as_bytes(), stored.as_bytes())
    }
}

// Length is not secret: every well-formed digest is 64 hex characters.
fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    if left.len() != right.len() {
        return false;
    }

    left.iter()
        .zip(right.iter())
        .fold(0u8, |acc, (l, r)| acc | (l ^ r))
        == 0
}

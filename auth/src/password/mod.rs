pub mod argon2;
pub mod errors;
pub mod legacy;
pub mod scheme;

pub use argon2::Argon2Hasher;
pub use errors::PasswordError;
pub use legacy::LegacySha256Hasher;
pub use scheme::PasswordScheme;

/// One-way credential digesting and verification.
///
/// `verify` is a pure function of `(plaintext, digest)`: it returns `false`
/// for any mismatch, including digests the implementation cannot parse.
pub trait PasswordHasher: Send + Sync {
    /// Digest a plaintext password for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - The underlying algorithm rejected the input
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Check a plaintext password against a stored digest.
    fn verify(&self, password: &str, digest: &str) -> bool;
}

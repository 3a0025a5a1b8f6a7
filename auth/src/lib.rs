//! Authentication core library
//!
//! Provides the security-critical pieces shared by the portal services:
//! - Identities for the two disjoint principal domains (admin, registrant)
//! - Password digesting behind a swappable [`PasswordHasher`] trait
//! - Signed, time-limited bearer tokens
//! - Cryptographically secure activation/document codes
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{LegacySha256Hasher, PasswordHasher};
//!
//! let hasher = LegacySha256Hasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{AdminIdentity, Identity, TokenService};
//! use chrono::Duration;
//!
//! let service = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::days(7));
//! let identity = Identity::Admin(AdminIdentity {
//!     id: uuid::Uuid::new_v4(),
//!     username: "admin1".to_string(),
//!     email: "admin1@example.com".to_string(),
//!     level: 1,
//! });
//! let token = service.issue(&identity).unwrap();
//! let claims = service.verify(&token).unwrap();
//! assert_eq!(claims.identity, identity);
//! ```

pub mod authenticator;
pub mod codes;
pub mod identity;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use codes::CodeGenerator;
pub use identity::AdminIdentity;
pub use identity::Domain;
pub use identity::Identity;
pub use identity::RegistrantIdentity;
pub use jwt::parse_ttl;
pub use jwt::Claims;
pub use jwt::InvalidTokenReason;
pub use jwt::TokenError;
pub use jwt::TokenService;
pub use password::Argon2Hasher;
pub use password::LegacySha256Hasher;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordScheme;

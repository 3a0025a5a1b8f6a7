pub mod claims;
pub mod errors;
pub mod service;
pub mod ttl;

pub use claims::Claims;
pub use errors::InvalidTokenReason;
pub use errors::TokenError;
pub use errors::TtlError;
pub use service::TokenService;
pub use ttl::parse_ttl;
pub use ttl::DEFAULT_TTL;

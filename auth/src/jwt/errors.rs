use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Invalid token: {0}")]
    InvalidToken(InvalidTokenReason),
}

/// Why a presented token was rejected.
///
/// Callers must treat every reason the same way; the distinction exists for
/// server-side logging only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTokenReason {
    #[error("malformed token: {0}")]
    Malformed(String),

    #[error("signature mismatch")]
    BadSignature,

    #[error("unexpected signing algorithm")]
    WrongAlgorithm,

    #[error("token is expired")]
    Expired,

    #[error("token issued in the future")]
    NotYetValid,
}

/// Error for TTL strings such as `"7d"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TtlError {
    #[error("TTL is empty")]
    Empty,

    #[error("Invalid TTL amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown TTL unit '{0}' (expected s, m, h, d or w)")]
    UnknownUnit(String),

    #[error("TTL is out of range: {0}")]
    OutOfRange(String),
}

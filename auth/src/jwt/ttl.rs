use chrono::Duration;

use super::errors::TtlError;

/// Token lifetime used when configuration does not override it.
pub const DEFAULT_TTL: &str = "7d";

/// Parse a TTL string such as `"7d"`, `"12h"`, `"30m"` or `"45s"`.
///
/// A bare number is read as seconds. Units: `s`, `m`, `h`, `d`, `w`.
///
/// # Errors
/// * `Empty` - Input is blank
/// * `InvalidAmount` - Numeric part is missing or not a non-negative integer
/// * `UnknownUnit` - Unit suffix is not recognized
/// * `OutOfRange` - Amount overflows a duration
pub fn parse_ttl(input: &str) -> Result<Duration, TtlError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(TtlError::Empty);
    }

    let split = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    let (amount, unit) = input.split_at(split);

    let amount: i64 = amount
        .parse()
        .map_err(|_| TtlError::InvalidAmount(input.to_string()))?;

    let seconds_per_unit: i64 = match unit.trim() {
        "" | "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        "w" => 7 * 24 * 60 * 60,
        other => return Err(TtlError::UnknownUnit(other.to_string())),
    };

    amount
        .checked_mul(seconds_per_unit)
        .and_then(Duration::try_seconds)
        .ok_or_else(|| TtlError::OutOfRange(input.to_string()))
}

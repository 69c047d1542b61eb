//! Raw string parsing helpers.
//!
//! Front-ends hand over entry-box text verbatim, so money and percentage
//! values may carry `$`, `%`, or thousands separators.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Parse a raw field value as a decimal number.
///
/// Strips a leading `$`, a trailing `%`, and any `,` separators before
/// parsing. Returns `None` when the remainder is not a number.
pub(crate) fn decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let cleaned = trimmed.replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<Decimal>().ok()
}

/// Parse a raw field value as a non-negative whole number.
pub(crate) fn integer(raw: &str) -> Option<u64> {
    let value = decimal(raw)?;
    if value.is_sign_negative() || !value.fract().is_zero() {
        return None;
    }
    value.to_u64()
}

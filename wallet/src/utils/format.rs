//! # Amount Formatting
//!
//! Conversions between user-entered decimal text and base-asset smallest units.
//! For address formatting, use [`shared::utils::format_address`] or [`shared::utils::truncate_address`].
//!
//! ## Functions
//!
//! - [`parse_amount`] - Decimal text to smallest units (exact, no floats)
//! - [`format_units`] - Smallest units to decimal text for display

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Parse user-entered decimal text into the asset's smallest unit.
///
/// Accepts ASCII digits with at most one `.`; surrounding whitespace is ignored.
/// Returns `None` for empty text, signs, exponents, digit separators, more
/// fractional digits than `decimals`, and values that overflow `u64`.
///
/// # Examples
///
/// ```rust
/// use passkey_wallet::utils::format::parse_amount;
///
/// assert_eq!(parse_amount("3", 9), Some(3_000_000_000));
/// assert_eq!(parse_amount("0.5", 9), Some(500_000_000));
/// assert_eq!(parse_amount("-1", 9), None);
/// assert_eq!(parse_amount("", 9), None);
/// ```
pub fn parse_amount(text: &str, decimals: u32) -> Option<u64> {
    let text = text.trim();

    if !text.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    if !text.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    if text.matches('.').count() > 1 {
        return None;
    }

    let value = Decimal::from_str(text).ok()?.normalize();
    if value.scale() > decimals {
        return None;
    }

    let unit = Decimal::from(10u64.checked_pow(decimals)?);
    value.checked_mul(unit)?.to_u64()
}

/// Format smallest units as decimal text, trimming trailing zeros.
///
/// # Examples
///
/// ```rust
/// use passkey_wallet::utils::format::format_units;
///
/// assert_eq!(format_units(1_500_000_000, 9), "1.5");
/// assert_eq!(format_units(0, 9), "0");
/// ```
pub fn format_units(amount: u64, decimals: u32) -> String {
    Decimal::from_i128_with_scale(amount as i128, decimals)
        .normalize()
        .to_string()
}

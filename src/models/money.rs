//! Monetary rounding and percentage helpers.
//!
//! All storable/displayable amounts in the engine carry exactly two
//! fractional digits. Intermediate multiplications and divisions are kept
//! at full `Decimal` precision and rounded only when the result is assigned
//! to a field, which these helpers make explicit at each call site.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits carried by storable monetary amounts.
pub const AMOUNT_SCALE: u32 = 2;

/// Rounds an amount to two fractional digits, half away from zero.
///
/// # Example
///
/// ```
/// use distribution_engine::models::round_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let third = Decimal::from_str("33.333333").unwrap();
/// assert_eq!(round_amount(third), Decimal::from_str("33.33").unwrap());
/// ```
pub fn round_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Applies a percentage to a total, rounding the result to two digits.
///
/// The multiplication and division happen at full precision; only the
/// final value is rounded.
pub fn percent_of(total: Decimal, percent: Decimal) -> Decimal {
    round_amount(total * percent / Decimal::ONE_HUNDRED)
}

/// Derives the percentage a part represents of a total, rounded to two
/// digits. Returns zero when the total is not strictly positive.
pub fn percent_share(part: Decimal, total: Decimal) -> Decimal {
    if total <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_amount(part / total * Decimal::ONE_HUNDRED)
}

//! Currency rounding helpers.
//!
//! All monetary amounts in the crate are `rust_decimal::Decimal` values
//! rounded to two decimal places with half-away-from-zero semantics; ratios
//! (FOIR) are rounded to four places. Keeping the rounding in one place
//! guarantees every intermediate amortization figure is rounded the same way.

use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary amount with 2-decimal cent semantics.
pub type Money = Decimal;

const MONEY_SCALE: u32 = 2;
const RATIO_SCALE: u32 = 4;

/// Round a monetary value to cents, half away from zero.
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a ratio (e.g. FOIR) to four decimal places, half away from zero.
pub fn round_ratio(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATIO_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

//! Cent rounding.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round to two decimal places.
///
/// The exact binary value of `value` is rounded, with ties going away from
/// zero, so `1.005` (stored as 1.00499999999999989…) becomes `1.0`, while a
/// genuine tie such as `0.125` becomes `0.13`. Non-finite values are
/// returned unchanged.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    match Decimal::from_f64_retain(value) {
        Some(exact) => exact
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .to_f64()
            .unwrap_or(value),
        // Outside Decimal's range: either already integral or far below a cent.
        None => value.round(),
    }
}

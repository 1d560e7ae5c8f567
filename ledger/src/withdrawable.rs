//! Mocked yield and withdrawable amount.

use baselingo_types::DepositRecord;

use crate::rounding::round2;

/// Fixed demonstration yield applied to every deposit.
pub const YIELD_RATE: f64 = 0.03;

/// The yield on `principal`, rounded to cents.
pub fn yield_for(principal: f64) -> f64 {
    round2(principal * YIELD_RATE)
}

/// Principal plus yield, rounded to cents. `None` yields exactly zero.
///
/// The yield is rounded on its own before being added, and the sum is then
/// rounded again. This is not always equal to `round2(principal * 1.03)`.
/// Pure: the record is never read back from or written to storage here.
pub fn compute_withdrawable(deposit: Option<&DepositRecord>) -> f64 {
    let Some(deposit) = deposit else {
        return 0.0;
    };
    let principal = deposit.amount;
    round2(principal + yield_for(principal))
}

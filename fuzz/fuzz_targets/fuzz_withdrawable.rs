#![no_main]

use baselingo_ledger::{compute_withdrawable, round2, DepositRecord};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|amount: f64| {
    let record = DepositRecord::new(amount, "2025-01-01T00:00:00.000Z");
    let withdrawable = compute_withdrawable(Some(&record));

    if amount.is_finite() && amount >= 0.0 {
        assert!(withdrawable >= 0.0);
        assert_eq!(round2(withdrawable), withdrawable);
    }
});

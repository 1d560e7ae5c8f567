#![no_main]

use baselingo_ledger::{DepositLedger, DEPOSIT_KEY};
use baselingo_nullables::NullKeyValueStore;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Whatever sits in the slot, load must neither panic nor error.
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    let ledger = DepositLedger::new(NullKeyValueStore::new().with_entry(DEPOSIT_KEY, raw));
    let loaded = ledger.load().expect("in-memory store never fails");

    // Anything that loads must load again after being saved back.
    if let Some(record) = loaded {
        if record.amount.is_finite() {
            ledger.save(Some(&record)).expect("save");
            let reloaded = ledger.load().expect("reload").expect("record present");
            assert_eq!(reloaded.deposited_at, record.deposited_at);
        }
    }
});

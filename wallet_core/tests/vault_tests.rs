//! Deposit/withdraw flows wired to nullable storage, signer, haptics and clock.

use baselingo_ledger::{DepositRecord, LedgerError, DEPOSIT_KEY};
use baselingo_miniapp::Notification;
use baselingo_nullables::{NullClock, NullHaptics, NullKeyValueStore, NullSigner};
use baselingo_store::StoreError;
use baselingo_wallet_core::{Vault, WalletError};

const MARCH_1_NOON: i64 = 1_740_830_400;

struct Harness {
    store: NullKeyValueStore,
    signer: NullSigner,
    haptics: NullHaptics,
    clock: NullClock,
}

impl Harness {
    fn new() -> Self {
        Self {
            store: NullKeyValueStore::new(),
            signer: NullSigner::approving(),
            haptics: NullHaptics::new(),
            clock: NullClock::new(MARCH_1_NOON),
        }
    }

    fn vault(&self) -> Vault<&NullKeyValueStore, &NullSigner, &NullHaptics, &NullClock> {
        Vault::new(&self.store, &self.signer, &self.haptics, &self.clock)
    }
}

#[tokio::test]
async fn deposit_signs_then_records() {
    let h = Harness::new();
    let vault = h.vault();

    let deposit = vault.deposit(10.0).await.unwrap();

    assert_eq!(h.signer.messages(), vec!["I deposit 10 euros"]);
    assert_eq!(
        deposit.record,
        DepositRecord::new(10.0, "2025-03-01T12:00:00.000Z")
    );
    assert_eq!(vault.current().unwrap(), Some(deposit.record));
    assert_eq!(vault.withdrawable().unwrap(), 10.3);
    assert_eq!(h.haptics.notifications(), vec![Notification::Success]);
}

#[tokio::test]
async fn rejected_deposit_signature_writes_nothing() {
    let h = Harness::new();
    h.signer.reject_with(Some("user declined"));
    let vault = h.vault();

    let err = vault.deposit(10.0).await.unwrap_err();

    assert!(matches!(err, WalletError::Signing(_)));
    assert_eq!(h.store.raw(DEPOSIT_KEY), None);
    assert_eq!(vault.current().unwrap(), None);
    assert_eq!(h.haptics.notifications(), vec![Notification::Error]);
}

#[tokio::test]
async fn deposit_below_minimum_is_refused_before_signing() {
    let h = Harness::new();
    let vault = h.vault();

    for amount in [0.0, 0.5, -3.0, f64::NAN, f64::INFINITY] {
        let err = vault.deposit(amount).await.unwrap_err();
        assert!(matches!(err, WalletError::InvalidAmount { .. }), "{amount}");
    }
    assert!(h.signer.messages().is_empty());
    assert!(h.haptics.events().is_empty());
}

#[tokio::test]
async fn custom_minimum_is_honoured() {
    let h = Harness::new();
    let vault = h.vault().with_min_deposit(0.0);
    let deposit = vault.deposit(0.0).await.unwrap();
    assert_eq!(deposit.record.amount, 0.0);
}

#[tokio::test]
async fn second_deposit_is_refused_while_one_is_active() {
    let h = Harness::new();
    let vault = h.vault();
    vault.deposit(10.0).await.unwrap();

    let err = vault.deposit(20.0).await.unwrap_err();

    assert!(matches!(err, WalletError::AlreadyDeposited { amount } if amount == 10.0));
    assert_eq!(h.signer.messages().len(), 1);
    assert_eq!(vault.current().unwrap().unwrap().amount, 10.0);
}

#[tokio::test]
async fn withdraw_signs_payout_and_clears_slot() {
    let h = Harness::new();
    let vault = h.vault();
    vault.deposit(100.0).await.unwrap();

    let withdrawal = vault.withdraw().await.unwrap().expect("active deposit");

    assert_eq!(withdrawal.principal, 100.0);
    assert_eq!(withdrawal.yield_amount, 3.0);
    assert_eq!(withdrawal.withdrawable, 103.0);
    assert_eq!(withdrawal.deposited_at, "2025-03-01T12:00:00.000Z");
    assert_eq!(
        h.signer.messages(),
        vec!["I deposit 100 euros", "Withdrawing 103 euros"]
    );
    assert_eq!(vault.current().unwrap(), None);
    assert_eq!(vault.withdrawable().unwrap(), 0.0);
    assert_eq!(
        h.haptics.notifications(),
        vec![Notification::Success, Notification::Success]
    );
}

#[tokio::test]
async fn withdraw_without_deposit_is_a_no_op() {
    let h = Harness::new();
    let vault = h.vault();

    assert_eq!(vault.withdraw().await.unwrap(), None);
    assert!(h.signer.messages().is_empty());
    assert!(h.haptics.events().is_empty());
}

#[tokio::test]
async fn rejected_withdraw_signature_keeps_deposit() {
    let h = Harness::new();
    let vault = h.vault();
    vault.deposit(33.33).await.unwrap();
    h.signer.reject_with(Some("wallet locked"));

    let err = vault.withdraw().await.unwrap_err();

    assert!(matches!(err, WalletError::Signing(_)));
    assert_eq!(h.signer.messages()[1], "Withdrawing 34.33 euros");
    assert_eq!(vault.current().unwrap().unwrap().amount, 33.33);
    assert_eq!(
        h.haptics.notifications(),
        vec![Notification::Success, Notification::Error]
    );
}

#[tokio::test]
async fn unavailable_storage_fails_before_signing() {
    let h = Harness::new();
    let vault = h.vault();
    h.store.set_unavailable(true);

    let err = vault.deposit(10.0).await.unwrap_err();
    assert!(matches!(
        err,
        WalletError::Ledger(LedgerError::Storage(StoreError::Unavailable(_)))
    ));
    assert!(h.signer.messages().is_empty());
    assert_eq!(h.haptics.notifications(), vec![Notification::Error]);

    h.store.set_unavailable(false);
    assert_eq!(vault.current().unwrap(), None);
}

#[tokio::test]
async fn withdraw_with_unreadable_storage_fires_error_haptic() {
    let h = Harness::new();
    let vault = h.vault();
    vault.deposit(10.0).await.unwrap();
    h.store.set_unavailable(true);

    let err = vault.withdraw().await.unwrap_err();

    assert!(matches!(
        err,
        WalletError::Ledger(LedgerError::Storage(StoreError::Unavailable(_)))
    ));
    assert_eq!(h.signer.messages().len(), 1);
    assert_eq!(
        h.haptics.notifications(),
        vec![Notification::Success, Notification::Error]
    );
}

#[tokio::test]
async fn deposit_write_failure_after_signing_leaves_slot_empty() {
    let h = Harness::new();
    let vault = h.vault();
    h.store.fail_writes_with(Some(StoreError::QuotaExceeded));

    let err = vault.deposit(10.0).await.unwrap_err();

    assert!(matches!(
        err,
        WalletError::Ledger(LedgerError::Storage(StoreError::QuotaExceeded))
    ));
    assert_eq!(h.signer.messages(), vec!["I deposit 10 euros"]);
    assert_eq!(h.store.raw(DEPOSIT_KEY), None);
    assert_eq!(vault.current().unwrap(), None);
    assert_eq!(h.haptics.notifications(), vec![Notification::Error]);
}

#[tokio::test]
async fn withdraw_write_failure_after_signing_keeps_deposit() {
    let h = Harness::new();
    let vault = h.vault();
    let deposit = vault.deposit(10.0).await.unwrap();
    h.store.fail_writes_with(Some(StoreError::QuotaExceeded));

    let err = vault.withdraw().await.unwrap_err();

    assert!(matches!(
        err,
        WalletError::Ledger(LedgerError::Storage(StoreError::QuotaExceeded))
    ));
    assert_eq!(
        h.signer.messages(),
        vec!["I deposit 10 euros", "Withdrawing 10.3 euros"]
    );
    assert_eq!(vault.current().unwrap(), Some(deposit.record));
    assert_eq!(
        h.haptics.notifications(),
        vec![Notification::Success, Notification::Error]
    );

    h.store.fail_writes_with(None);
    assert!(vault.withdraw().await.unwrap().is_some());
    assert_eq!(vault.current().unwrap(), None);
}

#[tokio::test]
async fn corrupt_slot_is_treated_as_no_deposit() {
    let h = Harness {
        store: NullKeyValueStore::new().with_entry(DEPOSIT_KEY, "not-json"),
        ..Harness::new()
    };
    let vault = h.vault();

    assert_eq!(vault.withdraw().await.unwrap(), None);
    let deposit = vault.deposit(5.0).await.unwrap();
    assert_eq!(vault.current().unwrap(), Some(deposit.record));
}

#[tokio::test]
async fn deposit_timestamp_follows_the_clock() {
    let h = Harness::new();
    let vault = h.vault();
    vault.deposit(10.0).await.unwrap();
    vault.withdraw().await.unwrap();

    h.clock.advance(86_400);
    let deposit = vault.deposit(10.0).await.unwrap();
    assert_eq!(deposit.record.deposited_at, "2025-03-02T12:00:00.000Z");
}

//! Deposit and withdraw flows.
//!
//! Both flows ask the signer first and only write the ledger once a
//! signature has been obtained. A storage or signing failure leaves the
//! stored deposit as it was, fires an error haptic, and is returned to the
//! caller. Rejected input is returned without any haptic.

use baselingo_ledger::{compute_withdrawable, yield_for, DepositLedger, DepositRecord};
use baselingo_miniapp::{Haptics, Notification};
use baselingo_store::KeyValueStore;
use baselingo_types::Signature;

use crate::{Clock, MessageSigner, WalletError};

/// Smallest amount the deposit form accepts.
pub const DEFAULT_MIN_DEPOSIT: f64 = 1.0;

/// The message the user signs to deposit `amount` euros.
pub fn deposit_message(amount: f64) -> String {
    format!("I deposit {amount} euros")
}

/// The message the user signs to withdraw `withdrawable` euros.
pub fn withdraw_message(withdrawable: f64) -> String {
    format!("Withdrawing {withdrawable} euros")
}

/// A committed deposit and the signature that authorised it.
#[derive(Clone, Debug, PartialEq)]
pub struct Deposit {
    pub record: DepositRecord,
    pub signature: Signature,
}

/// A completed (mock) withdrawal.
#[derive(Clone, Debug, PartialEq)]
pub struct Withdrawal {
    pub principal: f64,
    pub yield_amount: f64,
    pub withdrawable: f64,
    pub deposited_at: String,
    pub signature: Signature,
}

pub struct Vault<S, M, H, C> {
    ledger: DepositLedger<S>,
    signer: M,
    haptics: H,
    clock: C,
    min_deposit: f64,
}

impl<S, M, H, C> Vault<S, M, H, C>
where
    S: KeyValueStore,
    M: MessageSigner,
    H: Haptics,
    C: Clock,
{
    pub fn new(store: S, signer: M, haptics: H, clock: C) -> Self {
        Self {
            ledger: DepositLedger::new(store),
            signer,
            haptics,
            clock,
            min_deposit: DEFAULT_MIN_DEPOSIT,
        }
    }

    pub fn with_min_deposit(mut self, min_deposit: f64) -> Self {
        self.min_deposit = min_deposit;
        self
    }

    pub fn ledger(&self) -> &DepositLedger<S> {
        &self.ledger
    }

    /// The active deposit, if any.
    pub fn current(&self) -> Result<Option<DepositRecord>, WalletError> {
        Ok(self.ledger.load()?)
    }

    /// What a withdrawal would pay out right now; zero without a deposit.
    pub fn withdrawable(&self) -> Result<f64, WalletError> {
        let current = self.ledger.load()?;
        Ok(compute_withdrawable(current.as_ref()))
    }

    /// Sign and record a deposit of `amount` euros.
    pub async fn deposit(&self, amount: f64) -> Result<Deposit, WalletError> {
        let current = match self.current() {
            Ok(current) => current,
            Err(e) => return Err(self.fail("deposit", e)),
        };
        if let Some(existing) = current {
            return Err(WalletError::AlreadyDeposited {
                amount: existing.amount,
            });
        }
        if !amount.is_finite() || amount < self.min_deposit {
            return Err(WalletError::InvalidAmount {
                amount,
                min: self.min_deposit,
            });
        }

        let message = deposit_message(amount);
        let signature = match self.signer.sign_message(&message).await {
            Ok(signature) => signature,
            Err(e) => return Err(self.fail("deposit", e)),
        };
        tracing::info!(%signature, amount, "signed deposit");

        let record = DepositRecord::new(amount, self.clock.now_iso());
        if let Err(e) = self.ledger.save(Some(&record)) {
            return Err(self.fail("deposit", e.into()));
        }
        self.haptics.notification_occurred(Notification::Success);

        Ok(Deposit { record, signature })
    }

    /// Sign and clear the active deposit.
    ///
    /// Returns `Ok(None)` without signing anything when there is no deposit.
    pub async fn withdraw(&self) -> Result<Option<Withdrawal>, WalletError> {
        let current = match self.current() {
            Ok(current) => current,
            Err(e) => return Err(self.fail("withdraw", e)),
        };
        let Some(current) = current else {
            tracing::debug!("withdraw requested with no active deposit");
            return Ok(None);
        };

        let yield_amount = yield_for(current.amount);
        let withdrawable = compute_withdrawable(Some(&current));
        let message = withdraw_message(withdrawable);
        let signature = match self.signer.sign_message(&message).await {
            Ok(signature) => signature,
            Err(e) => return Err(self.fail("withdraw", e)),
        };
        tracing::info!(%signature, withdrawable, "signed withdraw");

        if let Err(e) = self.ledger.save(None) {
            return Err(self.fail("withdraw", e.into()));
        }
        self.haptics.notification_occurred(Notification::Success);

        Ok(Some(Withdrawal {
            principal: current.amount,
            yield_amount,
            withdrawable,
            deposited_at: current.deposited_at,
            signature,
        }))
    }

    fn fail(&self, action: &'static str, error: WalletError) -> WalletError {
        tracing::error!(action, %error, "vault action failed");
        self.haptics.notification_occurred(Notification::Error);
        error
    }
}

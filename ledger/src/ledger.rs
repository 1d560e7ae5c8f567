//! The single-slot deposit ledger over a key-value store.

use baselingo_store::KeyValueStore;
use baselingo_types::DepositRecord;

use crate::LedgerError;

/// Storage key of the deposit slot.
pub const DEPOSIT_KEY: &str = "lingua-vault:deposit";

/// Mediates between [`DepositRecord`] and its serialized form in the store.
///
/// The store owns the slot; the ledger only encodes and decodes. Storage
/// faults propagate to the caller, while unreadable stored data is treated
/// as "no deposit".
pub struct DepositLedger<S> {
    store: S,
}

impl<S: KeyValueStore> DepositLedger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Overwrite the slot with `record`, or clear it when `None`.
    ///
    /// The amount is stored as given; no sign or range checks are done.
    pub fn save(&self, record: Option<&DepositRecord>) -> Result<(), LedgerError> {
        match record {
            Some(record) => {
                let json = serde_json::to_string(record)
                    .map_err(|e| LedgerError::Encode(e.to_string()))?;
                self.store.set(DEPOSIT_KEY, &json)?;
                tracing::debug!(
                    amount = record.amount,
                    deposited_at = %record.deposited_at,
                    "deposit saved"
                );
            }
            None => {
                self.store.remove(DEPOSIT_KEY)?;
                tracing::debug!("deposit cleared");
            }
        }
        Ok(())
    }

    /// Read the current deposit.
    ///
    /// Returns `Ok(None)` when the slot is empty or holds anything that does
    /// not parse as a record.
    pub fn load(&self) -> Result<Option<DepositRecord>, LedgerError> {
        let Some(raw) = self.store.get(DEPOSIT_KEY)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        match serde_json::from_str::<DepositRecord>(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable deposit record");
                Ok(None)
            }
        }
    }
}

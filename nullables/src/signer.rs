//! Nullable signer: approves or rejects without a wallet.

use baselingo_types::Signature;
use baselingo_wallet_core::{MessageSigner, WalletError};
use std::sync::Mutex;

/// A wallet stand-in that records every message it is asked to sign.
///
/// Approved signatures are fake: 64 copies of the 1-based request number.
pub struct NullSigner {
    requests: Mutex<Vec<String>>,
    rejection: Mutex<Option<String>>,
}

impl NullSigner {
    pub fn approving() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            rejection: Mutex::new(None),
        }
    }

    pub fn rejecting(reason: &str) -> Self {
        let signer = Self::approving();
        signer.reject_with(Some(reason));
        signer
    }

    /// Switch between approving (`None`) and rejecting with `reason`.
    pub fn reject_with(&self, reason: Option<&str>) {
        *self.rejection.lock().unwrap() = reason.map(str::to_string);
    }

    /// Every message presented for signing, in order, including rejected ones.
    pub fn messages(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for NullSigner {
    fn default() -> Self {
        Self::approving()
    }
}

impl MessageSigner for NullSigner {
    async fn sign_message(&self, message: &str) -> Result<Signature, WalletError> {
        let count = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(message.to_string());
            requests.len()
        };
        if let Some(reason) = self.rejection.lock().unwrap().clone() {
            return Err(WalletError::Signing(reason));
        }
        Ok(Signature([count as u8; 64]))
    }
}

//! Message-signing port.

use baselingo_types::{KeyPair, PublicKey, Signature};

use crate::keyfile::KeyFile;
use crate::WalletError;

/// Asks the user's wallet to sign a human-readable message.
///
/// Implementations return [`WalletError::Signing`] when the user declines
/// or the wallet is unreachable.
#[allow(async_fn_in_trait)]
pub trait MessageSigner {
    async fn sign_message(&self, message: &str) -> Result<Signature, WalletError>;
}

impl<T: MessageSigner + ?Sized> MessageSigner for &T {
    async fn sign_message(&self, message: &str) -> Result<Signature, WalletError> {
        (**self).sign_message(message).await
    }
}

/// Signs with an Ed25519 key held in process memory.
pub struct LocalSigner {
    keypair: KeyPair,
}

impl LocalSigner {
    pub fn new(keypair: KeyPair) -> Self {
        Self { keypair }
    }

    pub fn from_key_file(file: &KeyFile) -> Result<Self, WalletError> {
        Ok(Self::new(file.keypair()?))
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.keypair.public
    }
}

impl MessageSigner for LocalSigner {
    async fn sign_message(&self, message: &str) -> Result<Signature, WalletError> {
        Ok(baselingo_crypto::sign_message(
            message.as_bytes(),
            &self.keypair.private,
        ))
    }
}

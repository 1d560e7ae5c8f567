//! JSON key file for the local signer.
//!
//! ```json
//! { "version": 1, "public_key": "<64 hex>", "secret_key": "<64 hex>" }
//! ```
//!
//! The secret is stored unencrypted; the file is created with owner-only
//! permissions on Unix.

use std::path::Path;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use baselingo_crypto::{generate_keypair, keypair_from_private};
use baselingo_types::{KeyPair, PrivateKey, PublicKey};

use crate::WalletError;

const KEY_FILE_VERSION: u32 = 1;

#[derive(Clone, Serialize, Deserialize)]
pub struct KeyFile {
    pub version: u32,
    pub public_key: PublicKey,
    /// Hex-encoded 32-byte Ed25519 secret.
    secret_key: String,
}

impl KeyFile {
    /// Generate a fresh key pair and wrap it.
    pub fn generate() -> Result<Self, WalletError> {
        let keypair = generate_keypair().map_err(|e| WalletError::Key(e.to_string()))?;
        Ok(Self::from_keypair(&keypair))
    }

    pub fn from_keypair(keypair: &KeyPair) -> Self {
        Self {
            version: KEY_FILE_VERSION,
            public_key: keypair.public.clone(),
            secret_key: hex::encode(keypair.private.0),
        }
    }

    /// Decode the key pair, checking the stored public key matches the secret.
    pub fn keypair(&self) -> Result<KeyPair, WalletError> {
        if self.version != KEY_FILE_VERSION {
            return Err(WalletError::Key(format!(
                "unsupported key file version: {}",
                self.version
            )));
        }
        let mut bytes = hex::decode(&self.secret_key)
            .map_err(|e| WalletError::Key(format!("invalid secret key hex: {e}")))?;
        if bytes.len() != 32 {
            let len = bytes.len();
            bytes.zeroize();
            return Err(WalletError::Key(format!(
                "secret key has wrong length: expected 32, got {len}"
            )));
        }
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&bytes);
        bytes.zeroize();

        let keypair = keypair_from_private(PrivateKey(secret));
        secret.zeroize();
        if keypair.public != self.public_key {
            return Err(WalletError::Key(
                "public key does not match secret key".to_string(),
            ));
        }
        Ok(keypair)
    }
}

impl Drop for KeyFile {
    fn drop(&mut self) {
        self.secret_key.zeroize();
    }
}

/// Write `file` to `path` as pretty JSON, creating parent directories.
///
/// Refuses to replace an existing file unless `overwrite` is set.
pub fn save_key_file(file: &KeyFile, path: &Path, overwrite: bool) -> Result<(), WalletError> {
    if path.exists() && !overwrite {
        return Err(WalletError::KeyFileExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(file)
        .map_err(|e| WalletError::Key(format!("JSON serialization failed: {e}")))?;
    std::fs::write(path, json)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }

    tracing::info!(path = %path.display(), public_key = %file.public_key, "key file written");
    Ok(())
}

/// Read and validate a key file.
pub fn load_key_file(path: &Path) -> Result<KeyFile, WalletError> {
    let json = std::fs::read_to_string(path)?;
    let file: KeyFile = serde_json::from_str(&json)
        .map_err(|e| WalletError::Key(format!("invalid key file JSON: {e}")))?;
    file.keypair()?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use baselingo_crypto::keypair_from_seed;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("key.json");
        let file = KeyFile::from_keypair(&keypair_from_seed(&[3u8; 32]));

        save_key_file(&file, &path, false).unwrap();
        let loaded = load_key_file(&path).unwrap();
        assert_eq!(loaded.public_key, file.public_key);
        assert_eq!(loaded.keypair().unwrap().private.0, [3u8; 32]);
    }

    #[test]
    fn refuses_to_overwrite_without_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.json");
        let file = KeyFile::generate().unwrap();
        save_key_file(&file, &path, false).unwrap();

        let err = save_key_file(&KeyFile::generate().unwrap(), &path, false).unwrap_err();
        assert!(matches!(err, WalletError::KeyFileExists(_)));

        let replacement = KeyFile::generate().unwrap();
        save_key_file(&replacement, &path, true).unwrap();
        assert_eq!(load_key_file(&path).unwrap().public_key, replacement.public_key);
    }

    #[test]
    fn mismatched_public_key_is_rejected() {
        let mut file = KeyFile::from_keypair(&keypair_from_seed(&[3u8; 32]));
        file.public_key = keypair_from_seed(&[4u8; 32]).public;
        assert!(matches!(file.keypair(), Err(WalletError::Key(_))));
    }

    #[test]
    fn truncated_secret_is_rejected() {
        let json = format!(
            r#"{{"version":1,"public_key":"{}","secret_key":"abcd"}}"#,
            "00".repeat(32)
        );
        let file: KeyFile = serde_json::from_str(&json).unwrap();
        assert!(matches!(file.keypair(), Err(WalletError::Key(_))));
    }

    #[cfg(unix)]
    #[test]
    fn key_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.json");
        save_key_file(&KeyFile::generate().unwrap(), &path, false).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

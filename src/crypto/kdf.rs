use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use std::fmt;
use zeroize::Zeroizing;

use super::{KEY_LEN, SALT_LEN};
use crate::error::{CryptoError, Result};

/// AES-256-GCM key produced by [`derive_key`].
///
/// The raw bytes never leave the crate; the only consumer is the AEAD layer.
pub struct DerivedKey(Zeroizing<[u8; KEY_LEN]>);

impl DerivedKey {
    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey(..)")
    }
}

/// Derive encryption key from passphrase with PBKDF2-HMAC-SHA256.
///
/// # Errors
///
/// Returns `InvalidArgument` if the passphrase is empty, the salt is not
/// exactly 16 bytes, or `iterations` is zero.
pub fn derive_key(passphrase: &str, salt: &[u8], iterations: u32) -> Result<DerivedKey> {
    if passphrase.is_empty() {
        return Err(CryptoError::InvalidArgument("passphrase must not be empty".into()));
    }
    if salt.len() != SALT_LEN {
        return Err(CryptoError::InvalidArgument(format!(
            "salt must be {SALT_LEN} bytes, got {}",
            salt.len()
        )));
    }
    if iterations == 0 {
        return Err(CryptoError::InvalidArgument(
            "iteration count must be positive".into(),
        ));
    }

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, iterations, &mut key[..]);

    Ok(DerivedKey(key))
}

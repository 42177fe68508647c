//! One-way hashing and passphrase-based two-way encryption.
//!
//! The two-way operations derive an AES-256 key with PBKDF2-HMAC-SHA256 and
//! seal the data with AES-GCM. The result is a single lowercase hex record,
//! `salt || iv || tag || ciphertext`. The iteration count is not stored in
//! the record; decrypt must be given the same options encrypt used.
//!
//! The public functions never return errors. Failures are logged through
//! `tracing` and surface as `None`.
//!
//! ```no_run
//! use cryptkit::{EncryptOptions, SecurityLevel, two_way_decrypt, two_way_encrypt};
//!
//! let opts = EncryptOptions::with_level(SecurityLevel::Fast);
//! let record = two_way_encrypt("hello", "pw", &opts).unwrap();
//! assert_eq!(two_way_decrypt(&record, "pw", &opts).as_deref(), Some("hello"));
//! ```

pub mod crypto;
mod engine;
mod error;
mod format;
mod hash;
mod input;
#[cfg(feature = "async")]
pub mod nonblocking;
mod security;

pub use crate::error::CryptoError;
pub use crate::format::Record;
pub use crate::hash::{Comparison, HashAlgorithm};
pub use crate::input::PlaintextInput;
pub use crate::security::{DEFAULT_ITERATIONS, EncryptOptions, SecurityLevel};
use tracing::warn;

/// Hex digest of `data`, or `None` if `data` is empty.
pub fn one_way_encrypt(data: impl Into<PlaintextInput>, algorithm: HashAlgorithm) -> Option<String> {
    hash::one_way_hash(&data.into(), algorithm)
}

/// Compares `candidate` against a digest produced by [`one_way_encrypt`].
///
/// If either side is empty the hash is passed through unchanged as
/// [`Comparison::PassThrough`], which is never a match.
pub fn one_way_compare(
    hash: Option<&str>,
    candidate: impl Into<PlaintextInput>,
    algorithm: HashAlgorithm,
) -> Comparison {
    hash::one_way_compare(hash, &candidate.into(), algorithm)
}

/// Encrypts `data` under `passphrase` and returns the serialized record.
///
/// Returns `None` when `data` or `passphrase` is empty, and when any
/// primitive fails.
pub fn two_way_encrypt(
    data: impl Into<PlaintextInput>,
    passphrase: &str,
    options: &EncryptOptions,
) -> Option<String> {
    let data = data.into();
    if data.is_empty() || passphrase.is_empty() {
        return None;
    }

    let text = data.to_canonical_text();
    match engine::seal(&text, passphrase, options.resolve_iterations()) {
        Ok(record) => Some(record.to_hex()),
        Err(e) => {
            warn!(error = %e, "two-way encryption failed");
            None
        }
    }
}

/// Decrypts a record produced by [`two_way_encrypt`].
///
/// Every failure (wrong passphrase, wrong options, tampering, malformed
/// record) yields `None`. The recovered text is returned verbatim; structured
/// input comes back as its JSON text.
pub fn two_way_decrypt(record: &str, passphrase: &str, options: &EncryptOptions) -> Option<String> {
    if record.is_empty() || passphrase.is_empty() {
        return None;
    }

    match engine::open(record, passphrase, options.resolve_iterations()) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!(error = %e, "two-way decryption failed");
            None
        }
    }
}

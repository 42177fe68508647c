//! Passphrase sealing: derive a key per call, encrypt, frame as a [`Record`].

use tracing::debug;

use crate::crypto::{self, bytes_to_text, text_to_bytes};
use crate::error::Result;
use crate::format::Record;

/// Encrypts `text` under a key derived from `passphrase` with a fresh salt
/// and IV.
pub fn seal(text: &str, passphrase: &str, iterations: u32) -> Result<Record> {
    let salt = crypto::generate_salt()?;
    let iv = crypto::generate_iv()?;

    let key = crypto::derive_key(passphrase, &salt, iterations)?;
    let (ciphertext, tag) = crypto::encrypt(&key, &iv, text_to_bytes(text))?;
    drop(key);

    debug!(iterations, len = ciphertext.len(), "sealed record");
    Ok(Record::new(salt, iv, tag, ciphertext))
}

/// Parses and decrypts a serialized record.
pub fn open(record: &str, passphrase: &str, iterations: u32) -> Result<String> {
    let record = Record::parse(record)?;
    open_record(&record, passphrase, iterations)
}

pub fn open_record(record: &Record, passphrase: &str, iterations: u32) -> Result<String> {
    let key = crypto::derive_key(passphrase, record.salt(), iterations)?;
    let plaintext = crypto::decrypt(&key, record.iv(), record.ciphertext(), record.tag())?;
    drop(key);

    debug!(iterations, len = plaintext.len(), "opened record");
    bytes_to_text(&plaintext)
}

//! Serialized ciphertext record.
//!
//! Record format (lowercase hex, no delimiters):
//! ```text
//! SALT (32) | IV (24) | TAG (32) | CIPHERTEXT (2 * n)
//! ```
//!
//! The record does not carry the iteration count. Older CBC records
//! (`salt | iv | ciphertext`, no tag) are not recognized.

use std::fmt;
use std::str::FromStr;

use crate::crypto::{IV_LEN, SALT_LEN, TAG_LEN, bytes_to_hex, hex_to_bytes};
use crate::error::{CryptoError, Result};

/// Hex width of the salt field.
pub const SALT_HEX_LEN: usize = SALT_LEN * 2;
/// Hex width of the IV field.
pub const IV_HEX_LEN: usize = IV_LEN * 2;
/// Hex width of the tag field.
pub const TAG_HEX_LEN: usize = TAG_LEN * 2;
/// Hex width of the fixed header preceding the ciphertext.
pub const HEADER_HEX_LEN: usize = SALT_HEX_LEN + IV_HEX_LEN + TAG_HEX_LEN;

/// A parsed ciphertext record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    salt: [u8; SALT_LEN],
    iv: [u8; IV_LEN],
    tag: [u8; TAG_LEN],
    ciphertext: Vec<u8>,
}

impl Record {
    pub fn new(
        salt: [u8; SALT_LEN],
        iv: [u8; IV_LEN],
        tag: [u8; TAG_LEN],
        ciphertext: Vec<u8>,
    ) -> Self {
        Self {
            salt,
            iv,
            tag,
            ciphertext,
        }
    }

    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    pub fn iv(&self) -> &[u8; IV_LEN] {
        &self.iv
    }

    pub fn tag(&self) -> &[u8; TAG_LEN] {
        &self.tag
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Parses a record, rejecting anything that is not exactly the encoding
    /// produced by [`Record::to_hex`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidEncoding` if:
    /// - the record is shorter than the fixed header
    /// - the length is odd
    /// - any character is not lowercase hex
    pub fn parse(s: &str) -> Result<Self> {
        if s.len() < HEADER_HEX_LEN {
            return Err(CryptoError::InvalidEncoding(format!(
                "record too short: {} < {HEADER_HEX_LEN}",
                s.len()
            )));
        }
        if s.len() % 2 != 0 {
            return Err(CryptoError::InvalidEncoding("record has odd length".into()));
        }
        if !s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(CryptoError::InvalidEncoding(
                "record is not lowercase hex".into(),
            ));
        }

        let mut offset = 0;

        let salt = decode_field::<SALT_LEN>(&s[offset..offset + SALT_HEX_LEN], "salt")?;
        offset += SALT_HEX_LEN;

        let iv = decode_field::<IV_LEN>(&s[offset..offset + IV_HEX_LEN], "iv")?;
        offset += IV_HEX_LEN;

        let tag = decode_field::<TAG_LEN>(&s[offset..offset + TAG_HEX_LEN], "tag")?;
        offset += TAG_HEX_LEN;

        let ciphertext = hex_to_bytes(&s[offset..])?;

        Ok(Self::new(salt, iv, tag, ciphertext))
    }

    /// Canonical lowercase hex form.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(HEADER_HEX_LEN + self.ciphertext.len() * 2);
        out.push_str(&bytes_to_hex(&self.salt));
        out.push_str(&bytes_to_hex(&self.iv));
        out.push_str(&bytes_to_hex(&self.tag));
        out.push_str(&bytes_to_hex(&self.ciphertext));
        out
    }
}

fn decode_field<const N: usize>(hex: &str, name: &str) -> Result<[u8; N]> {
    hex_to_bytes(hex)?
        .try_into()
        .map_err(|_| CryptoError::InvalidEncoding(format!("invalid {name} length")))
}

impl FromStr for Record {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

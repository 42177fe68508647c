//! One-way hashing and hash comparison.
//!
//! Comparison is a plain string equality, not constant-time. Digests are not
//! treated as secrets.

use md5::Md5;
use sha2::{Digest, Sha256};

use crate::crypto::bytes_to_hex;
use crate::input::PlaintextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    /// For non-security identifiers only.
    Md5,
}

impl HashAlgorithm {
    /// Maps the `useSha` switch: `true` selects SHA-256, `false` MD5.
    pub fn from_use_sha(use_sha: bool) -> Self {
        if use_sha { Self::Sha256 } else { Self::Md5 }
    }

    /// Lowercase hex digest of the UTF-8 bytes of `text`.
    pub fn digest_hex(self, text: &str) -> String {
        match self {
            HashAlgorithm::Sha256 => bytes_to_hex(&Sha256::digest(text.as_bytes())),
            HashAlgorithm::Md5 => bytes_to_hex(&Md5::digest(text.as_bytes())),
        }
    }
}

/// Outcome of [`one_way_compare`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    Match,
    Mismatch,
    /// One side was empty; the hash argument is handed back unchanged.
    /// Not a match.
    PassThrough(Option<String>),
}

impl Comparison {
    pub fn is_match(&self) -> bool {
        matches!(self, Comparison::Match)
    }
}

/// Digest of the canonical text of `data`, or `None` if `data` is empty.
pub fn one_way_hash(data: &PlaintextInput, algorithm: HashAlgorithm) -> Option<String> {
    if data.is_empty() {
        return None;
    }
    Some(algorithm.digest_hex(&data.to_canonical_text()))
}

/// Rehashes `candidate` and compares it to `hash`.
pub fn one_way_compare(
    hash: Option<&str>,
    candidate: &PlaintextInput,
    algorithm: HashAlgorithm,
) -> Comparison {
    let hash = match hash {
        Some(h) if !h.is_empty() && !candidate.is_empty() => h,
        other => return Comparison::PassThrough(other.map(str::to_owned)),
    };

    match one_way_hash(candidate, algorithm) {
        Some(computed) if computed == hash => Comparison::Match,
        _ => Comparison::Mismatch,
    }
}

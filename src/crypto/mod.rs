//! Cryptographic primitives behind the two-way API.
//!
//! Provides secure randomness, byte/text encodings, PBKDF2 key derivation
//! and AES-256-GCM sealing. Nothing here makes policy decisions.
//!
//! The AEAD layer is crate-private; nonces are drawn only inside the sealing
//! path, never supplied by a caller:
//!
//! ```compile_fail
//! use cryptkit::crypto::{derive_key, encrypt};
//!
//! let key = derive_key("pw", &[0u8; 16], 1).unwrap();
//! let _ = encrypt(&key, &[0u8; 12], b"data");
//! ```

pub(crate) mod aead;
pub mod encoding;
pub mod kdf;
pub mod random;

pub(crate) use aead::{decrypt, encrypt};
pub use encoding::{bytes_to_hex, bytes_to_text, hex_to_bytes, text_to_bytes};
pub use kdf::{DerivedKey, derive_key};
pub use random::{generate_iv, generate_salt, secure_random_bytes};

/// Length of the PBKDF2 salt (16 bytes).
pub const SALT_LEN: usize = 16;
/// Length of the AES-GCM nonce (12 bytes).
pub const IV_LEN: usize = 12;
/// Length of the AES-GCM authentication tag (16 bytes).
pub const TAG_LEN: usize = 16;
/// Length of the derived key (32 bytes / 256 bits).
pub const KEY_LEN: usize = 32;

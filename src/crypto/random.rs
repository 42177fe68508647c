use super::{IV_LEN, SALT_LEN};
use crate::error::{CryptoError, Result};
use getrandom::fill;

/// Fill buffer with cryptographically secure random bytes
fn secure_random(buf: &mut [u8]) -> Result<()> {
    fill(buf).map_err(|e| CryptoError::UnavailableProvider(format!("OS random generator: {e}")))
}

/// Returns `n` freshly generated random bytes.
///
/// # Errors
///
/// Returns `InvalidArgument` if `n` is zero and `UnavailableProvider` if the
/// platform has no secure randomness source.
pub fn secure_random_bytes(n: usize) -> Result<Vec<u8>> {
    if n == 0 {
        return Err(CryptoError::InvalidArgument(
            "random byte count must be positive".into(),
        ));
    }
    let mut buf = vec![0u8; n];
    secure_random(&mut buf)?;
    Ok(buf)
}

/// Generate salt
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    secure_random(&mut salt)?;
    Ok(salt)
}

/// Generate GCM nonce
pub fn generate_iv() -> Result<[u8; IV_LEN]> {
    let mut iv = [0u8; IV_LEN];
    secure_random(&mut iv)?;
    Ok(iv)
}

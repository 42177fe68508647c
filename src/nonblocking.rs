//! Async variants of the public operations.
//!
//! Key derivation is CPU-bound, so each call runs on tokio's blocking pool.
//! Dropping a returned future does not cancel the work; the result is
//! discarded when it completes.

use tokio::task::spawn_blocking;
use tracing::warn;
use zeroize::Zeroizing;

use crate::{Comparison, EncryptOptions, HashAlgorithm, PlaintextInput};

async fn run_blocking<T, F>(op: &'static str, f: F) -> Option<T>
where
    F: FnOnce() -> Option<T> + Send + 'static,
    T: Send + 'static,
{
    match spawn_blocking(f).await {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, op, "blocking task failed");
            None
        }
    }
}

/// See [`crate::two_way_encrypt`].
pub async fn two_way_encrypt(
    data: impl Into<PlaintextInput>,
    passphrase: Zeroizing<String>,
    options: EncryptOptions,
) -> Option<String> {
    let data = data.into();
    run_blocking("two_way_encrypt", move || {
        crate::two_way_encrypt(data, &passphrase, &options)
    })
    .await
}

/// See [`crate::two_way_decrypt`].
pub async fn two_way_decrypt(
    record: String,
    passphrase: Zeroizing<String>,
    options: EncryptOptions,
) -> Option<String> {
    run_blocking("two_way_decrypt", move || {
        crate::two_way_decrypt(&record, &passphrase, &options)
    })
    .await
}

/// See [`crate::one_way_encrypt`].
pub async fn one_way_encrypt(
    data: impl Into<PlaintextInput>,
    algorithm: HashAlgorithm,
) -> Option<String> {
    let data = data.into();
    run_blocking("one_way_encrypt", move || crate::one_way_encrypt(data, algorithm)).await
}

/// See [`crate::one_way_compare`]. A failed task compares as a mismatch.
pub async fn one_way_compare(
    hash: Option<String>,
    candidate: impl Into<PlaintextInput>,
    algorithm: HashAlgorithm,
) -> Comparison {
    let candidate = candidate.into();
    run_blocking("one_way_compare", move || {
        Some(crate::one_way_compare(hash.as_deref(), candidate, algorithm))
    })
    .await
    .unwrap_or(Comparison::Mismatch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SecurityLevel;

    fn pw(s: &str) -> Zeroizing<String> {
        Zeroizing::new(s.to_string())
    }

    #[tokio::test]
    async fn async_roundtrip() {
        let opts = EncryptOptions::with_level(SecurityLevel::Fast);
        let record = two_way_encrypt("hello", pw("pw"), opts).await.unwrap();

        assert_eq!(
            two_way_decrypt(record.clone(), pw("pw"), opts).await.as_deref(),
            Some("hello")
        );
        assert_eq!(two_way_decrypt(record, pw("other"), opts).await, None);
    }

    #[tokio::test]
    async fn async_hash_and_compare() {
        let hash = one_way_encrypt("abc", HashAlgorithm::Sha256).await;
        assert!(
            one_way_compare(hash, "abc", HashAlgorithm::Sha256)
                .await
                .is_match()
        );
    }

    #[tokio::test]
    async fn concurrent_calls_are_independent() {
        let opts = EncryptOptions::with_level(SecurityLevel::Fast);
        let (a, b) = tokio::join!(
            two_way_encrypt("same", pw("pw"), opts),
            two_way_encrypt("same", pw("pw"), opts),
        );
        let (a, b) = (a.unwrap(), b.unwrap());

        assert_ne!(a, b);
        assert_eq!(two_way_decrypt(a, pw("pw"), opts).await.as_deref(), Some("same"));
        assert_eq!(two_way_decrypt(b, pw("pw"), opts).await.as_deref(), Some("same"));
    }
}

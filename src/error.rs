use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("cryptography provider unavailable: {0}")]
    UnavailableProvider(String),

    /// Tag verification failed. Wrong passphrase, wrong iteration count and
    /// tampered data all end up here and are indistinguishable.
    #[error("invalid passphrase or corrupted data")]
    AuthenticationFailure,
}

pub type Result<T> = std::result::Result<T, CryptoError>;

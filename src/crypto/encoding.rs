use crate::error::{CryptoError, Result};

/// Lowercase hex encoding.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decodes hex of either case.
///
/// # Errors
///
/// Returns `InvalidEncoding` on odd length or non-hex characters.
pub fn hex_to_bytes(s: &str) -> Result<Vec<u8>> {
    hex::decode(s).map_err(|e| CryptoError::InvalidEncoding(e.to_string()))
}

pub fn text_to_bytes(s: &str) -> &[u8] {
    s.as_bytes()
}

/// Interprets bytes as UTF-8 text.
///
/// # Errors
///
/// Returns `InvalidEncoding` if the bytes are not valid UTF-8.
pub fn bytes_to_text(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| CryptoError::InvalidEncoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase() {
        assert_eq!(bytes_to_hex(&[0xab, 0x01, 0xff]), "ab01ff");
    }

    #[test]
    fn hex_decodes_either_case() {
        assert_eq!(hex_to_bytes("AB01ff").unwrap(), vec![0xab, 0x01, 0xff]);
    }

    #[test]
    fn odd_length_hex_fails() {
        assert!(matches!(
            hex_to_bytes("abc"),
            Err(CryptoError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn non_hex_characters_fail() {
        assert!(matches!(
            hex_to_bytes("zz"),
            Err(CryptoError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn invalid_utf8_fails() {
        assert!(bytes_to_text(&[0xff, 0xfe]).is_err());
        assert_eq!(bytes_to_text(text_to_bytes("héllo")).unwrap(), "héllo");
    }
}

//! Named PBKDF2 work factors and iteration resolution.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CryptoError;

/// Preset PBKDF2 iteration counts.
///
/// Names parse case-insensitively, both through `FromStr` and when
/// deserializing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SecurityLevel {
    Fast,
    Standard,
    High,
    #[default]
    Maximum,
}

/// Iterations used when neither an override nor a level is given.
pub const DEFAULT_ITERATIONS: u32 = SecurityLevel::Maximum.iterations();

impl SecurityLevel {
    pub const ALL: [SecurityLevel; 4] = [
        SecurityLevel::Fast,
        SecurityLevel::Standard,
        SecurityLevel::High,
        SecurityLevel::Maximum,
    ];

    pub const fn iterations(self) -> u32 {
        match self {
            SecurityLevel::Fast => 1_000,
            SecurityLevel::Standard => 10_000,
            SecurityLevel::High => 100_000,
            SecurityLevel::Maximum => 600_000,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SecurityLevel::Fast => "fast",
            SecurityLevel::Standard => "standard",
            SecurityLevel::High => "high",
            SecurityLevel::Maximum => "maximum",
        }
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SecurityLevel {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CryptoError::InvalidArgument(format!("unknown security level: {s}")))
    }
}

impl TryFrom<String> for SecurityLevel {
    type Error = CryptoError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Options shared by encrypt and decrypt. Decrypt must be given the same
/// effective iteration count that encrypt used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_level: Option<SecurityLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u32>,
}

impl EncryptOptions {
    pub fn with_level(level: SecurityLevel) -> Self {
        Self {
            security_level: Some(level),
            iterations: None,
        }
    }

    pub fn with_iterations(iterations: u32) -> Self {
        Self {
            security_level: None,
            iterations: Some(iterations),
        }
    }

    /// Explicit iterations win over a named level, which wins over the default.
    pub fn resolve_iterations(&self) -> u32 {
        self.iterations
            .or_else(|| self.security_level.map(SecurityLevel::iterations))
            .unwrap_or(DEFAULT_ITERATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_table() {
        assert_eq!(SecurityLevel::Fast.iterations(), 1_000);
        assert_eq!(SecurityLevel::Standard.iterations(), 10_000);
        assert_eq!(SecurityLevel::High.iterations(), 100_000);
        assert_eq!(SecurityLevel::Maximum.iterations(), 600_000);
        assert_eq!(SecurityLevel::default(), SecurityLevel::Maximum);
    }

    #[test]
    fn default_resolves_to_maximum() {
        assert_eq!(EncryptOptions::default().resolve_iterations(), 600_000);
    }

    #[test]
    fn explicit_iterations_override_level() {
        let opts = EncryptOptions {
            security_level: Some(SecurityLevel::Fast),
            iterations: Some(42),
        };
        assert_eq!(opts.resolve_iterations(), 42);
    }

    #[test]
    fn level_used_without_override() {
        assert_eq!(
            EncryptOptions::with_level(SecurityLevel::High).resolve_iterations(),
            100_000
        );
    }

    #[test]
    fn names_roundtrip_through_from_str() {
        for level in SecurityLevel::ALL {
            assert_eq!(level.name().parse::<SecurityLevel>().unwrap(), level);
        }
        assert_eq!(SecurityLevel::High.to_string(), "high");
        assert_eq!("FAST".parse::<SecurityLevel>().unwrap(), SecurityLevel::Fast);
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(matches!(
            "paranoid".parse::<SecurityLevel>(),
            Err(CryptoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn options_deserialize_from_camel_case_json() {
        let opts: EncryptOptions =
            serde_json::from_str(r#"{"securityLevel":"fast"}"#).unwrap();
        assert_eq!(opts, EncryptOptions::with_level(SecurityLevel::Fast));

        let opts: EncryptOptions = serde_json::from_str(r#"{"iterations":5000}"#).unwrap();
        assert_eq!(opts.resolve_iterations(), 5000);

        assert!(serde_json::from_str::<EncryptOptions>(r#"{"securityLevel":"nope"}"#).is_err());
    }

    #[test]
    fn level_names_are_case_insensitive_everywhere() {
        let opts: EncryptOptions =
            serde_json::from_str(r#"{"securityLevel":"FAST"}"#).unwrap();
        assert_eq!(opts.security_level, Some(SecurityLevel::Fast));
    }

    #[test]
    fn levels_serialize_lowercase() {
        let json = serde_json::to_string(&EncryptOptions::with_level(SecurityLevel::Standard))
            .unwrap();
        assert_eq!(json, r#"{"securityLevel":"standard"}"#);
    }
}

//! Plaintext accepted by the public operations.

use serde::Serialize;
use serde_json::Value;

/// Text, or a structured value that is serialized to JSON before use.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaintextInput {
    Text(String),
    Structured(Value),
}

impl PlaintextInput {
    /// Wraps any serializable value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON.
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Self> {
        Ok(Self::Structured(serde_json::to_value(value)?))
    }

    /// `true` for empty text and for JSON `null` / `""`.
    pub fn is_empty(&self) -> bool {
        match self {
            PlaintextInput::Text(s) => s.is_empty(),
            PlaintextInput::Structured(Value::Null) => true,
            PlaintextInput::Structured(Value::String(s)) => s.is_empty(),
            PlaintextInput::Structured(_) => false,
        }
    }

    /// Text passes through; a JSON string is taken verbatim; anything else
    /// becomes its compact JSON form.
    pub fn to_canonical_text(&self) -> String {
        match self {
            PlaintextInput::Text(s) => s.clone(),
            PlaintextInput::Structured(Value::String(s)) => s.clone(),
            PlaintextInput::Structured(v) => v.to_string(),
        }
    }
}

impl From<&str> for PlaintextInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for PlaintextInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for PlaintextInput {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<Value> for PlaintextInput {
    fn from(v: Value) -> Self {
        Self::Structured(v)
    }
}

impl<T: Into<PlaintextInput>> From<Option<T>> for PlaintextInput {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Structured(Value::Null), Into::into)
    }
}

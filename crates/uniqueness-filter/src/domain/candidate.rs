//! Candidate values submitted for classification
//!
//! Callers may hand over anything, including nulls and non-string values.
//! Those stay representable so they can be keyed in the result mapping
//! exactly as supplied.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A value submitted for a uniqueness check
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Candidate {
    /// A string value, possibly empty or whitespace-only
    Text(String),
    /// An absent value
    Null,
    /// Any other value, held as its canonical JSON text
    Other(String),
}

impl Candidate {
    /// The string to hash, if this candidate is a usable password
    ///
    /// Valid means a string with at least one non-blank character (see
    /// [`is_blank`]). The untrimmed string is returned: trimming only decides
    /// validity.
    pub fn valid_text(&self) -> Option<&str> {
        match self {
            Candidate::Text(s) if !s.trim_matches(is_blank).is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid_text().is_some()
    }
}

/// Characters that do not count towards a usable password
///
/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F,
/// which common `strip()` implementations also remove.
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Text(s) => write!(f, "'{}'", s),
            Candidate::Null => f.write_str("null"),
            Candidate::Other(raw) => f.write_str(raw),
        }
    }
}

impl From<&str> for Candidate {
    fn from(value: &str) -> Self {
        Candidate::Text(value.to_string())
    }
}

impl From<String> for Candidate {
    fn from(value: String) -> Self {
        Candidate::Text(value)
    }
}

impl<T: Into<String>> From<Option<T>> for Candidate {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(s) => Candidate::Text(s.into()),
            None => Candidate::Null,
        }
    }
}

impl From<Value> for Candidate {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Candidate::Null,
            Value::String(s) => Candidate::Text(s),
            other => Candidate::Other(other.to_string()),
        }
    }
}

impl Serialize for Candidate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Candidate::Text(s) => serializer.serialize_str(s),
            Candidate::Null => serializer.serialize_none(),
            Candidate::Other(raw) => match serde_json::from_str::<Value>(raw) {
                Ok(value) => value.serialize(serializer),
                Err(_) => serializer.serialize_str(raw),
            },
        }
    }
}

impl<'de> Deserialize<'de> for Candidate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Candidate::from)
    }
}

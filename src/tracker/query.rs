//! Key identifiers accepted by `KeyTracker::is_pressed`

use std::fmt;

use crate::keycodes::{KeyCode, KeyCodeRegistry};

/// A key named either by its registry name or by its raw code
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyQuery {
    ByName(String),
    ByCode(KeyCode),
}

impl KeyQuery {
    /// Resolve to a key code through `registry`
    pub fn resolve(&self, registry: &KeyCodeRegistry) -> Result<KeyCode, TrackerError> {
        match self {
            KeyQuery::ByCode(code) => Ok(*code),
            KeyQuery::ByName(name) => registry
                .lookup(name)
                .ok_or_else(|| TrackerError::InvalidKeyIdentifier(name.clone())),
        }
    }
}

impl From<&str> for KeyQuery {
    fn from(name: &str) -> Self {
        KeyQuery::ByName(name.to_string())
    }
}

impl From<String> for KeyQuery {
    fn from(name: String) -> Self {
        KeyQuery::ByName(name)
    }
}

impl From<&String> for KeyQuery {
    fn from(name: &String) -> Self {
        KeyQuery::ByName(name.clone())
    }
}

impl From<KeyCode> for KeyQuery {
    fn from(code: KeyCode) -> Self {
        KeyQuery::ByCode(code)
    }
}

impl fmt::Display for KeyQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyQuery::ByName(name) => write!(f, "{}", name),
            KeyQuery::ByCode(code) => write!(f, "{}", code),
        }
    }
}

/// Errors returned by key state queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// The name is not in the key-code table
    InvalidKeyIdentifier(String),
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerError::InvalidKeyIdentifier(key) => write!(
                f,
                "`{}` is not a valid key value (see KeyCodeRegistry for the known names)",
                key
            ),
        }
    }
}

impl std::error::Error for TrackerError {}

//! Read-only lookup over the key-code table

use std::collections::HashMap;
use std::sync::OnceLock;

use super::table::KEY_CODES;

/// A key code as delivered by the host (legacy DOM `keyCode` numbering)
pub type KeyCode = u32;

/// Immutable name → code mapping
///
/// Names are matched exactly and case-sensitively ("arrowLeft", not
/// "arrowleft"). Built once on first use and shared for the process lifetime.
#[derive(Debug)]
pub struct KeyCodeRegistry {
    entries: &'static [(&'static str, KeyCode)],
    by_name: HashMap<&'static str, KeyCode>,
    /// First name defined for each code
    by_code: HashMap<KeyCode, &'static str>,
}

impl KeyCodeRegistry {
    fn from_table(entries: &'static [(&'static str, KeyCode)]) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_code = HashMap::with_capacity(entries.len());

        for &(name, code) in entries {
            by_name.insert(name, code);
            by_code.entry(code).or_insert(name);
        }

        Self {
            entries,
            by_name,
            by_code,
        }
    }

    /// The process-wide registry
    pub fn global() -> &'static KeyCodeRegistry {
        static REGISTRY: OnceLock<KeyCodeRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| KeyCodeRegistry::from_table(KEY_CODES))
    }

    /// Code for a key name, or `None` if the name is not in the table
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<KeyCode> {
        self.by_name.get(name).copied()
    }

    /// Name for a key code, or `None` if no entry maps to it
    #[inline]
    pub fn name_of(&self, code: KeyCode) -> Option<&'static str> {
        self.by_code.get(&code).copied()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of named entries
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// All (name, code) pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, KeyCode)> + '_ {
        self.entries.iter().copied()
    }
}

/// Look up a key name in the global registry
pub fn lookup(name: &str) -> Option<KeyCode> {
    KeyCodeRegistry::global().lookup(name)
}

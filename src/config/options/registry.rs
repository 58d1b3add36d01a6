//! Registry of live option values

use super::types::{normalize_key, OptionDefinition, OptionError, OptionKind, OptionValue};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone)]
struct Entry {
    definition: OptionDefinition,
    value: OptionValue,
}

/// Thread-safe registry of option definitions and their current values
///
/// The whole map sits behind a single lock so readers never observe a value
/// whose kind disagrees with its definition.
#[derive(Debug)]
pub struct OptionsRegistry {
    entries: Mutex<BTreeMap<String, Entry>>,
}

impl OptionsRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
        }
    }

    fn entries(&self) -> MutexGuard<'_, BTreeMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a new option with the zero value of its kind
    ///
    /// Returns an error if an option with the same key is already registered
    pub fn register(&self, mut def: OptionDefinition) -> Result<(), OptionError> {
        def.key = normalize_key(&def.key);
        let mut entries = self.entries();
        if entries.contains_key(&def.key) {
            return Err(OptionError::AlreadyRegistered { key: def.key });
        }
        log::debug!("Registered option: {} ({})", def.key, def.kind);
        let value = def.kind.zero();
        entries.insert(def.key.clone(), Entry { definition: def, value });
        Ok(())
    }

    /// Get the current value of an option
    pub fn get(&self, key: &str) -> Result<OptionValue, OptionError> {
        let key = normalize_key(key);
        self.entries()
            .get(&key)
            .map(|entry| entry.value.clone())
            .ok_or(OptionError::UnknownKey { key })
    }

    /// Parse `text` according to the option's kind and store it
    ///
    /// On error the stored value is left untouched.
    pub fn set(&self, key: &str, text: &str) -> Result<(), OptionError> {
        let key = normalize_key(key);
        let mut entries = self.entries();
        let entry = entries
            .get_mut(&key)
            .ok_or_else(|| OptionError::UnknownKey { key: key.clone() })?;
        let value = entry.definition.kind.parse(&key, text)?;
        log::debug!("Set option: {} = {}", key, value);
        entry.value = value;
        Ok(())
    }

    /// Store an already typed value; the kind must match the registered one
    pub fn set_value(&self, key: &str, value: OptionValue) -> Result<(), OptionError> {
        let key = normalize_key(key);
        let mut entries = self.entries();
        let entry = entries
            .get_mut(&key)
            .ok_or_else(|| OptionError::UnknownKey { key: key.clone() })?;
        if value.kind() != entry.definition.kind {
            return Err(OptionError::InvalidFormat {
                key,
                expected: entry.definition.kind,
                text: value.as_text(),
            });
        }
        log::debug!("Set option: {} = {}", key, value);
        entry.value = value;
        Ok(())
    }

    /// Kind of a registered option
    pub fn kind(&self, key: &str) -> Option<OptionKind> {
        self.entries()
            .get(&normalize_key(key))
            .map(|entry| entry.definition.kind)
    }

    /// Check if an option is registered
    pub fn contains(&self, key: &str) -> bool {
        self.entries().contains_key(&normalize_key(key))
    }

    /// Get total number of registered options
    pub fn count(&self) -> usize {
        self.entries().len()
    }

    /// All options with their current values, sorted by key
    pub fn list(&self) -> Vec<(String, OptionValue)> {
        self.entries()
            .iter()
            .map(|(key, entry)| (key.clone(), entry.value.clone()))
            .collect()
    }

    /// All option definitions, sorted by key
    pub fn definitions(&self) -> Vec<OptionDefinition> {
        self.entries()
            .values()
            .map(|entry| entry.definition.clone())
            .collect()
    }
}

impl Default for OptionsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

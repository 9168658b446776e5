//! The ordered, case-insensitive variable scope threaded through steps.

use crate::errors::InvalidKeyError;
use indexmap::IndexMap;
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The reserved key holding the primary value flowing through a pipeline.
pub const INPUT_KEY: &str = "INPUT";

/// A single variable entry, retaining the caller's original key casing.
#[derive(Debug, Clone)]
struct Variable {
    name: String,
    value: String,
}

/// An ordered, mutable mapping from case-insensitive string keys to string
/// values.
///
/// One reserved key, [`INPUT_KEY`], holds the "main" value of the pipeline
/// and is read and written through [`input`](Self::input) and
/// [`set_input`](Self::set_input) without naming it. The reserved slot
/// exists (empty) from construction and is recreated on demand after
/// [`clear`](Self::clear).
///
/// Enumeration order is insertion order; overwriting an existing key keeps
/// its position and first-seen casing. `Clone` produces an independent deep
/// copy that shares no storage with the source.
#[derive(Debug, Clone)]
pub struct VariableScope {
    /// Entries keyed by the case-folded key.
    entries: IndexMap<String, Variable>,
}

impl VariableScope {
    /// Creates a new scope with an empty reserved slot.
    #[must_use]
    pub fn new() -> Self {
        let mut scope = Self {
            entries: IndexMap::new(),
        };
        scope.set_input("");
        scope
    }

    /// Creates a scope seeded with a primary value.
    #[must_use]
    pub fn with_input(value: impl Into<String>) -> Self {
        let mut scope = Self::new();
        scope.set_input(value);
        scope
    }

    /// Gets a value by case-insensitive key.
    ///
    /// A miss is `None`, never an error; absence is distinguishable from
    /// presence with an empty value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&Self::fold(key))
            .map(|entry| entry.value.as_str())
    }

    /// Sets a value by case-insensitive key, overwriting any existing value.
    ///
    /// Overwriting keeps the entry's insertion position and original casing.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKeyError`] if the key is empty or all whitespace.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), InvalidKeyError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(InvalidKeyError::new(key));
        }
        self.upsert(key, value.into());
        Ok(())
    }

    /// Returns the reserved slot's value, or `""` when absent.
    #[must_use]
    pub fn input(&self) -> &str {
        self.get(INPUT_KEY).unwrap_or("")
    }

    /// Sets the reserved slot's value.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.upsert(INPUT_KEY.to_string(), value.into());
    }

    /// Removes a variable by case-insensitive key, returning its value.
    ///
    /// Removal preserves the order of the remaining entries. Removing the
    /// reserved slot is allowed; [`input`](Self::input) then reads empty
    /// until the slot is written again.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries
            .shift_remove(&Self::fold(key))
            .map(|entry| entry.value)
    }

    /// Checks whether a key is present, case-insensitively.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&Self::fold(key))
    }

    /// Removes every entry, including the reserved slot.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Upserts every entry of another scope into this one.
    ///
    /// Keys already present keep their position; new keys append in the
    /// other scope's order.
    pub fn merge(&mut self, other: &Self) {
        for entry in other.entries.values() {
            self.upsert(entry.name.clone(), entry.value.clone());
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the scope holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    ///
    /// Keys carry the casing they were first written with.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|entry| (entry.name.as_str(), entry.value.as_str()))
    }

    /// Returns an ordered snapshot of the scope's contents.
    #[must_use]
    pub fn to_map(&self) -> IndexMap<String, String> {
        self.entries
            .values()
            .map(|entry| (entry.name.clone(), entry.value.clone()))
            .collect()
    }

    fn fold(key: &str) -> String {
        key.to_lowercase()
    }

    fn upsert(&mut self, name: String, value: String) {
        let folded = Self::fold(&name);
        match self.entries.get_mut(&folded) {
            Some(entry) => entry.value = value,
            None => {
                self.entries.insert(folded, Variable { name, value });
            }
        }
    }
}

impl Default for VariableScope {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VariableScope {
    /// Renders the reserved slot, the externally visible result of a stage.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input())
    }
}

impl Serialize for VariableScope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in self.entries.values() {
            map.serialize_entry(&entry.name, &entry.value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for VariableScope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, String>::deserialize(deserializer)?;
        let mut scope = Self::new();
        for (key, value) in raw {
            scope.set(key, value).map_err(D::Error::custom)?;
        }
        Ok(scope)
    }
}

//! Read-only function-registry views and the collaborator-owned catalog.
//!
//! Contexts hold the [`FunctionRegistryView`] seam only: enumeration for
//! diagnostics, size, and membership. Registration lives on
//! [`FunctionCatalog`], owned by the orchestrator side and never reachable
//! through a context.

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// A descriptor for one invocable function, as surfaced to diagnostics.
///
/// Invocation is not part of this crate; a descriptor only identifies the
/// function within its plugin and carries its description text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    /// The plugin the function belongs to.
    pub plugin: String,
    /// The function name, unique within its plugin.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

impl FunctionDescriptor {
    /// Creates a descriptor with an empty description.
    #[must_use]
    pub fn new(plugin: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            name: name.into(),
            description: String::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the `plugin.name` qualified name.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.plugin, self.name)
    }
}

/// Read-only capability over a function registry.
///
/// Every context descended from one construction sees the same registry
/// through this trait; none can mutate it.
pub trait FunctionRegistryView: Send + Sync {
    /// Enumerates the known function descriptors, for diagnostics.
    fn descriptors(&self) -> Vec<FunctionDescriptor>;

    /// Returns the number of registered functions.
    fn len(&self) -> usize;

    /// Returns true if no functions are registered.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks for a function by plugin and name, case-insensitively.
    fn contains(&self, plugin: &str, name: &str) -> bool;
}

/// The always-miss registry bound when no collaborator supplies one.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyFunctionRegistry;

impl FunctionRegistryView for EmptyFunctionRegistry {
    fn descriptors(&self) -> Vec<FunctionDescriptor> {
        Vec::new()
    }

    fn len(&self) -> usize {
        0
    }

    fn contains(&self, _plugin: &str, _name: &str) -> bool {
        false
    }
}

/// The mutable function catalog owned by the orchestrator side.
///
/// Registration upserts by case-insensitive qualified name. Contexts only
/// ever see a catalog through [`FunctionRegistryView`].
#[derive(Debug, Default)]
pub struct FunctionCatalog {
    entries: RwLock<IndexMap<String, FunctionDescriptor>>,
}

impl FunctionCatalog {
    /// Creates a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a function descriptor, replacing any existing entry with
    /// the same case-insensitive qualified name.
    pub fn register(&self, descriptor: FunctionDescriptor) {
        tracing::debug!(
            plugin = %descriptor.plugin,
            name = %descriptor.name,
            "registering function"
        );
        let key = descriptor.qualified_name().to_lowercase();
        self.entries.write().insert(key, descriptor);
    }

    /// Looks up a descriptor by plugin and name, case-insensitively.
    #[must_use]
    pub fn get(&self, plugin: &str, name: &str) -> Option<FunctionDescriptor> {
        let key = format!("{plugin}.{name}").to_lowercase();
        self.entries.read().get(&key).cloned()
    }
}

impl FunctionRegistryView for FunctionCatalog {
    fn descriptors(&self) -> Vec<FunctionDescriptor> {
        self.entries.read().values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }

    fn contains(&self, plugin: &str, name: &str) -> bool {
        let key = format!("{plugin}.{name}").to_lowercase();
        self.entries.read().contains_key(&key)
    }
}

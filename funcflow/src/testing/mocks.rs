//! Mock runtime handles for testing.

use crate::registry::FunctionRegistryView;
use crate::runtime::RuntimeServices;
use parking_lot::Mutex;
use std::sync::Arc;

/// A runtime handle with configurable hooks and call tracking.
#[derive(Default)]
pub struct MockRuntime {
    registry: Option<Arc<dyn FunctionRegistryView>>,
    narrowed: Option<Arc<dyn RuntimeServices>>,
    narrow_calls: Mutex<usize>,
}

impl MockRuntime {
    /// Creates a mock runtime supplying no registry and no narrowed handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the runtime supply a function registry.
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<dyn FunctionRegistryView>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Makes the runtime hand out a narrowed handle to branches.
    #[must_use]
    pub fn with_narrowed(mut self, narrowed: Arc<dyn RuntimeServices>) -> Self {
        self.narrowed = Some(narrowed);
        self
    }

    /// Returns how many times a narrowed handle was requested.
    #[must_use]
    pub fn narrow_calls(&self) -> usize {
        *self.narrow_calls.lock()
    }
}

impl RuntimeServices for MockRuntime {
    fn function_registry(&self) -> Option<Arc<dyn FunctionRegistryView>> {
        self.registry.clone()
    }

    fn narrowed(&self) -> Option<Arc<dyn RuntimeServices>> {
        *self.narrow_calls.lock() += 1;
        self.narrowed.clone()
    }
}

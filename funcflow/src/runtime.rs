//! The opaque runtime/service handle shared across contexts.

use crate::registry::FunctionRegistryView;
use std::sync::Arc;

/// Capability trait for the process-wide runtime handle a context carries.
///
/// The context treats the handle as opaque: it obtains it at construction
/// and re-exposes it to steps, nothing more. The two hooks here are the
/// only points where the context consults the handle.
pub trait RuntimeServices: Send + Sync {
    /// Supplies the function registry bound to contexts built over this
    /// handle, when the runtime owns one.
    ///
    /// Returning `None` makes the context fall back to the always-miss
    /// default registry.
    fn function_registry(&self) -> Option<Arc<dyn FunctionRegistryView>> {
        None
    }

    /// Derives a handle scoped to one branch of execution.
    ///
    /// Consulted by `ExecutionContext::clone`. The default returns `None`,
    /// meaning the clone shares this handle unchanged. Runtimes that want
    /// branches to run against a narrower service set override this; no
    /// narrowing policy ships with this crate.
    fn narrowed(&self) -> Option<Arc<dyn RuntimeServices>> {
        None
    }
}

/// A runtime handle supplying no services of its own.
///
/// Useful for orchestrators that wire the registry explicitly, and as the
/// minimal handle in examples.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRuntime;

impl RuntimeServices for NullRuntime {}

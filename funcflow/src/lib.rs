//! # Funcflow
//!
//! Execution-context propagation for pipelines of orchestrated function
//! invocations.
//!
//! Funcflow provides the unit of state threaded through successive steps of
//! a call chain:
//!
//! - **Variable scope**: an ordered, case-insensitive key/value store with a
//!   reserved `INPUT` slot carrying the primary value of the pipeline
//! - **Execution context**: one owned variable scope bound to a shared
//!   runtime handle, a read-only function-registry view, and a culture
//! - **Branching**: `Clone` on a context deep-copies the variable scope and
//!   shares the runtime handle and registry, so nested or parallel steps get
//!   isolated variable state over shared services
//!
//! ## Quick Start
//!
//! ```rust
//! use funcflow::prelude::*;
//! use std::sync::Arc;
//!
//! let mut ctx = ExecutionContext::new(Arc::new(NullRuntime));
//! ctx.variables_mut().set_input("hello");
//!
//! let mut branch = ctx.clone();
//! branch.variables_mut().set_input("world");
//!
//! assert_eq!(ctx.result(), "hello");
//! assert_eq!(branch.result(), "world");
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod context;
pub mod culture;
pub mod errors;
pub mod registry;
pub mod runtime;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::context::{
        ExecutionContext, ExecutionContextBuilder, VariableScope, INPUT_KEY,
    };
    pub use crate::culture::Culture;
    pub use crate::errors::{FuncflowError, InvalidKeyError};
    pub use crate::registry::{
        EmptyFunctionRegistry, FunctionCatalog, FunctionDescriptor, FunctionRegistryView,
    };
    pub use crate::runtime::{NullRuntime, RuntimeServices};
}

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        assert!(true);
    }
}

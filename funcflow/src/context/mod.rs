//! Context management for orchestrated function pipelines.
//!
//! This module provides:
//! - The ordered, case-insensitive variable scope threaded through steps
//! - The execution context binding one scope to shared runtime services,
//!   a read-only function-registry view, and a culture
//! - Branch isolation via `Clone`

#[cfg(test)]
mod context_tests;
mod execution;
mod variables;

pub use execution::{ExecutionContext, ExecutionContextBuilder};
pub use variables::{VariableScope, INPUT_KEY};

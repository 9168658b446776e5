//! Test utilities for code that consumes execution contexts.

mod mocks;

pub use mocks::MockRuntime;

//! The execution context handed to each step of an orchestrated pipeline.

use super::VariableScope;
use crate::culture::Culture;
use crate::errors::FuncflowError;
use crate::registry::{EmptyFunctionRegistry, FunctionRegistryView};
use crate::runtime::RuntimeServices;
use std::fmt;
use std::sync::Arc;

/// The unit of state threaded through a pipeline of function invocations.
///
/// A context owns one [`VariableScope`] exclusively and holds shared,
/// non-owning references to the runtime handle and a read-only view of the
/// function registry, plus a mutable culture. The registry binding never
/// changes after construction.
///
/// `Clone` is the single branching mechanism: the clone receives an
/// independent deep copy of the variable scope and shares the runtime
/// handle and registry with the original, so sibling branches cannot
/// observe each other's variable writes. A single context must not be
/// mutated from two steps running concurrently; give each branch its own
/// clone first.
pub struct ExecutionContext {
    /// The owned variable scope.
    variables: VariableScope,
    /// Read-only view of the function registry.
    functions: Arc<dyn FunctionRegistryView>,
    /// The shared runtime handle.
    runtime: Arc<dyn RuntimeServices>,
    /// Locale state for formatting-sensitive steps.
    culture: Culture,
}

impl ExecutionContext {
    /// Creates a context over a runtime handle with a fresh empty scope.
    ///
    /// The registry view is taken from the runtime handle when it supplies
    /// one, otherwise the always-miss [`EmptyFunctionRegistry`] is bound.
    /// The culture initializes from the ambient process locale.
    #[must_use]
    pub fn new(runtime: Arc<dyn RuntimeServices>) -> Self {
        let functions = runtime
            .function_registry()
            .unwrap_or_else(|| Arc::new(EmptyFunctionRegistry));
        Self {
            variables: VariableScope::new(),
            functions,
            runtime,
            culture: Culture::ambient(),
        }
    }

    /// Returns a builder for contexts needing a seeded scope or an explicit
    /// registry view.
    #[must_use]
    pub fn builder() -> ExecutionContextBuilder {
        ExecutionContextBuilder::default()
    }

    /// Returns the scope's primary value, the result of the pipeline stage.
    #[must_use]
    pub fn result(&self) -> &str {
        self.variables.input()
    }

    /// Returns the owned variable scope.
    #[must_use]
    pub fn variables(&self) -> &VariableScope {
        &self.variables
    }

    /// Returns the owned variable scope for mutation.
    pub fn variables_mut(&mut self) -> &mut VariableScope {
        &mut self.variables
    }

    /// Returns the read-only function-registry view.
    ///
    /// No mutation path exists through this accessor; registration lives
    /// with the registry's owner, outside the context.
    #[must_use]
    pub fn functions(&self) -> &Arc<dyn FunctionRegistryView> {
        &self.functions
    }

    /// Returns the shared runtime handle.
    #[must_use]
    pub fn runtime(&self) -> &Arc<dyn RuntimeServices> {
        &self.runtime
    }

    /// Returns the current culture.
    #[must_use]
    pub fn culture(&self) -> &Culture {
        &self.culture
    }

    /// Sets the culture.
    ///
    /// `None` substitutes the ambient process locale; the culture is never
    /// left unset.
    pub fn set_culture(&mut self, culture: Option<Culture>) {
        self.culture = culture.unwrap_or_else(Culture::ambient);
    }
}

impl Clone for ExecutionContext {
    /// Branches the context for a nested or parallel step.
    ///
    /// The clone gets a deep copy of the variable scope, the same registry
    /// view, and the current culture. The runtime handle is shared, unless
    /// the runtime supplies a narrowed handle for branches via
    /// [`RuntimeServices::narrowed`].
    fn clone(&self) -> Self {
        let runtime = self
            .runtime
            .narrowed()
            .unwrap_or_else(|| Arc::clone(&self.runtime));
        Self {
            variables: self.variables.clone(),
            functions: Arc::clone(&self.functions),
            runtime,
            culture: self.culture.clone(),
        }
    }
}

impl fmt::Display for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.result())
    }
}

impl fmt::Debug for ExecutionContext {
    /// Human-readable summary for inspection tooling only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("variables", &self.variables.to_map())
            .field("functions", &self.functions.len())
            .field("culture", &self.culture.name())
            .finish()
    }
}

/// Builder for [`ExecutionContext`].
///
/// The runtime handle is the one required binding; `build` fails without
/// it. The variable scope defaults to a fresh empty scope and the registry
/// view falls back to the runtime-supplied registry, then to the
/// always-miss default.
#[derive(Default)]
pub struct ExecutionContextBuilder {
    runtime: Option<Arc<dyn RuntimeServices>>,
    variables: Option<VariableScope>,
    functions: Option<Arc<dyn FunctionRegistryView>>,
}

impl ExecutionContextBuilder {
    /// Sets the required runtime handle.
    #[must_use]
    pub fn runtime(mut self, runtime: Arc<dyn RuntimeServices>) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Seeds the context with an existing variable scope.
    #[must_use]
    pub fn variables(mut self, variables: VariableScope) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Binds an explicit function-registry view.
    #[must_use]
    pub fn functions(mut self, functions: Arc<dyn FunctionRegistryView>) -> Self {
        self.functions = Some(functions);
        self
    }

    /// Builds the context.
    ///
    /// # Errors
    ///
    /// Returns [`FuncflowError::MissingRuntime`] if no runtime handle was
    /// provided.
    pub fn build(self) -> Result<ExecutionContext, FuncflowError> {
        let runtime = self.runtime.ok_or(FuncflowError::MissingRuntime)?;
        let functions = self
            .functions
            .or_else(|| runtime.function_registry())
            .unwrap_or_else(|| Arc::new(EmptyFunctionRegistry));
        Ok(ExecutionContext {
            variables: self.variables.unwrap_or_default(),
            functions,
            runtime,
            culture: Culture::ambient(),
        })
    }
}

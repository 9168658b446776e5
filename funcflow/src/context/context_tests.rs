//! Scenario tests for the context module.

#[cfg(test)]
mod tests {
    use crate::context::{ExecutionContext, VariableScope};
    use crate::registry::{FunctionCatalog, FunctionDescriptor, FunctionRegistryView};
    use crate::runtime::{NullRuntime, RuntimeServices};
    use crate::testing::MockRuntime;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn test_branching_scenario_shares_registry_and_isolates_variables() {
        let catalog = Arc::new(FunctionCatalog::new());
        catalog.register(FunctionDescriptor::new("text", "upper"));

        let runtime = Arc::new(MockRuntime::new().with_registry(catalog));
        let mut ctx = ExecutionContext::new(runtime);
        ctx.variables_mut().set_input("hello");

        let mut branch = ctx.clone();
        branch.variables_mut().set_input("world");

        assert_eq!(ctx.result(), "hello");
        assert_eq!(branch.result(), "world");
        assert!(Arc::ptr_eq(ctx.functions(), branch.functions()));
        assert!(Arc::ptr_eq(ctx.runtime(), branch.runtime()));
    }

    #[test]
    fn test_step_pipeline_threads_variables() {
        // An orchestrator seeds the scope, each step rewrites the primary
        // value, and the orchestrator reads the final result.
        let mut ctx = ExecutionContext::builder()
            .runtime(Arc::new(NullRuntime))
            .variables(VariableScope::with_input("seed"))
            .build()
            .unwrap();

        let upper = ctx.variables().input().to_uppercase();
        ctx.variables_mut().set_input(upper);
        ctx.variables_mut().set("step", "uppercase").unwrap();

        let doubled = format!("{0}{0}", ctx.variables().input());
        ctx.variables_mut().set_input(doubled);

        assert_eq!(ctx.result(), "SEEDSEED");
        assert_eq!(ctx.variables().get("STEP"), Some("uppercase"));
    }

    #[test]
    fn test_registry_identity_survives_nested_clones() {
        let catalog = Arc::new(FunctionCatalog::new());
        let runtime = Arc::new(MockRuntime::new().with_registry(catalog));

        let ctx = ExecutionContext::new(runtime);
        let child = ctx.clone();
        let grandchild = child.clone();

        assert!(Arc::ptr_eq(ctx.functions(), grandchild.functions()));
    }

    #[test]
    fn test_registration_after_binding_is_visible_to_all_clones() {
        // The registry is shared and mutated by its owner, never through a
        // context; late registrations show up in every context's view.
        let catalog = Arc::new(FunctionCatalog::new());
        let runtime = Arc::new(MockRuntime::new().with_registry(catalog.clone()));

        let ctx = ExecutionContext::new(runtime);
        let branch = ctx.clone();
        assert!(ctx.functions().is_empty());

        catalog.register(FunctionDescriptor::new("late", "arrival"));

        assert!(ctx.functions().contains("late", "arrival"));
        assert!(branch.functions().contains("late", "arrival"));
    }

    #[tokio::test]
    async fn test_concurrent_branches_do_not_observe_each_other() {
        let mut ctx = ExecutionContext::new(Arc::new(NullRuntime));
        ctx.variables_mut().set_input("root");

        let mut left = ctx.clone();
        let mut right = ctx.clone();

        let left_task = tokio::spawn(async move {
            left.variables_mut().set_input("left");
            left.variables_mut().set("side", "l").unwrap();
            left.result().to_string()
        });
        let right_task = tokio::spawn(async move {
            right.variables_mut().set_input("right");
            right.variables_mut().set("side", "r").unwrap();
            right.result().to_string()
        });

        let (left_result, right_result) =
            (left_task.await.unwrap(), right_task.await.unwrap());

        assert_eq!(left_result, "left");
        assert_eq!(right_result, "right");
        assert_eq!(ctx.result(), "root");
        assert_eq!(ctx.variables().get("side"), None);
    }

    #[test]
    fn test_scope_merge_carries_branch_results_back() {
        // Orchestrators that want branch output fold it back explicitly;
        // nothing flows back implicitly.
        let mut ctx = ExecutionContext::new(Arc::new(NullRuntime));
        ctx.variables_mut().set("shared", "base").unwrap();

        let mut branch = ctx.clone();
        branch.variables_mut().set("branch_out", "42").unwrap();

        assert_eq!(ctx.variables().get("branch_out"), None);

        let branch_scope = branch.variables().clone();
        ctx.variables_mut().merge(&branch_scope);

        assert_eq!(ctx.variables().get("branch_out"), Some("42"));
        assert_eq!(ctx.variables().get("shared"), Some("base"));
    }

    #[test]
    fn test_narrowed_handle_propagates_to_branch_only() {
        let narrowed: Arc<dyn RuntimeServices> = Arc::new(NullRuntime);
        let runtime = Arc::new(MockRuntime::new().with_narrowed(Arc::clone(&narrowed)));

        let ctx = ExecutionContext::new(runtime.clone());
        let branch = ctx.clone();

        assert!(Arc::ptr_eq(branch.runtime(), &narrowed));
        assert_eq!(runtime.narrow_calls(), 1);
    }
}

//! Property tests for compilation

use lambent_compiler::{CompileEnv, Compiler, ident};
use lambent_foundation::Form;
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9\\-?!<>=*+/]{0,8}"
}

proptest! {
    /// Every declared name compiles to a host-safe identifier.
    #[test]
    fn declared_names_are_host_safe(names in prop::collection::vec(name(), 1..8)) {
        let mut env = CompileEnv::new();
        for n in &names {
            let (next, id) = env.put(n, &Form::symbol(n.as_str())).unwrap();
            prop_assert!(ident::is_host_safe(&id), "{} -> {}", n, id);
            env = next;
        }
    }

    /// Nested bindings of one name never reuse a target identifier.
    #[test]
    fn nested_bindings_are_distinct(n in name(), depth in 1usize..10) {
        let mut env = CompileEnv::new();
        let mut seen = Vec::new();
        for _ in 0..depth {
            let (next, id) = env.put(&n, &Form::symbol(n.as_str())).unwrap();
            prop_assert!(!seen.contains(&id));
            seen.push(id);
            env = next;
        }
    }

    /// Compiling twice from fresh environments gives identical text.
    #[test]
    fn compilation_is_deterministic(names in prop::collection::vec(name(), 1..6)) {
        prop_assume!(names.iter().all(|n| !n.starts_with("unquote")));
        let source: String = names
            .iter()
            .map(|n| format!("(var {n} (fn ({n}) `({n} ,{n})))"))
            .collect::<Vec<_>>()
            .join("\n");
        let forms = lambent_language::read(&source).unwrap();
        let first = Compiler::new().compile(&forms, None).unwrap();
        let second = Compiler::new().compile(&forms, None).unwrap();
        prop_assert_eq!(first, second);
    }
}

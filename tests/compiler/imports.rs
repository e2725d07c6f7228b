//! Integration tests for import inlining

use std::collections::HashMap;

use futures::executor::block_on;
use futures::future::LocalBoxFuture;
use lambent_compiler::{CompileEnv, Compiler, ImportResolver};
use lambent_foundation::{Error, ErrorKind, Form, Result};
use lambent_language::read;

/// Answers from source text and counts every request.
#[derive(Default)]
struct Modules {
    sources: HashMap<&'static str, &'static str>,
    requests: Vec<String>,
}

impl Modules {
    fn with(mut self, name: &'static str, source: &'static str) -> Self {
        self.sources.insert(name, source);
        self
    }
}

impl ImportResolver for Modules {
    fn resolve<'a>(&'a mut self, name: &'a str) -> LocalBoxFuture<'a, Result<Vec<Form>>> {
        self.requests.push(name.to_string());
        let source = self.sources.get(name).copied();
        Box::pin(async move {
            let source = source.ok_or_else(|| Error::import(name, "no such module"))?;
            read(source)
        })
    }
}

fn compile(source: &str, modules: &mut Modules) -> Result<String> {
    let forms = read(source)?;
    let env = CompileEnv::with_globals(["print"]);
    block_on(Compiler::new().compile_with_imports(&forms, modules, Some(&env)))
}

#[test]
fn duplicate_imports_resolve_once() {
    let mut modules = Modules::default().with("a", "(var a 1)");
    let code = compile("(import \"a\") (import \"a\") (print a)", &mut modules).unwrap();
    assert_eq!(code, "var a = 1;\nprint(a);");
    assert_eq!(modules.requests, ["a"]);
}

#[test]
fn forms_are_spliced_at_first_import() {
    let mut modules = Modules::default().with("a", "(var a 1) (print a)");
    let code = compile("(print 0) (import \"a\") (print 2) (import \"a\")", &mut modules).unwrap();
    assert_eq!(code, "print(0);\nvar a = 1;\nprint(a);\nprint(2);");
}

#[test]
fn shared_dependency_resolved_once() {
    let mut modules = Modules::default()
        .with("base", "(var base 0)")
        .with("left", "(import \"base\") (var left base)")
        .with("right", "(import \"base\") (var right base)");
    let code = compile("(import \"left\" \"right\")", &mut modules).unwrap();
    assert_eq!(code, "var base = 0;\nvar left = base;\nvar right = base;");
    assert_eq!(modules.requests, ["left", "base", "right"]);
}

#[test]
fn imported_bindings_rename_like_local_ones() {
    let mut modules = Modules::default().with("a", "(var x 1)");
    let code = compile("(var x 0) (import \"a\") x", &mut modules).unwrap();
    assert_eq!(code, "var x = 0;\nvar x1 = 1;\nx1;");
}

#[test]
fn resolver_errors_propagate() {
    let mut modules = Modules::default();
    let err = compile("(import \"gone\")", &mut modules).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Import { ref module, .. } if module == "gone"));
}

#[test]
fn module_parse_errors_propagate() {
    let mut modules = Modules::default().with("broken", "(var x");
    let err = compile("(import \"broken\")", &mut modules).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Parse { .. }));
}

#[test]
fn programs_without_imports_match_sync_compile() {
    let source = "(var f (fn (a) `(,a ,@a))) (f (list 1))";
    let forms = read(source).unwrap();
    let sync = Compiler::new().compile(&forms, None).unwrap();
    let mut modules = Modules::default();
    let async_code = block_on(Compiler::new().compile_with_imports(&forms, &mut modules, None)).unwrap();
    assert_eq!(sync, async_code);
    assert!(modules.requests.is_empty());
}

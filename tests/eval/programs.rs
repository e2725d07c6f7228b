//! Integration tests for evaluating programs

use lambent_eval::{Environment, EvalConfig, Evaluator, Value, print};
use lambent_foundation::{ErrorKind, Result, SemanticLimit};
use lambent_language::read;

fn run(source: &str) -> Result<Option<Value>> {
    let forms = read(source)?;
    Ok(Evaluator::new().evaluate(&forms, None)?.value)
}

fn show(source: &str) -> String {
    print(&run(source).unwrap().unwrap())
}

fn kind(source: &str) -> ErrorKind {
    run(source).unwrap_err().kind
}

// =============================================================================
// Bindings
// =============================================================================

#[test]
fn empty_program_has_no_value() {
    assert_eq!(run("").unwrap(), None);
}

#[test]
fn var_evaluates_to_its_value() {
    assert_eq!(show("(var x 5)"), "5");
    assert_eq!(show("(var x 5) x"), "5");
}

#[test]
fn closures_see_later_assignment() {
    assert_eq!(
        show("(var n 1) (var get (fn () n)) (set! n 2) (get)"),
        "2"
    );
}

#[test]
fn shadowing_var_does_not_touch_captured_cell() {
    assert_eq!(
        show("(var n 1) (var get (fn () n)) (var n 2) (list (get) n)"),
        "[1 2]"
    );
}

#[test]
fn recursive_definition() {
    assert_eq!(
        show("(var walk (fn (xs) (if xs (walk #f) 'done))) (walk 1)"),
        "done"
    );
}

#[test]
fn environment_carries_across_calls() {
    let mut evaluator = Evaluator::new();
    let first = evaluator.evaluate(&read("(var x 'a)").unwrap(), None).unwrap();
    let second = evaluator
        .evaluate(&read("(list x x)").unwrap(), Some(&first.env))
        .unwrap();
    assert_eq!(print(&second.value.unwrap()), "[a a]");
}

#[test]
fn host_bindings() {
    let mut evaluator = Evaluator::new();
    let env = evaluator
        .bind(&Environment::new(), "greeting", Value::string("hi"))
        .unwrap();
    let result = evaluator
        .evaluate(&read("(list greeting)").unwrap(), Some(&env))
        .unwrap();
    assert_eq!(print(&result.value.unwrap()), "[\"hi\"]");
    assert_eq!(evaluator.get(&env, "greeting"), Some(&Value::string("hi")));
}

// =============================================================================
// Conditionals
// =============================================================================

#[test]
fn falsy_values() {
    for falsy in ["0", "\"\"", "#f"] {
        assert_eq!(show(&format!("(if {falsy} 'yes 'no)")), "no", "{falsy}");
    }
}

#[test]
fn truthy_values() {
    for truthy in ["1", "\"0\"", "#t", "'()", "'a", "(fn () 1)"] {
        assert_eq!(show(&format!("(if {truthy} 'yes 'no)")), "yes", "{truthy}");
    }
}

#[test]
fn only_chosen_branch_runs() {
    assert_eq!(show("(if #t 1 undefined-name)"), "1");
}

// =============================================================================
// Functions
// =============================================================================

#[test]
fn variadic_collects_arguments() {
    assert_eq!(show("((fn xs xs) 1 'b \"c\")"), "[1 b \"c\"]");
    assert_eq!(show("((fn xs xs))"), "[]");
}

#[test]
fn fixed_arity_is_exact() {
    assert_eq!(
        kind("((fn (a b) a) 1)"),
        ErrorKind::ArityMismatch {
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn non_function_application() {
    assert!(matches!(kind("(1 2)"), ErrorKind::Type(_)));
    assert!(matches!(kind("('f 2)"), ErrorKind::Type(_)));
}

#[test]
fn deep_recursion_hits_limit() {
    let forms = read("(var loop (fn () (loop))) (loop)").unwrap();
    let mut evaluator = Evaluator::with_config(EvalConfig::new().with_max_depth(32));
    let err = evaluator.evaluate(&forms, None).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::LimitExceeded(SemanticLimit::MaxDepth { limit: 32 })
    );
}

#[test]
fn default_limit_catches_recursion_through_branches() {
    let limit = ErrorKind::LimitExceeded(SemanticLimit::MaxDepth {
        limit: EvalConfig::default().max_depth,
    });
    assert_eq!(kind("(var loop (fn () (if #t (loop) 0))) (loop)"), limit);
    assert_eq!(
        kind("(var id (fn (x) x)) (var loop (fn () (id (id (id (loop)))))) (loop)"),
        limit
    );
}

// =============================================================================
// Templates
// =============================================================================

#[test]
fn quasiquote_rebuilds() {
    assert_eq!(show("(var x 1) `(a ,x (b ,x))"), "[a 1 [b 1]]");
}

#[test]
fn splicing() {
    assert_eq!(show("(var xs '(1 2)) `(0 ,@xs 3 ,@xs)"), "[0 1 2 3 1 2]");
    assert_eq!(show("`(,@'())"), "[]");
}

#[test]
fn splicing_requires_list() {
    assert!(matches!(kind("`(,@5)"), ErrorKind::Type(_)));
}

#[test]
fn quote_keeps_nested_quasiquote_as_data() {
    assert_eq!(show("''a"), "'a");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn undefined_identifier() {
    assert_eq!(kind("nope"), ErrorKind::UndefinedIdentifier("nope".into()));
}

#[test]
fn use_before_initialization() {
    assert_eq!(kind("(var x x)"), ErrorKind::Uninitialized("x".into()));
}

#[test]
fn errors_stop_the_program() {
    let mut evaluator = Evaluator::new();
    let forms = read("(var a 1) (missing) (var b 2)").unwrap();
    assert!(evaluator.evaluate(&forms, None).is_err());
}

#[test]
fn host_forms_are_scope_errors() {
    assert!(matches!(kind("(obj (a 1))"), ErrorKind::Scope(_)));
    assert!(matches!(kind("(import \"a\")"), ErrorKind::Scope(_)));
}

// =============================================================================
// Reference programs
// =============================================================================

#[test]
fn assignment_round_trip() {
    assert_eq!(show("(var a 500) a"), "500");
    assert_eq!(show("(var a 500) (set! a 1) a"), "1");
}

#[test]
fn reference_conditionals() {
    assert_eq!(show("(if 0 1 2)"), "2");
    assert_eq!(show("(if '() 1 2)"), "1");
    assert_eq!(show("(if (fn () 4) 1 2)"), "1");
}

#[test]
fn identity_arity() {
    assert_eq!(show("((fn (x) x) \"v\")"), "\"v\"");
    for call in ["((fn (x) x))", "((fn (x) x) 1 2)"] {
        assert!(
            matches!(kind(call), ErrorKind::ArityMismatch { expected: 1, .. }),
            "{call}"
        );
    }
}

#[test]
fn reference_splices() {
    assert_eq!(show("`(1 ,@'(2 3) 4)"), "[1 2 3 4]");
    assert_eq!(show("`(,@'(5))"), "[5]");
}

//! Integration tests for the special-form validator

use lambent_foundation::{ErrorKind, Form};
use lambent_language::{read_one, syntax};

fn check(source: &str) -> Result<(), String> {
    let form = read_one(source).unwrap();
    let (special, args) = form.special_form().unwrap();
    syntax::check(special, args, &form).map_err(|e| match e.kind {
        ErrorKind::Syntax(message) => message,
        other => panic!("expected syntax error, got {other:?}"),
    })
}

#[test]
fn well_formed() {
    for source in [
        "(var x 1)",
        "(fn (a b) a)",
        "(fn rest rest)",
        "(fn () 1 2)",
        "(set! x 2)",
        "(set! (. o \"k\") 2)",
        "(set! (.k o) 2)",
        "(if a b c)",
        "(quote (a b))",
        "(. o \"k\")",
        "(obj (a 1) (b 2))",
        "(list)",
        "(import \"a\" \"b\")",
        "(define-syntax m (syntax-rules () ((_ a) a)))",
    ] {
        assert_eq!(check(source), Ok(()), "{source}");
    }
}

#[test]
fn var_messages() {
    assert_eq!(check("(var)").unwrap_err(), "var: bad syntax - empty expression");
    assert_eq!(check("(var x)").unwrap_err(), "var: no value specified");
    assert_eq!(check("(var x 1 2)").unwrap_err(), "var: expects 2 arguments");
    assert_eq!(check("(var 1 2)").unwrap_err(), "var: invalid identifier");
    assert_eq!(check("(var .x 2)").unwrap_err(), "var: invalid identifier");
}

#[test]
fn fn_messages() {
    assert_eq!(check("(fn (a))").unwrap_err(), "fn: no body specified");
    assert_eq!(check("(fn (a 1) a)").unwrap_err(), "fn: invalid argument identifier");
}

#[test]
fn if_messages() {
    assert_eq!(check("(if a b)").unwrap_err(), "if: no else clause");
    assert_eq!(check("(if a b c d)").unwrap_err(), "if: too many arguments");
}

#[test]
fn set_assignee() {
    assert_eq!(check("(set! (f x) 1)").unwrap_err(), "set!: invalid assignee");
}

#[test]
fn import_names() {
    assert_eq!(
        check("(import a)").unwrap_err(),
        "import: invalid import name, should be a string"
    );
    assert_eq!(
        check("(import \"\")").unwrap_err(),
        "import: invalid import name, empty string"
    );
}

#[test]
fn property_forms() {
    assert!(syntax::is_property_form(&read_one("(. o \"k\")").unwrap()));
    assert!(syntax::is_property_form(&read_one("(.k o)").unwrap()));
    assert!(!syntax::is_property_form(&read_one("(.k o 1)").unwrap()));
    assert!(!syntax::is_property_form(&Form::symbol("o")));
}

//! Integration tests for Error types
//!
//! Tests error construction, display, and error kinds.

use lambent_foundation::{Error, ErrorKind, Form, SemanticLimit};

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_appends_form() {
    let form = Form::list(vec![Form::symbol("f"), Form::number(1.0)]);
    let err = Error::undefined_identifier("f", &form);
    assert_eq!(err.to_string(), "Undefined identifier 'f' @ (f 1)");
}

#[test]
fn display_without_form() {
    let err = Error::import("util", "not found");
    assert_eq!(err.to_string(), "import 'util' failed: not found");
}

#[test]
fn arity_mismatch_message() {
    let form = Form::list(vec![Form::symbol("g")]);
    let err = Error::arity_mismatch(2, 0, &form);
    assert_eq!(
        err.kind,
        ErrorKind::ArityMismatch {
            expected: 2,
            actual: 0
        }
    );
    assert_eq!(
        err.to_string(),
        "Argument count mismatch (expected 2, received 0) @ (g)"
    );
}

#[test]
fn limit_message() {
    let err = Error::limit_exceeded(SemanticLimit::MaxDepth { limit: 8 });
    assert_eq!(err.to_string(), "limit exceeded: max depth (8) exceeded");
}

#[test]
fn parse_error_carries_position() {
    let err = Error::parse("unterminated string", 3, 7, "(f \"abc");
    let ErrorKind::Parse {
        line,
        column,
        context,
        ..
    } = &err.kind
    else {
        panic!("expected parse error, got {err:?}");
    };
    assert_eq!((*line, *column), (3, 7));
    assert_eq!(context, "(f \"abc");
    assert!(err.to_string().starts_with("parse error at 3:7"));
}

#[test]
fn at_replaces_form() {
    let err = Error::internal("boom").at(&Form::symbol("x"));
    assert_eq!(err.form.as_deref(), Some("x"));
}

#[test]
fn unsupported_character_message() {
    let err = Error::unsupported_character('#', &Form::symbol("a#"));
    assert_eq!(err.to_string(), "Unsupported identifier character '#' @ a#");
}

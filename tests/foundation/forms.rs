//! Integration tests for forms and printing

use lambent_foundation::{Form, Literal, SpecialForm, format_number, print_raw_forms, quote_string};

// =============================================================================
// Special-form tags
// =============================================================================

#[test]
fn symbols_resolve_special_tags() {
    for special in SpecialForm::ALL {
        let form = Form::symbol(special.name());
        assert_eq!(form.as_symbol().unwrap().special(), Some(special));
    }
    assert_eq!(Form::symbol("define").as_symbol().unwrap().special(), None);
}

#[test]
fn wrap_builds_special_form() {
    let quoted = Form::wrap(SpecialForm::Quote, Form::symbol("a"));
    let (special, args) = quoted.special_form().unwrap();
    assert_eq!(special, SpecialForm::Quote);
    assert_eq!(args, [Form::symbol("a")]);
    assert!(quoted.is_form(SpecialForm::Quote));
    assert!(!quoted.is_form(SpecialForm::Quasiquote));
}

#[test]
fn property_symbols() {
    let form = Form::symbol(".length");
    let symbol = form.as_symbol().unwrap();
    assert!(symbol.is_property());
    assert_eq!(symbol.property_key(), Some("length"));
    assert_eq!(Form::symbol("length").as_symbol().unwrap().property_key(), None);
}

// =============================================================================
// Truthiness
// =============================================================================

#[test]
fn literal_truthiness() {
    assert!(!Literal::Number(0.0).is_truthy());
    assert!(!Literal::Number(-0.0).is_truthy());
    assert!(!Literal::Number(f64::NAN).is_truthy());
    assert!(!Literal::String("".into()).is_truthy());
    assert!(!Literal::Bool(false).is_truthy());
    assert!(Literal::Number(0.5).is_truthy());
    assert!(Literal::String("0".into()).is_truthy());
    assert!(Literal::Bool(true).is_truthy());
}

// =============================================================================
// Printing
// =============================================================================

#[test]
fn numbers_print_like_host() {
    assert_eq!(format_number(3.0), "3");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(0.25), "0.25");
    assert_eq!(format_number(f64::INFINITY), "Infinity");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    assert_eq!(format_number(f64::NAN), "NaN");
}

#[test]
fn strings_escape() {
    assert_eq!(quote_string("plain"), "\"plain\"");
    assert_eq!(quote_string("a\"b\\c"), r#""a\"b\\c""#);
    assert_eq!(quote_string("line\nnext\ttab"), r#""line\nnext\ttab""#);
}

#[test]
fn forms_print_as_source() {
    let forms = vec![
        Form::list(vec![
            Form::symbol("var"),
            Form::symbol("x"),
            Form::list(vec![Form::symbol("list"), Form::boolean(true), Form::string("s")]),
        ]),
        Form::list(vec![]),
    ];
    assert_eq!(print_raw_forms(&forms), "(var x (list #t \"s\")) ()");
}

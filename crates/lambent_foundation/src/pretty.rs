//! Raw-form printer.
//!
//! Renders forms back to source text. Error messages embed this rendering
//! so callers can show the offending form verbatim.
//!
//! # Example
//!
//! ```
//! use lambent_foundation::{Form, print_raw_form};
//!
//! let form = Form::list(vec![Form::symbol("f"), Form::number(1.0), Form::string("a")]);
//! assert_eq!(print_raw_form(&form), r#"(f 1 "a")"#);
//! ```

use std::fmt::Write;

use crate::form::{Form, Literal};

/// Renders a form as source text.
#[must_use]
pub fn print_raw_form(form: &Form) -> String {
    let mut output = String::new();
    write_form(&mut output, form);
    output
}

/// Renders several forms, space separated.
#[must_use]
pub fn print_raw_forms(forms: &[Form]) -> String {
    forms.iter().map(print_raw_form).collect::<Vec<_>>().join(" ")
}

fn write_form(output: &mut String, form: &Form) {
    match form {
        Form::Literal(Literal::Number(n)) => output.push_str(&format_number(*n)),
        Form::Literal(Literal::String(s)) => output.push_str(&quote_string(s)),
        Form::Literal(Literal::Bool(true)) => output.push_str("#t"),
        Form::Literal(Literal::Bool(false)) => output.push_str("#f"),
        Form::Symbol(s) => output.push_str(s.name()),
        Form::List(items) => {
            output.push('(');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    output.push(' ');
                }
                write_form(output, item);
            }
            output.push(')');
        }
    }
}

/// Formats a number the way the host prints it: integral values have no
/// fractional part, non-finite values use host spelling.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        // -0 prints as 0 on the host
        "0".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

/// Double-quotes a string, escaping it so both the reader and the host
/// accept it.
#[must_use]
pub fn quote_string(s: &str) -> String {
    let mut output = String::with_capacity(s.len() + 2);
    output.push('"');
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            '\u{2028}' | '\u{2029}' => {
                let _ = write!(output, "\\u{:04X}", c as u32);
            }
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFFFF {
                    let _ = write!(output, "\\u{code:04X}");
                } else {
                    let _ = write!(output, "\\u{{{code:X}}}");
                }
            }
            c => output.push(c),
        }
    }
    output.push('"');
    output
}

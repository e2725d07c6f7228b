//! Value printer.
//!
//! Lists print in brackets so they are distinguishable from source forms;
//! `(quote x)` and `(unquote x)` keep their prefix sugar.

use lambent_foundation::SpecialForm;

use crate::value::{Params, Value};

/// Renders a value for display.
///
/// # Example
///
/// ```
/// use lambent_eval::{Value, print};
///
/// let v = Value::List(vec![Value::number(1.0), Value::string("a"), Value::boolean(true)]);
/// assert_eq!(print(&v), r#"[1 "a" #t]"#);
/// ```
#[must_use]
pub fn print(value: &Value) -> String {
    let mut output = String::new();
    write_value(&mut output, value);
    output
}

fn write_value(output: &mut String, value: &Value) {
    match value {
        Value::Literal(l) => output.push_str(&l.to_string()),
        Value::Symbol(s) => output.push_str(s.name()),
        Value::Func(closure) => match &closure.params {
            Params::Fixed(names) => {
                output.push_str("(fn (");
                output.push_str(&names.join(" "));
                output.push_str(") ...)");
            }
            Params::Rest(name) => {
                output.push_str("(fn ");
                output.push_str(name);
                output.push_str(" ...)");
            }
        },
        Value::List(items) => {
            if let Some((prefix, inner)) = sugar(items) {
                output.push(prefix);
                write_value(output, inner);
                return;
            }
            output.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    output.push(' ');
                }
                write_value(output, item);
            }
            output.push(']');
        }
    }
}

fn sugar(items: &[Value]) -> Option<(char, &Value)> {
    let [Value::Symbol(head), inner] = items else {
        return None;
    };
    match head.special()? {
        SpecialForm::Quote => Some(('\'', inner)),
        SpecialForm::Unquote => Some((',', inner)),
        _ => None,
    }
}

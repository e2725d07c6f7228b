//! Quoted-symbol detection.
//!
//! Quoted symbols compile to calls into an interning table that must be
//! defined once, ahead of the program. The scan decides whether it is
//! needed.

use lambent_foundation::{Form, SpecialForm};

/// Target name of the interning function.
pub const SYMBOL_TABLE_NAME: &str = "symbol";

/// Definition of the interning function. Equal names intern to the same
/// object, which prints as its name.
pub const SYMBOL_TABLE_PRELUDE: &str = "var symbol = (function () { var table = {}; \
return function (id) { return table.hasOwnProperty(id) ? table[id] : \
table[id] = { toString: function () { return id; } }; }; }());";

#[derive(Clone, Copy)]
enum Context {
    Code,
    Quote,
    Quasiquote,
}

/// True if any form contains a symbol in quoted context.
#[must_use]
pub fn needs_symbol_table(forms: &[Form]) -> bool {
    forms.iter().any(|form| scan(form, Context::Code))
}

fn scan(form: &Form, context: Context) -> bool {
    match context {
        Context::Code => match form.special_form() {
            Some((SpecialForm::Quote, [datum])) => scan(datum, Context::Quote),
            Some((SpecialForm::Quasiquote, [template])) => scan(template, Context::Quasiquote),
            _ => any_item(form, Context::Code),
        },
        Context::Quote => form.as_symbol().is_some() || any_item(form, Context::Quote),
        Context::Quasiquote => match form.special_form() {
            Some((SpecialForm::Unquote | SpecialForm::UnquoteSplicing, args)) => {
                args.iter().any(|arg| scan(arg, Context::Code))
            }
            _ => form.as_symbol().is_some() || any_item(form, Context::Quasiquote),
        },
    }
}

fn any_item(form: &Form, context: Context) -> bool {
    form.as_list()
        .is_some_and(|items| items.iter().any(|item| scan(item, context)))
}

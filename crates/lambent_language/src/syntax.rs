//! Surface-syntax checks for special forms.
//!
//! Each check receives the arguments after the keyword and the whole form
//! (for diagnostics). Both engines call [`check`] when they dispatch on a
//! special form, before doing anything else with it.

use lambent_foundation::{Error, Form, Literal, Result, SpecialForm};

/// Validates a special form.
///
/// # Errors
/// Returns a syntax error naming the construct and the offending sub-form.
pub fn check(special: SpecialForm, args: &[Form], form: &Form) -> Result<()> {
    match special {
        SpecialForm::Var => check_var(args, form),
        SpecialForm::Fn => check_fn(args, form),
        SpecialForm::Set => check_set(args, form),
        SpecialForm::If => check_if(args, form),
        SpecialForm::Quote
        | SpecialForm::Quasiquote
        | SpecialForm::Unquote
        | SpecialForm::UnquoteSplicing => check_quote_like(special, args, form),
        SpecialForm::Dot => check_dot(args, form),
        SpecialForm::Obj => check_obj(args),
        SpecialForm::Import => check_import(args, form),
        SpecialForm::List => Ok(()),
        SpecialForm::DefineSyntax => check_define_syntax(args, form),
        SpecialForm::SyntaxRules => check_syntax_rules(args, form),
    }
}

/// True for a symbol that does not start with `.`.
#[must_use]
pub fn is_standard_id(form: &Form) -> bool {
    form.as_symbol().is_some_and(|s| !s.is_property())
}

/// True for `(. target key)` or `(.key target)`.
#[must_use]
pub fn is_property_form(form: &Form) -> bool {
    let Some(items) = form.as_list() else {
        return false;
    };
    match items.first().and_then(Form::as_symbol) {
        Some(head) if head.special() == Some(SpecialForm::Dot) => items.len() == 3,
        Some(head) => head.property_key().is_some() && items.len() == 2,
        None => false,
    }
}

/// Validates a `(.name target args...)` method or property access.
///
/// # Errors
/// Returns a syntax error when no target follows the accessor.
pub fn check_property_call(args: &[Form], form: &Form) -> Result<()> {
    if args.is_empty() {
        return Err(Error::syntax("property access: no target specified", form));
    }
    Ok(())
}

fn check_var(args: &[Form], form: &Form) -> Result<()> {
    match args.len() {
        0 => return Err(Error::syntax("var: bad syntax - empty expression", form)),
        1 => return Err(Error::syntax("var: no value specified", form)),
        2 => {}
        _ => return Err(Error::syntax("var: expects 2 arguments", form)),
    }
    if !is_standard_id(&args[0]) {
        return Err(Error::syntax("var: invalid identifier", &args[0]));
    }
    Ok(())
}

fn check_fn(args: &[Form], form: &Form) -> Result<()> {
    match args.len() {
        0 => return Err(Error::syntax("fn: empty expression", form)),
        1 => return Err(Error::syntax("fn: no body specified", form)),
        _ => {}
    }
    match &args[0] {
        Form::List(params) => {
            if let Some(bad) = params.iter().find(|p| !is_standard_id(p)) {
                return Err(Error::syntax("fn: invalid argument identifier", bad));
            }
        }
        rest if !is_standard_id(rest) => {
            return Err(Error::syntax("fn: invalid argument identifier", rest));
        }
        _ => {}
    }
    Ok(())
}

fn check_set(args: &[Form], form: &Form) -> Result<()> {
    match args.len() {
        0 => return Err(Error::syntax("set!: empty expression", form)),
        1 => return Err(Error::syntax("set!: no value specified", form)),
        2 => {}
        _ => return Err(Error::syntax("set!: too many arguments", form)),
    }
    if !is_standard_id(&args[0]) && !is_property_form(&args[0]) {
        return Err(Error::syntax("set!: invalid assignee", &args[0]));
    }
    Ok(())
}

fn check_if(args: &[Form], form: &Form) -> Result<()> {
    match args.len() {
        0 => Err(Error::syntax("if: empty expression", form)),
        1 => Err(Error::syntax("if: no then and else clauses", form)),
        2 => Err(Error::syntax("if: no else clause", form)),
        3 => Ok(()),
        _ => Err(Error::syntax("if: too many arguments", form)),
    }
}

fn check_quote_like(special: SpecialForm, args: &[Form], form: &Form) -> Result<()> {
    match args.len() {
        0 => Err(Error::syntax(format!("{special}: empty expression"), form)),
        1 => Ok(()),
        _ => Err(Error::syntax(format!("{special}: too many arguments"), form)),
    }
}

fn check_dot(args: &[Form], form: &Form) -> Result<()> {
    match args.len() {
        0 => Err(Error::syntax(".: empty expression", form)),
        1 => Err(Error::syntax(".: no property value specified", form)),
        2 => Ok(()),
        _ => Err(Error::syntax(".: too many arguments", form)),
    }
}

fn check_obj(args: &[Form]) -> Result<()> {
    for entry in args {
        let Some([key, _]) = entry.as_list() else {
            return Err(Error::syntax("obj: entry is not a pair", entry));
        };
        if key.as_symbol().is_none() {
            return Err(Error::syntax("obj: entry key is not a symbol", key));
        }
    }
    Ok(())
}

fn check_import(args: &[Form], form: &Form) -> Result<()> {
    if args.is_empty() {
        return Err(Error::syntax("import: bad syntax - empty expression", form));
    }
    for name in args {
        match name.as_literal() {
            Some(Literal::String(s)) if s.is_empty() => {
                return Err(Error::syntax("import: invalid import name, empty string", name));
            }
            Some(Literal::String(_)) => {}
            _ => {
                return Err(Error::syntax(
                    "import: invalid import name, should be a string",
                    name,
                ));
            }
        }
    }
    Ok(())
}

fn check_define_syntax(args: &[Form], form: &Form) -> Result<()> {
    match args.len() {
        0 => return Err(Error::syntax("define-syntax: empty expression", form)),
        1 => {
            return Err(Error::syntax(
                "define-syntax: missing transformer definition",
                form,
            ));
        }
        2 => {}
        _ => return Err(Error::syntax("define-syntax: too many arguments", form)),
    }
    if args[0].as_symbol().is_none() {
        return Err(Error::syntax(
            "define-syntax: macro identifier must be a symbol",
            &args[0],
        ));
    }
    let Some((SpecialForm::SyntaxRules, rules_args)) = args[1].special_form() else {
        return Err(Error::syntax(
            "define-syntax: transformer should be a `syntax-rules` form",
            &args[1],
        ));
    };
    check_syntax_rules(rules_args, &args[1])
}

fn check_syntax_rules(args: &[Form], form: &Form) -> Result<()> {
    let Some((reserved, rules)) = args.split_first() else {
        return Err(Error::syntax("syntax-rules: empty expression", form));
    };
    if rules.is_empty() {
        return Err(Error::syntax(
            "syntax-rules: missing pattern and template definitions",
            form,
        ));
    }
    let Some(reserved_items) = reserved.as_list() else {
        return Err(Error::syntax(
            "syntax-rules: invalid reserved symbol list",
            reserved,
        ));
    };
    if let Some(bad) = reserved_items.iter().find(|r| r.as_symbol().is_none()) {
        return Err(Error::syntax("syntax-rules: invalid reserved symbol", bad));
    }
    rules.iter().try_for_each(check_rule)
}

fn check_rule(rule: &Form) -> Result<()> {
    let Some(parts) = rule.as_list() else {
        return Err(Error::syntax("syntax-rules: invalid rule", rule));
    };
    match parts.len() {
        0 => return Err(Error::syntax("syntax-rules: empty rule", rule)),
        1 => {
            return Err(Error::syntax(
                "syntax-rules: rule missing template definition",
                rule,
            ));
        }
        2 => {}
        _ => {
            return Err(Error::syntax(
                "syntax-rules: rule has too many arguments",
                rule,
            ));
        }
    }
    let pattern = &parts[0];
    let Some(pattern_items) = pattern.as_list() else {
        return Err(Error::syntax(
            "syntax-rules: pattern should be a list expression",
            pattern,
        ));
    };
    if pattern_items.first().and_then(Form::as_symbol).is_none() {
        return Err(Error::syntax(
            "syntax-rules: pattern should start with an identifier",
            pattern,
        ));
    }
    Ok(())
}

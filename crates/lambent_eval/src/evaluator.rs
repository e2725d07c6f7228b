//! Tree-walking evaluator.
//!
//! Every step takes an environment and hands back the (possibly extended)
//! environment along with its value, so bindings made by `var` thread left
//! to right through a program, an argument list or a quasiquote template.

use std::sync::Arc;

use lambent_foundation::{Error, Form, MAX_NESTING, Result, SemanticLimit, SpecialForm, Symbol};
use lambent_language::syntax;
use tracing::{debug, trace};

use crate::config::EvalConfig;
use crate::env::Environment;
use crate::store::Store;
use crate::value::{Closure, Params, Value};

/// Result of evaluating a program.
#[derive(Clone, Debug)]
pub struct Evaluation {
    /// Value of the last form; `None` for an empty program.
    pub value: Option<Value>,
    /// Environment after the last form, for evaluating more forms later.
    pub env: Environment,
}

/// Evaluates forms against environments whose cells it owns.
///
/// Environments returned by one evaluator are only meaningful to that same
/// evaluator.
#[derive(Debug, Default)]
pub struct Evaluator {
    store: Store,
    config: EvalConfig,
    depth: usize,
}

type Step = (Value, Environment);

impl Evaluator {
    /// Creates an evaluator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator with a custom configuration.
    #[must_use]
    pub fn with_config(config: EvalConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Returns the cell store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Evaluates `forms` in order, starting from `env` (or an empty
    /// environment).
    ///
    /// # Errors
    /// Returns the first error raised; nothing after it is evaluated. A form
    /// nested deeper than [`MAX_NESTING`] is rejected before it runs.
    pub fn evaluate(&mut self, forms: &[Form], env: Option<&Environment>) -> Result<Evaluation> {
        debug!(forms = forms.len(), "evaluating program");
        self.depth = 0;
        let mut env = env.cloned().unwrap_or_default();
        let mut value = None;
        for form in forms {
            form.check_nesting(MAX_NESTING)?;
            let (v, next) = self.eval(form, env)?;
            value = Some(v);
            env = next;
        }
        Ok(Evaluation { value, env })
    }

    /// Binds `name` to `value` in a fresh cell, returning the extended
    /// environment.
    ///
    /// # Errors
    /// Returns an internal error if the cell store is exhausted.
    pub fn bind(&mut self, env: &Environment, name: &str, value: Value) -> Result<Environment> {
        let cell = self.store.alloc(Some(value))?;
        Ok(env.extend(name.into(), cell))
    }

    /// Reads the current value of `name`, if it is bound and assigned.
    #[must_use]
    pub fn get(&self, env: &Environment, name: &str) -> Option<&Value> {
        let cell = env.lookup(name)?;
        self.store.get(cell).ok().flatten()
    }

    /// Every nested form costs one unit of depth, whether it is an
    /// application, a branch or an argument.
    fn eval(&mut self, form: &Form, env: Environment) -> Result<Step> {
        self.enter(form)?;
        let result = self.eval_form(form, env);
        self.depth -= 1;
        result
    }

    fn enter(&mut self, form: &Form) -> Result<()> {
        if self.depth >= self.config.max_depth {
            return Err(Error::limit_exceeded(SemanticLimit::MaxDepth {
                limit: self.config.max_depth,
            })
            .at(form));
        }
        self.depth += 1;
        Ok(())
    }

    fn eval_form(&mut self, form: &Form, env: Environment) -> Result<Step> {
        match form {
            Form::Literal(l) => Ok((Value::Literal(l.clone()), env)),
            Form::Symbol(s) => {
                let value = self.lookup(&env, s, form)?;
                Ok((value, env))
            }
            Form::List(items) => {
                let Some((head, args)) = items.split_first() else {
                    return Err(Error::empty_application(form));
                };
                if let Some(symbol) = head.as_symbol() {
                    if let Some(special) = symbol.special() {
                        syntax::check(special, args, form)?;
                        return self.eval_special(special, args, form, env);
                    }
                    if symbol.property_key().is_some() {
                        syntax::check_property_call(args, form)?;
                        return Err(Error::scope(
                            format!("{symbol}: host objects are not available here"),
                            form,
                        ));
                    }
                }
                self.eval_apply(head, args, form, env)
            }
        }
    }

    fn lookup(&self, env: &Environment, symbol: &Symbol, form: &Form) -> Result<Value> {
        let Some(cell) = env.lookup(symbol.name()) else {
            return Err(Error::undefined_identifier(symbol.name(), form));
        };
        match self.store.get(cell)? {
            Some(value) => Ok(value.clone()),
            None => Err(Error::uninitialized(symbol.name(), form)),
        }
    }

    fn eval_special(
        &mut self,
        special: SpecialForm,
        args: &[Form],
        form: &Form,
        env: Environment,
    ) -> Result<Step> {
        match special {
            SpecialForm::Var => self.eval_var(args, form, env),
            SpecialForm::Fn => Ok((Self::eval_fn(args, form, &env)?, env)),
            SpecialForm::Set => self.eval_set(args, form, env),
            SpecialForm::If => {
                let (test, env) = self.eval(&args[0], env)?;
                let branch = if test.is_truthy() { &args[1] } else { &args[2] };
                self.eval(branch, env)
            }
            SpecialForm::Quote => Ok((Value::from_form(&args[0]), env)),
            SpecialForm::Quasiquote => self.eval_template(&args[0], env),
            SpecialForm::List => {
                let (items, env) = self.eval_each(args, env)?;
                Ok((Value::List(items), env))
            }
            SpecialForm::Unquote | SpecialForm::UnquoteSplicing => Err(Error::scope(
                format!("{special}: not in quasiquote"),
                form,
            )),
            SpecialForm::Import => Err(Error::scope("import: not valid here", form)),
            SpecialForm::Dot | SpecialForm::Obj => Err(Error::scope(
                format!("{special}: host objects are not available here"),
                form,
            )),
            SpecialForm::DefineSyntax | SpecialForm::SyntaxRules => Err(Error::scope(
                format!("{special}: macros must be expanded before evaluation"),
                form,
            )),
        }
    }

    /// The cell is bound before the initializer runs, so the initializer can
    /// close over it; reading it early is an `Uninitialized` error.
    fn eval_var(&mut self, args: &[Form], form: &Form, env: Environment) -> Result<Step> {
        let name = standard_id(&args[0], form)?;
        let cell = self.store.alloc(None)?;
        let env = env.extend(Arc::clone(name.name_arc()), cell);
        let (value, env) = self.eval(&args[1], env)?;
        self.store.set(cell, value.clone())?;
        Ok((value, env))
    }

    fn eval_fn(args: &[Form], form: &Form, env: &Environment) -> Result<Value> {
        let params = match &args[0] {
            Form::List(names) => Params::Fixed(
                names
                    .iter()
                    .map(|n| standard_id(n, form).map(|s| Arc::clone(s.name_arc())))
                    .collect::<Result<_>>()?,
            ),
            rest => Params::Rest(Arc::clone(standard_id(rest, form)?.name_arc())),
        };
        Ok(Value::Func(Arc::new(Closure {
            params,
            body: args[1..].to_vec(),
            env: env.clone(),
        })))
    }

    fn eval_set(&mut self, args: &[Form], form: &Form, env: Environment) -> Result<Step> {
        let Some(name) = args[0].as_symbol() else {
            return Err(Error::scope(
                "set!: host objects are not available here",
                form,
            ));
        };
        let Some(cell) = env.lookup(name.name()) else {
            return Err(Error::undefined_identifier(name.name(), &args[0]));
        };
        let (value, env) = self.eval(&args[1], env)?;
        self.store.set(cell, value.clone())?;
        Ok((value, env))
    }

    /// Rebuilds a quasiquote template.
    fn eval_template(&mut self, template: &Form, env: Environment) -> Result<Step> {
        self.enter(template)?;
        let result = self.rebuild_template(template, env);
        self.depth -= 1;
        result
    }

    fn rebuild_template(&mut self, template: &Form, env: Environment) -> Result<Step> {
        match template.special_form() {
            Some((SpecialForm::Unquote, args)) => {
                syntax::check(SpecialForm::Unquote, args, template)?;
                return self.eval(&args[0], env);
            }
            Some((SpecialForm::UnquoteSplicing, _)) => {
                return Err(Error::scope("unquote-splicing: not in list", template));
            }
            _ => {}
        }
        let Form::List(items) = template else {
            return Ok((Value::from_form(template), env));
        };
        let mut env = env;
        let mut result = Vec::with_capacity(items.len());
        for item in items {
            if let Some((SpecialForm::UnquoteSplicing, args)) = item.special_form() {
                syntax::check(SpecialForm::UnquoteSplicing, args, item)?;
                let (spliced, next) = self.eval(&args[0], env)?;
                env = next;
                match spliced {
                    Value::List(values) => result.extend(values),
                    other => {
                        return Err(Error::type_error(
                            format!(
                                "unquote-splicing: expects argument of type list, got {}",
                                other.type_name()
                            ),
                            item,
                        ));
                    }
                }
            } else {
                let (value, next) = self.eval_template(item, env)?;
                env = next;
                result.push(value);
            }
        }
        Ok((Value::List(result), env))
    }

    fn eval_each(&mut self, forms: &[Form], env: Environment) -> Result<(Vec<Value>, Environment)> {
        let mut env = env;
        let mut values = Vec::with_capacity(forms.len());
        for form in forms {
            let (value, next) = self.eval(form, env)?;
            values.push(value);
            env = next;
        }
        Ok((values, env))
    }

    fn eval_apply(&mut self, head: &Form, args: &[Form], form: &Form, env: Environment) -> Result<Step> {
        let (callee, env) = self.eval(head, env)?;
        let (values, env) = self.eval_each(args, env)?;
        let Value::Func(closure) = callee else {
            return Err(Error::type_error(
                format!("Non-function application ({})", callee.type_name()),
                form,
            ));
        };
        let value = self.call(&closure, values, form)?;
        Ok((value, env))
    }

    fn call(&mut self, closure: &Closure, values: Vec<Value>, form: &Form) -> Result<Value> {
        let mut frame = closure.env.clone();
        match &closure.params {
            Params::Fixed(names) => {
                if names.len() != values.len() {
                    return Err(Error::arity_mismatch(names.len(), values.len(), form));
                }
                for (name, value) in names.iter().zip(values) {
                    let cell = self.store.alloc(Some(value))?;
                    frame = frame.extend(Arc::clone(name), cell);
                }
            }
            Params::Rest(name) => {
                let cell = self.store.alloc(Some(Value::List(values)))?;
                frame = frame.extend(Arc::clone(name), cell);
            }
        }

        trace!(depth = self.depth, "apply");
        self.eval_body(&closure.body, frame)
    }

    fn eval_body(&mut self, body: &[Form], env: Environment) -> Result<Value> {
        let mut env = env;
        let mut last = None;
        for form in body {
            let (value, next) = self.eval(form, env)?;
            last = Some(value);
            env = next;
        }
        last.ok_or_else(|| Error::internal("function body is empty"))
    }
}

fn standard_id<'f>(form: &'f Form, whole: &Form) -> Result<&'f Symbol> {
    form.as_symbol()
        .filter(|s| !s.is_property())
        .ok_or_else(|| Error::syntax("invalid identifier", whole))
}

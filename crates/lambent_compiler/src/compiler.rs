//! Source-to-source compiler.
//!
//! Each form compiles to host expression text plus the environment after
//! it, so `var` bindings thread left to right exactly as in the evaluator.
//! Statements are assembled by [`Unit`], which also owns the decision to
//! emit the symbol interning table.

use std::cell::Cell;
use std::sync::Arc;

use lambent_foundation::{
    Error, Form, Literal, MAX_NESTING, Result, SemanticLimit, SpecialForm, format_number, quote_string,
};
use lambent_language::syntax;
use tracing::debug;

use crate::config::{CompilerConfig, SymbolTablePolicy};
use crate::env::CompileEnv;
use crate::ident;
use crate::symbols::{self, SYMBOL_TABLE_NAME, SYMBOL_TABLE_PRELUDE};

pub(crate) type Step = (String, CompileEnv);

/// Compiles forms to host source text.
#[derive(Clone, Debug, Default)]
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    /// Creates a compiler with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a compiler with a custom configuration.
    #[must_use]
    pub fn with_config(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compiles `forms` in order, starting from `env` (or an empty
    /// environment). Every top-level form becomes one statement.
    ///
    /// # Errors
    /// Returns the first error raised. `import` forms are rejected; use
    /// [`Compiler::compile_with_imports`] for programs that import.
    ///
    /// # Example
    ///
    /// ```
    /// use lambent_compiler::Compiler;
    /// use lambent_language::read;
    ///
    /// let forms = read("(var add-one (fn (n) (plus n 1)))").unwrap();
    /// let env = lambent_compiler::CompileEnv::with_globals(["plus"]);
    /// let code = Compiler::new().compile(&forms, Some(&env)).unwrap();
    /// assert_eq!(code, "var add_one = (function (n) {\n\treturn plus(n, 1);\n});");
    /// ```
    pub fn compile(&self, forms: &[Form], env: Option<&CompileEnv>) -> Result<String> {
        debug!(forms = forms.len(), "compiling program");
        let mut unit = Unit::new(&self.config, env, forms)?;
        for form in forms {
            unit.push(form)?;
        }
        Ok(unit.finish())
    }
}

/// One compilation in progress: the running environment and the emitted
/// statements.
pub(crate) struct Unit<'c> {
    codegen: Codegen<'c>,
    env: CompileEnv,
    statements: Vec<String>,
    symbol_table: bool,
}

impl<'c> Unit<'c> {
    /// Starts a unit, reserving the symbol table up front if `forms` need it.
    /// Forms nested deeper than [`MAX_NESTING`] are rejected before any scan.
    pub(crate) fn new(config: &'c CompilerConfig, env: Option<&CompileEnv>, forms: &[Form]) -> Result<Self> {
        for form in forms {
            form.check_nesting(MAX_NESTING)?;
        }
        let mut unit = Self {
            codegen: Codegen::new(config),
            env: env.cloned().unwrap_or_default(),
            statements: Vec::new(),
            symbol_table: false,
        };
        if config.symbol_table == SymbolTablePolicy::Always || symbols::needs_symbol_table(forms) {
            unit.reserve_symbol_table()?;
        }
        Ok(unit)
    }

    /// Compiles one top-level form into a statement.
    pub(crate) fn push(&mut self, form: &Form) -> Result<()> {
        form.check_nesting(MAX_NESTING)?;
        if !self.symbol_table && symbols::needs_symbol_table(std::slice::from_ref(form)) {
            self.reserve_symbol_table()?;
        }
        let (code, env) = self.codegen.compile(form, self.env.clone())?;
        self.statements.push(format!("{code};"));
        self.env = env;
        Ok(())
    }

    pub(crate) fn finish(self) -> String {
        let mut lines = Vec::with_capacity(self.statements.len() + 1);
        if self.symbol_table {
            lines.push(SYMBOL_TABLE_PRELUDE.to_string());
        }
        lines.extend(self.statements);
        lines.join("\n")
    }

    fn reserve_symbol_table(&mut self) -> Result<()> {
        let Some(env) = self.env.reserve(SYMBOL_TABLE_NAME) else {
            return Err(Error::internal(format!(
                "symbol table name '{SYMBOL_TABLE_NAME}' is already bound"
            )));
        };
        self.env = env;
        self.symbol_table = true;
        Ok(())
    }
}

/// Expression code generation.
pub(crate) struct Codegen<'c> {
    pub(crate) config: &'c CompilerConfig,
    depth: Cell<usize>,
}

impl<'c> Codegen<'c> {
    pub(crate) fn new(config: &'c CompilerConfig) -> Self {
        Self {
            config,
            depth: Cell::new(0),
        }
    }
}

impl Codegen<'_> {
    pub(crate) fn compile(&self, form: &Form, env: CompileEnv) -> Result<Step> {
        self.descend(form, move |codegen| codegen.compile_form(form, env))
    }

    /// Runs `f` one level deeper, failing once the configured depth is
    /// reached. The depth is restored whether or not `f` succeeds.
    pub(crate) fn descend<T>(&self, form: &Form, f: impl FnOnce(&Self) -> Result<T>) -> Result<T> {
        let depth = self.depth.get();
        if depth >= self.config.max_depth {
            return Err(Error::limit_exceeded(SemanticLimit::MaxDepth {
                limit: self.config.max_depth,
            })
            .at(form));
        }
        self.depth.set(depth + 1);
        let result = f(self);
        self.depth.set(depth);
        result
    }

    fn compile_form(&self, form: &Form, env: CompileEnv) -> Result<Step> {
        match form {
            Form::Literal(l) => Ok((compile_literal(l), env)),
            Form::Symbol(s) => {
                let Some(id) = env.get(s.name()) else {
                    return Err(Error::undefined_identifier(s.name(), form));
                };
                Ok((id.to_string(), env))
            }
            Form::List(items) => {
                let Some((head, args)) = items.split_first() else {
                    return Err(Error::empty_application(form));
                };
                if let Some(symbol) = head.as_symbol() {
                    if let Some(special) = symbol.special() {
                        syntax::check(special, args, form)?;
                        return self.compile_special(special, args, form, env);
                    }
                    if let Some(key) = symbol.property_key() {
                        syntax::check_property_call(args, form)?;
                        return self.compile_property_call(key, args, env);
                    }
                }
                self.compile_apply(head, args, env)
            }
        }
    }

    fn compile_special(&self, special: SpecialForm, args: &[Form], form: &Form, env: CompileEnv) -> Result<Step> {
        match special {
            SpecialForm::Var => {
                let (code, env, _) = self.compile_var(args, env)?;
                Ok((code, env))
            }
            SpecialForm::Fn => Ok((self.compile_fn(args, &env)?, env)),
            SpecialForm::Set => self.compile_set(args, env),
            SpecialForm::If => {
                let (test, env) = self.compile(&args[0], env)?;
                let (then, env) = self.compile(&args[1], env)?;
                let (otherwise, env) = self.compile(&args[2], env)?;
                Ok((format!("({test} ? {then} : {otherwise})"), env))
            }
            SpecialForm::Quote => Ok((compile_quoted(&args[0]), env)),
            SpecialForm::Quasiquote => self.compile_template(&args[0], env),
            SpecialForm::List => {
                let (items, env) = self.compile_each(args, env)?;
                Ok((format!("[{}]", items.join(", ")), env))
            }
            SpecialForm::Dot => {
                let (target, env) = self.compile(&args[0], env)?;
                let (key, env) = self.compile(&args[1], env)?;
                Ok((format!("{}[{key}]", member_target(&target)), env))
            }
            SpecialForm::Obj => self.compile_obj(args, env),
            SpecialForm::Unquote | SpecialForm::UnquoteSplicing => Err(Error::scope(
                format!("{special}: not in quasiquote"),
                form,
            )),
            SpecialForm::Import => Err(Error::scope("import: not valid here", form)),
            SpecialForm::DefineSyntax | SpecialForm::SyntaxRules => Err(Error::scope(
                format!("{special}: macros must be expanded before compilation"),
                form,
            )),
        }
    }

    /// The target name is bound before the initializer compiles, so the
    /// initializer can refer to it.
    fn compile_var(&self, args: &[Form], env: CompileEnv) -> Result<(String, CompileEnv, Arc<str>)> {
        let name = standard_id(&args[0])?;
        let (env, id) = env.put(name, &args[0])?;
        let (init, env) = self.compile(&args[1], env)?;
        Ok((format!("var {id} = {init}"), env, id))
    }

    fn compile_fn(&self, args: &[Form], env: &CompileEnv) -> Result<String> {
        let mut scope = env.clone();
        let mut preamble = None;
        let params = match &args[0] {
            Form::List(names) => {
                let mut ids = Vec::with_capacity(names.len());
                for name in names {
                    let (next, id) = scope.put(standard_id(name)?, name)?;
                    scope = next;
                    ids.push(id.to_string());
                }
                ids.join(", ")
            }
            rest => {
                let (next, id) = scope.put(standard_id(rest)?, rest)?;
                scope = next;
                preamble = Some(format!("var {id} = [].slice.call(arguments);"));
                String::new()
            }
        };

        let body = &args[1..];
        let mut lines: Vec<String> = preamble.into_iter().collect();
        if let Some((tail, init)) = body.split_last() {
            for form in init {
                let (code, next) = self.compile(form, scope)?;
                scope = next;
                lines.push(format!("{code};"));
            }
            match tail.special_form() {
                Some((SpecialForm::Var, var_args)) => {
                    syntax::check(SpecialForm::Var, var_args, tail)?;
                    let (code, _, id) = self.compile_var(var_args, scope)?;
                    lines.push(format!("{code};"));
                    lines.push(format!("return {id};"));
                }
                _ => {
                    let (code, _) = self.compile(tail, scope)?;
                    lines.push(format!("return {code};"));
                }
            }
        }

        let indent = &self.config.indent;
        let body = lines.join("\n").replace('\n', &format!("\n{indent}"));
        Ok(format!("(function ({params}) {{\n{indent}{body}\n}})"))
    }

    fn compile_set(&self, args: &[Form], env: CompileEnv) -> Result<Step> {
        let (assignee, env) = match &args[0] {
            Form::Symbol(s) => {
                let Some(id) = env.get(s.name()) else {
                    return Err(Error::undefined_identifier(s.name(), &args[0]));
                };
                (id.to_string(), env)
            }
            property => self.compile(property, env)?,
        };
        let (value, env) = self.compile(&args[1], env)?;
        Ok((format!("{assignee} = {value}"), env))
    }

    fn compile_obj(&self, entries: &[Form], env: CompileEnv) -> Result<Step> {
        let mut env = env;
        let mut fields = Vec::with_capacity(entries.len());
        for entry in entries {
            let Some([key, value]) = entry.as_list() else {
                return Err(Error::syntax("obj: entry is not a pair", entry));
            };
            let Some(key) = key.as_symbol() else {
                return Err(Error::syntax("obj: entry key is not a symbol", key));
            };
            let (value, next) = self.compile(value, env)?;
            env = next;
            let key = if ident::is_identifier_name(key.name()) {
                key.name().to_string()
            } else {
                quote_string(key.name())
            };
            fields.push(format!("{key}: {value}"));
        }
        Ok((format!("({{{}}})", fields.join(", ")), env))
    }

    fn compile_property_call(&self, key: &str, args: &[Form], env: CompileEnv) -> Result<Step> {
        let (target, env) = self.compile(&args[0], env)?;
        let member = if ident::is_identifier_name(key) {
            format!("{}.{key}", member_target(&target))
        } else {
            format!("{}[{}]", member_target(&target), quote_string(key))
        };
        if args.len() == 1 {
            return Ok((member, env));
        }
        let (values, env) = self.compile_each(&args[1..], env)?;
        Ok((format!("{member}({})", values.join(", ")), env))
    }

    fn compile_apply(&self, head: &Form, args: &[Form], env: CompileEnv) -> Result<Step> {
        let (callee, env) = self.compile(head, env)?;
        let (values, env) = self.compile_each(args, env)?;
        Ok((format!("{callee}({})", values.join(", ")), env))
    }

    pub(crate) fn compile_each(&self, forms: &[Form], env: CompileEnv) -> Result<(Vec<String>, CompileEnv)> {
        let mut env = env;
        let mut output = Vec::with_capacity(forms.len());
        for form in forms {
            let (code, next) = self.compile(form, env)?;
            output.push(code);
            env = next;
        }
        Ok((output, env))
    }
}

pub(crate) fn compile_literal(literal: &Literal) -> String {
    match literal {
        Literal::Number(n) => format_number(*n),
        Literal::String(s) => quote_string(s),
        Literal::Bool(b) => b.to_string(),
    }
}

/// Quoted data: symbols intern, lists become arrays.
pub(crate) fn compile_quoted(form: &Form) -> String {
    match form {
        Form::Literal(l) => compile_literal(l),
        Form::Symbol(s) => format!("{SYMBOL_TABLE_NAME}({})", quote_string(s.name())),
        Form::List(items) => {
            let items: Vec<String> = items.iter().map(compile_quoted).collect();
            format!("[{}]", items.join(", "))
        }
    }
}

/// Number literals need parentheses before a member access.
fn member_target(code: &str) -> String {
    if code.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
        format!("({code})")
    } else {
        code.to_string()
    }
}

fn standard_id(form: &Form) -> Result<&str> {
    match form.as_symbol() {
        Some(s) if !s.is_property() => Ok(s.name()),
        _ => Err(Error::syntax("invalid identifier", form)),
    }
}

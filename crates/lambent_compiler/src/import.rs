//! Import inlining.
//!
//! `(import "a" "b")` asks an [`ImportResolver`] for the forms of each
//! module and splices them into the program where the import stood. Modules
//! are requested one at a time, depth first, and at most once per
//! compilation. Resolution futures are polled on the compiling thread, so
//! they need not be `Send`.

use std::collections::{HashMap, HashSet, VecDeque};

use futures::FutureExt;
use futures::future::{self, LocalBoxFuture};
use lambent_foundation::{Error, Form, Literal, MAX_NESTING, Result, SpecialForm};
use lambent_language::syntax;
use tracing::debug;

use crate::compiler::{Compiler, Unit};
use crate::env::CompileEnv;

/// Supplies the forms of imported modules.
pub trait ImportResolver {
    /// Returns the forms of module `name`.
    fn resolve<'a>(&'a mut self, name: &'a str) -> LocalBoxFuture<'a, Result<Vec<Form>>>;
}

/// Modules held in memory, keyed by import name.
impl ImportResolver for HashMap<String, Vec<Form>> {
    fn resolve<'a>(&'a mut self, name: &'a str) -> LocalBoxFuture<'a, Result<Vec<Form>>> {
        let result = self
            .get(name)
            .cloned()
            .ok_or_else(|| Error::import(name, "module not found"));
        future::ready(result).boxed_local()
    }
}

impl Compiler {
    /// Compiles `forms`, inlining every `import` through `resolver`.
    ///
    /// The resolved forms take the place of the import and are compiled in
    /// the same scope, so their bindings are visible to what follows.
    ///
    /// # Errors
    /// Returns the first compile error, or the resolver's error if a module
    /// cannot be resolved.
    pub async fn compile_with_imports(
        &self,
        forms: &[Form],
        resolver: &mut dyn ImportResolver,
        env: Option<&CompileEnv>,
    ) -> Result<String> {
        debug!(forms = forms.len(), "compiling program with imports");
        let mut unit = Unit::new(self.config(), env, forms)?;
        let mut pending: VecDeque<Form> = forms.iter().cloned().collect();
        let mut resolved: HashSet<String> = HashSet::new();

        while let Some(form) = pending.pop_front() {
            let Some((SpecialForm::Import, args)) = form.special_form() else {
                unit.push(&form)?;
                continue;
            };
            form.check_nesting(MAX_NESTING)?;
            syntax::check(SpecialForm::Import, args, &form)?;
            let names: Vec<&str> = args.iter().filter_map(import_name).collect();

            let Some(position) = names.iter().position(|name| {
                let seen = resolved.contains(*name);
                if seen {
                    debug!(module = *name, "import already resolved, skipping");
                }
                !seen
            }) else {
                continue;
            };
            let name = names[position];
            resolved.insert(name.to_string());

            debug!(module = name, "requesting import");
            let module = resolver.resolve(name).await?;
            debug!(module = name, forms = module.len(), "splicing import");

            let remaining = &args[position + 1..];
            if !remaining.is_empty() {
                let mut rest = Vec::with_capacity(remaining.len() + 1);
                rest.push(Form::symbol(SpecialForm::Import.name()));
                rest.extend_from_slice(remaining);
                pending.push_front(Form::list(rest));
            }
            for spliced in module.into_iter().rev() {
                pending.push_front(spliced);
            }
        }
        Ok(unit.finish())
    }
}

fn import_name(form: &Form) -> Option<&str> {
    match form.as_literal()? {
        Literal::String(s) => Some(s),
        _ => None,
    }
}

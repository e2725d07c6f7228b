//! Quasiquote templates.
//!
//! A template list is emitted as runs of plain elements (one array literal
//! per run) joined to spliced arrays with `concat`.

use lambent_foundation::{Error, Form, Result, SpecialForm};
use lambent_language::syntax;

use crate::compiler::{Codegen, Step, compile_quoted};
use crate::env::CompileEnv;

const EMPTY_ARRAY: &str = "[]";

impl Codegen<'_> {
    pub(crate) fn compile_template(&self, template: &Form, env: CompileEnv) -> Result<Step> {
        self.descend(template, move |codegen| codegen.compile_template_form(template, env))
    }

    fn compile_template_form(&self, template: &Form, env: CompileEnv) -> Result<Step> {
        match template.special_form() {
            Some((SpecialForm::Unquote, args)) => {
                syntax::check(SpecialForm::Unquote, args, template)?;
                return self.compile(&args[0], env);
            }
            Some((SpecialForm::UnquoteSplicing, _)) => {
                return Err(Error::scope("unquote-splicing: not in list", template));
            }
            _ => {}
        }
        let Form::List(items) = template else {
            return Ok((compile_quoted(template), env));
        };

        let mut env = env;
        let mut pieces = Vec::new();
        let mut run = Vec::new();
        for item in items {
            if let Some((SpecialForm::UnquoteSplicing, args)) = item.special_form() {
                syntax::check(SpecialForm::UnquoteSplicing, args, item)?;
                let (spliced, next) = self.compile(&args[0], env)?;
                env = next;
                if spliced == EMPTY_ARRAY {
                    continue;
                }
                flush(&mut run, &mut pieces);
                pieces.push(spliced);
            } else {
                let (code, next) = self.compile_template(item, env)?;
                env = next;
                run.push(code);
            }
        }
        flush(&mut run, &mut pieces);

        let code = match pieces.as_slice() {
            [] => EMPTY_ARRAY.to_string(),
            [single] => single.clone(),
            _ => format!("({})", pieces.join(").concat(")),
        };
        Ok((code, env))
    }
}

fn flush(run: &mut Vec<String>, pieces: &mut Vec<String>) {
    if !run.is_empty() {
        pieces.push(format!("[{}]", run.join(", ")));
        run.clear();
    }
}

//! Lambent to host-script compiler.
//!
//! This crate provides:
//! - [`Compiler`] - Compiles forms to host source text
//! - [`CompileEnv`] - Persistent source-to-target identifier renaming
//! - [`ImportResolver`] - Supplies module forms to [`Compiler::compile_with_imports`]
//! - [`CompilerConfig`] - Indentation and symbol table policy
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use futures::executor::block_on;
//! use lambent_compiler::Compiler;
//! use lambent_language::read;
//!
//! let mut modules = HashMap::new();
//! modules.insert("util".to_string(), read("(var id (fn (x) x))").unwrap());
//!
//! let forms = read("(import \"util\") (id 1)").unwrap();
//! let code = block_on(Compiler::new().compile_with_imports(&forms, &mut modules, None)).unwrap();
//! assert_eq!(code, "var id = (function (x) {\n\treturn x;\n});\nid(1);");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compiler;
pub mod config;
pub mod env;
pub mod ident;
pub mod import;
mod quote;
pub mod symbols;

pub use compiler::Compiler;
pub use config::{CompilerConfig, SymbolTablePolicy};
pub use env::CompileEnv;
pub use import::ImportResolver;
pub use symbols::needs_symbol_table;

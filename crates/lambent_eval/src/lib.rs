//! Tree-walking evaluator for Lambent.
//!
//! This crate provides:
//! - [`Evaluator`] - Evaluates forms, threading environments through each step
//! - [`Environment`] / [`Store`] - Persistent name-to-cell maps over a cell arena
//! - [`Value`] - Literals, quoted data and closures
//! - [`print`] - Value rendering
//!
//! # Example
//!
//! ```
//! use lambent_eval::{Evaluator, print};
//! use lambent_language::read;
//!
//! let forms = read("(var twice (fn (x) `(,x ,x))) (twice 'a)").unwrap();
//! let result = Evaluator::new().evaluate(&forms, None).unwrap();
//! assert_eq!(print(&result.value.unwrap()), "[a a]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod env;
pub mod evaluator;
pub mod printer;
pub mod store;
pub mod value;

pub use config::EvalConfig;
pub use env::Environment;
pub use evaluator::{Evaluation, Evaluator};
pub use printer::print;
pub use store::{CellId, Store};
pub use value::{Closure, Params, Value};

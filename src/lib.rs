//! Lambent - a small Lisp, evaluated in place or compiled to host script
//!
//! This crate re-exports all layers of the Lambent system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: lambent_eval        - Tree-walking evaluator over a cell store
//!          lambent_compiler    - Source compiler, identifier renaming, imports
//! Layer 1: lambent_language    - Lexer, reader, special-form validator
//! Layer 0: lambent_foundation  - Forms, special-form tags, errors, printing
//! ```
//!
//! The evaluator and the compiler never call each other; both consume the
//! validated forms produced by the reader.

pub use lambent_compiler as compiler;
pub use lambent_eval as eval;
pub use lambent_foundation as foundation;
pub use lambent_language as language;

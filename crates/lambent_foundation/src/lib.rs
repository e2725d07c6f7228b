//! Core data model for Lambent.
//!
//! This crate provides:
//! - [`Form`] - The parsed program tree consumed by both engines
//! - [`SpecialForm`] - Tags for keywords with fixed, non-call semantics
//! - [`Error`] - The shared error type, rendered as `message @ form`
//! - [`print_raw_form`] - Source-text rendering used in diagnostics

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod form;
pub mod pretty;
pub mod special;

pub use error::{Error, ErrorKind, Result, SemanticLimit};
pub use form::{Form, Literal, MAX_NESTING, Symbol};
pub use pretty::{format_number, print_raw_form, print_raw_forms, quote_string};
pub use special::SpecialForm;

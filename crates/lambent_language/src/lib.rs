//! Reader and syntax validator for Lambent.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of Lambent source
//! - [`Parser`] / [`read`] - Reading tokens into [`Form`](lambent_foundation::Form)s
//! - [`syntax`] - Per-special-form surface-syntax checks shared by both engines

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexer;
pub mod parser;
pub mod span;
pub mod syntax;
pub mod token;


pub use lexer::Lexer;
pub use parser::{Parser, read, read_one};
pub use span::Span;
pub use token::{Token, TokenKind};

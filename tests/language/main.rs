//! Integration tests for Layer 1: Language
//!
//! Tests for the lexer, the reader, and the special-form validator.

mod lexer;
mod syntax;

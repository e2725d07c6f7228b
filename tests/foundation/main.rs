//! Integration tests for Layer 0: Foundation
//!
//! Tests for forms, special-form tags, printing, and errors.

mod errors;
mod forms;

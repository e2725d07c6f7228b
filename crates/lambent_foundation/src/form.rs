//! The form model shared by the reader, the evaluator, and the compiler.
//!
//! A [`Form`] is a node of the parsed program tree. Forms are immutable once
//! produced; both engines only ever read them.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result, SemanticLimit};
use crate::pretty::{format_number, print_raw_form, quote_string};
use crate::special::SpecialForm;

/// Deepest list nesting the reader and both engines accept.
pub const MAX_NESTING: usize = 256;

/// A self-evaluating literal payload.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    /// Host number (double precision).
    Number(f64),
    /// String literal like `"hello"`.
    String(Arc<str>),
    /// `#t` or `#f`.
    Bool(bool),
}

impl Literal {
    /// Host truthiness: `0`, `NaN`, `""` and `#f` are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Bool(b) => *b,
        }
    }

    /// Returns the string payload, or None if not a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// A human-readable type name for this literal.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Bool(_) => "boolean",
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::String(s) => f.write_str(&quote_string(s)),
            Self::Bool(true) => f.write_str("#t"),
            Self::Bool(false) => f.write_str("#f"),
        }
    }
}

/// An identifier, compared by exact text.
///
/// The special-form tag is resolved when the symbol is built.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub struct Symbol {
    name: Arc<str>,
    special: Option<SpecialForm>,
}

impl Symbol {
    /// Creates a symbol, resolving its special-form tag.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        let special = SpecialForm::from_name(&name);
        Self { name, special }
    }

    /// The symbol's text.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared handle to the symbol's text.
    #[must_use]
    pub fn name_arc(&self) -> &Arc<str> {
        &self.name
    }

    /// The special form this symbol names, if any.
    #[must_use]
    pub const fn special(&self) -> Option<SpecialForm> {
        self.special
    }

    /// True for names starting with `.` (object property syntax).
    #[must_use]
    pub fn is_property(&self) -> bool {
        self.name.starts_with('.')
    }

    /// For `.key` symbols, returns `key`.
    #[must_use]
    pub fn property_key(&self) -> Option<&str> {
        self.name.strip_prefix('.').filter(|key| !key.is_empty())
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Symbol {}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.name.to_string()
    }
}

/// A node of the program tree.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Form {
    /// Number, string or boolean.
    Literal(Literal),
    /// Identifier reference.
    Symbol(Symbol),
    /// Ordered sequence; `()` is a valid datum.
    List(Vec<Form>),
}

impl Form {
    /// Creates a number literal.
    #[must_use]
    pub const fn number(n: f64) -> Self {
        Self::Literal(Literal::Number(n))
    }

    /// Creates a string literal.
    #[must_use]
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Self::Literal(Literal::String(s.into()))
    }

    /// Creates a boolean literal.
    #[must_use]
    pub const fn boolean(b: bool) -> Self {
        Self::Literal(Literal::Bool(b))
    }

    /// Creates a symbol.
    #[must_use]
    pub fn symbol(name: impl Into<Arc<str>>) -> Self {
        Self::Symbol(Symbol::new(name))
    }

    /// Creates a list.
    #[must_use]
    pub const fn list(items: Vec<Form>) -> Self {
        Self::List(items)
    }

    /// Wraps `inner` as `(special inner)`, e.g. `(quote x)`.
    #[must_use]
    pub fn wrap(special: SpecialForm, inner: Form) -> Self {
        Self::List(vec![Self::symbol(special.name()), inner])
    }

    /// Returns the symbol, or None if not a symbol.
    #[must_use]
    pub const fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list items, or None if not a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Form]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the literal, or None if not a literal.
    #[must_use]
    pub const fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// If this is a non-empty list headed by a special-form symbol, returns
    /// the tag and the arguments after the keyword.
    #[must_use]
    pub fn special_form(&self) -> Option<(SpecialForm, &[Form])> {
        let (head, args) = self.as_list()?.split_first()?;
        Some((head.as_symbol()?.special()?, args))
    }

    /// True if this is a list headed by `special`.
    #[must_use]
    pub fn is_form(&self, special: SpecialForm) -> bool {
        self.special_form().is_some_and(|(s, _)| s == special)
    }

    /// A human-readable type name for this form.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Literal(l) => l.type_name(),
            Self::Symbol(_) => "symbol",
            Self::List(_) => "list",
        }
    }

    /// Nesting depth: 0 for atoms, one more than the deepest item for lists.
    /// Uses an explicit stack, so any tree can be measured.
    #[must_use]
    pub fn nesting_depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0)];
        while let Some((form, depth)) = pending.pop() {
            if let Self::List(items) = form {
                let depth = depth + 1;
                deepest = deepest.max(depth);
                pending.extend(items.iter().map(|item| (item, depth)));
            }
        }
        deepest
    }

    /// Rejects forms nested deeper than `limit`.
    ///
    /// # Errors
    /// `LimitExceeded(MaxNesting)` without a form attached, since rendering
    /// the offending form would recurse just as deeply.
    pub fn check_nesting(&self, limit: usize) -> Result<()> {
        if self.nesting_depth() > limit {
            return Err(Error::limit_exceeded(SemanticLimit::MaxNesting { limit }));
        }
        Ok(())
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_raw_form(self))
    }
}

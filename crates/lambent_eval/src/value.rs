//! Runtime values produced by the evaluator.

use std::fmt;
use std::sync::Arc;

use lambent_foundation::{Form, Literal, Symbol};

use crate::env::Environment;

/// An evaluated value.
#[derive(Clone, Debug)]
pub enum Value {
    /// Number, string or boolean.
    Literal(Literal),
    /// A quoted symbol.
    Symbol(Symbol),
    /// A quoted or constructed list.
    List(Vec<Value>),
    /// A closure. Equality is identity.
    Func(Arc<Closure>),
}

/// Parameter shape of a closure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Params {
    /// `(fn (a b) ...)`: exactly these names.
    Fixed(Vec<Arc<str>>),
    /// `(fn rest ...)`: every argument, collected in a list.
    Rest(Arc<str>),
}

impl Params {
    /// Number of parameters for fixed arity, `None` for variadic.
    #[must_use]
    pub fn arity(&self) -> Option<usize> {
        match self {
            Self::Fixed(names) => Some(names.len()),
            Self::Rest(_) => None,
        }
    }
}

/// A function value: parameters, body and the environment it closed over.
#[derive(Debug)]
pub struct Closure {
    /// Parameter names.
    pub params: Params,
    /// Body forms, evaluated in order; the last one is the result.
    pub body: Vec<Form>,
    /// The defining environment.
    pub env: Environment,
}

impl Value {
    /// Reinterprets a form as data, as `quote` does.
    #[must_use]
    pub fn from_form(form: &Form) -> Self {
        match form {
            Form::Literal(l) => Self::Literal(l.clone()),
            Form::Symbol(s) => Self::Symbol(s.clone()),
            Form::List(items) => Self::List(items.iter().map(Self::from_form).collect()),
        }
    }

    /// Creates a number value.
    #[must_use]
    pub const fn number(n: f64) -> Self {
        Self::Literal(Literal::Number(n))
    }

    /// Creates a string value.
    #[must_use]
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Self::Literal(Literal::String(s.into()))
    }

    /// Creates a boolean value.
    #[must_use]
    pub const fn boolean(b: bool) -> Self {
        Self::Literal(Literal::Bool(b))
    }

    /// Creates a symbol value.
    #[must_use]
    pub fn symbol(name: impl Into<Arc<str>>) -> Self {
        Self::Symbol(Symbol::new(name))
    }

    /// Only literals can be falsy; lists, symbols and functions are always
    /// truthy, including the empty list.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Literal(l) => l.is_truthy(),
            Self::Symbol(_) | Self::List(_) | Self::Func(_) => true,
        }
    }

    /// Returns the list items, or None if not a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the number, or None if not a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Literal(Literal::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Returns the closure, or None if not a function.
    #[must_use]
    pub fn as_func(&self) -> Option<&Arc<Closure>> {
        match self {
            Self::Func(c) => Some(c),
            _ => None,
        }
    }

    /// A human-readable type name for this value.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Literal(l) => l.type_name(),
            Self::Symbol(_) => "symbol",
            Self::List(_) => "list",
            Self::Func(_) => "function",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Func(a), Self::Func(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::printer::print(self))
    }
}

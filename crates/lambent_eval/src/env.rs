//! Evaluator environments.

use std::sync::Arc;

use crate::store::CellId;

/// Persistent map from identifier to cell.
///
/// Extending returns a new environment that shares every existing entry;
/// the parent is never changed. Cloning is cheap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Environment {
    bindings: im::HashMap<Arc<str>, CellId>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell bound to `name`, if any.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<CellId> {
        self.bindings.get(name).copied()
    }

    /// Returns a new environment with `name` bound to `cell`, shadowing any
    /// earlier binding of the same name.
    #[must_use]
    pub fn extend(&self, name: Arc<str>, cell: CellId) -> Self {
        Self {
            bindings: self.bindings.update(name, cell),
        }
    }

    /// True if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of visible bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over the visible names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(AsRef::as_ref)
    }
}

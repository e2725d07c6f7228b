//! Arena of mutable binding cells.
//!
//! Environments map names to [`CellId`]s; the cells themselves live here.
//! A cell holds `None` between declaration and assignment, which is how
//! `(var f (fn () f))` can refer to itself.

use lambent_foundation::{Error, Result};

use crate::value::Value;

/// Index of a cell in a [`Store`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(u32);

impl CellId {
    /// The raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Cell arena owned by an evaluator.
///
/// Cells are never freed while the store lives.
#[derive(Debug, Default)]
pub struct Store {
    cells: Vec<Option<Value>>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a cell with an optional initial value.
    ///
    /// # Errors
    /// Returns an internal error if the arena index space is exhausted.
    pub fn alloc(&mut self, value: Option<Value>) -> Result<CellId> {
        let index = u32::try_from(self.cells.len())
            .map_err(|_| Error::internal("cell store exhausted"))?;
        self.cells.push(value);
        Ok(CellId(index))
    }

    /// Reads a cell. `Ok(None)` means declared but not yet assigned.
    ///
    /// # Errors
    /// Returns an internal error if `id` was not allocated by this store.
    pub fn get(&self, id: CellId) -> Result<Option<&Value>> {
        self.cells
            .get(id.index())
            .map(Option::as_ref)
            .ok_or_else(|| foreign_cell(id))
    }

    /// Overwrites a cell.
    ///
    /// # Errors
    /// Returns an internal error if `id` was not allocated by this store.
    pub fn set(&mut self, id: CellId, value: Value) -> Result<()> {
        let cell = self
            .cells
            .get_mut(id.index())
            .ok_or_else(|| foreign_cell(id))?;
        *cell = Some(value);
        Ok(())
    }

    /// Number of allocated cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if no cell has been allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

fn foreign_cell(id: CellId) -> Error {
    Error::internal(format!(
        "cell {} does not belong to this evaluator",
        id.index()
    ))
}

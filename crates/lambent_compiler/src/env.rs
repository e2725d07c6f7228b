//! Renaming environment.
//!
//! Maps source identifiers to target identifiers. Extending never mutates
//! the ancestor, so sibling scopes can reuse a target name while nested
//! scopes always get a fresh one.

use std::sync::Arc;

use im::{HashMap, HashSet};
use lambent_foundation::{Error, Form, Result};
use tracing::trace;

use crate::ident;

/// A persistent source-to-target name mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompileEnv {
    names: HashMap<Arc<str>, Arc<str>>,
    taken: HashSet<Arc<str>>,
}

impl CompileEnv {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment where each host global resolves to itself.
    #[must_use]
    pub fn with_globals<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut env = Self::new();
        for name in names {
            let name: Arc<str> = Arc::from(name.as_ref());
            env.taken.insert(Arc::clone(&name));
            env.names.insert(Arc::clone(&name), name);
        }
        env
    }

    /// Looks up the target identifier of a source name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.names.get(name).map(AsRef::as_ref)
    }

    /// True if `target` is already bound somewhere in this chain.
    #[must_use]
    pub fn is_taken(&self, target: &str) -> bool {
        self.taken.contains(target)
    }

    /// Binds `name` to a fresh target identifier.
    ///
    /// # Errors
    /// Returns `UnsupportedCharacter` if the name cannot be spelled on the
    /// host.
    pub fn put(&self, name: &str, form: &Form) -> Result<(Self, Arc<str>)> {
        let base = ident::sanitize(name).map_err(|c| Error::unsupported_character(c, form))?;
        let target: Arc<str> = if self.taken.contains(base.as_str()) {
            let renamed = (1u64..)
                .map(|n| format!("{base}{n}"))
                .find(|candidate| !self.taken.contains(candidate.as_str()))
                .ok_or_else(|| Error::internal("identifier suffixes exhausted"))?;
            trace!(source = name, target = %renamed, "renamed identifier");
            renamed.into()
        } else {
            base.into()
        };
        let env = Self {
            names: self.names.update(Arc::from(name), Arc::clone(&target)),
            taken: self.taken.update(Arc::clone(&target)),
        };
        Ok((env, target))
    }

    /// Claims `target` without binding a source name, or `None` if it is
    /// already taken.
    #[must_use]
    pub fn reserve(&self, target: &str) -> Option<Self> {
        if self.is_taken(target) {
            return None;
        }
        Some(Self {
            names: self.names.clone(),
            taken: self.taken.update(Arc::from(target)),
        })
    }

    /// Number of bound source names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if no source names are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

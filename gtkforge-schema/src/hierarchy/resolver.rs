//! Ancestor chain resolution.

use super::{AncestorLookup, ClassKey, target_path};
use crate::error::HierarchyError;
use std::collections::HashSet;

/// Deduplicated ancestor chain in Rust path form, nearest class first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestorChain {
    entries: Vec<String>,
}

impl AncestorChain {
    /// Creates a chain from paths, dropping repeats but keeping first-seen order.
    #[must_use]
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let entries = paths
            .into_iter()
            .map(Into::into)
            .filter(|p: &String| !p.is_empty() && seen.insert(p.clone()))
            .collect();
        Self { entries }
    }

    /// Creates the one-element chain used when lookup fails.
    #[must_use]
    pub fn single(designator: impl Into<String>) -> Self {
        Self {
            entries: vec![designator.into()],
        }
    }

    /// Returns the chain entries.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the chain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries joined for an `@extends` list.
    #[must_use]
    pub fn to_extends_list(&self) -> String {
        self.entries.join(", ")
    }
}

/// Resolves parent designators into [`AncestorChain`]s.
pub struct HierarchyResolver<'a> {
    lookup: &'a dyn AncestorLookup,
}

impl<'a> HierarchyResolver<'a> {
    /// Creates a resolver over a lookup.
    #[must_use]
    pub fn new(lookup: &'a dyn AncestorLookup) -> Self {
        Self { lookup }
    }

    /// Resolves a designator, falling back to a one-element chain.
    ///
    /// The fallback entry is the designator in Rust path form. Lookup
    /// failures are logged and never returned: the chain only feeds the
    /// `@extends` list and forwarding impls.
    #[must_use]
    pub fn resolve(&self, designator: &str) -> AncestorChain {
        match self.try_resolve(designator) {
            Ok(chain) => {
                tracing::debug!(parent = designator, chain = ?chain.entries(), "resolved hierarchy");
                chain
            }
            Err(e) => {
                tracing::warn!(parent = designator, error = %e, "hierarchy lookup failed, using parent only");
                AncestorChain::single(target_path(designator))
            }
        }
    }

    /// Resolves a designator, reporting lookup failures.
    ///
    /// # Errors
    /// Returns `HierarchyError` if the designator has no namespace, the
    /// lookup fails or yields nothing.
    pub fn try_resolve(&self, designator: &str) -> Result<AncestorChain, HierarchyError> {
        let key = ClassKey::from_designator(designator)?;
        let ancestors = self.lookup.ancestors_of(&key)?;
        let chain = AncestorChain::from_paths(ancestors.iter().map(ClassKey::rust_path));
        if chain.is_empty() {
            return Err(HierarchyError::Empty {
                class: key.to_string(),
            });
        }
        Ok(chain)
    }
}

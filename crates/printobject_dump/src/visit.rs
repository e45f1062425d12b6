//! Tracking of visited identities during one dump.

use printobject_foundation::{Identity, Value};

/// How visited identities propagate through the traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitPolicy {
    /// Each branch gets its own copy; only ancestors count as visited.
    Path,
    /// One set is shared by the whole dump and never shrinks.
    Collapse,
}

/// Identities already visited in the current dump.
///
/// Each entry holds a handle to the visited value, so its allocation cannot
/// be freed and its address reused by another instance while the set is
/// alive. Backed by a persistent map, so [`VisitSet::with`] is a cheap
/// copy-on-write branch.
#[derive(Clone, Debug, Default)]
pub struct VisitSet(im::HashMap<Identity, Value>);

impl VisitSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the identity has been visited.
    #[must_use]
    pub fn contains(&self, id: Identity) -> bool {
        self.0.contains_key(&id)
    }

    /// Records `value` under `id` in place.
    pub fn insert(&mut self, id: Identity, value: &Value) {
        self.0.insert(id, value.clone());
    }

    /// Returns a branch of this set that also records `value` under `id`.
    #[must_use]
    pub fn with(&self, id: Identity, value: &Value) -> Self {
        Self(self.0.update(id, value.clone()))
    }

    /// Returns the number of visited identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing has been visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

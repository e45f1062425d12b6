//! Small integer labels for rendered instances.

use std::collections::HashMap;

use printobject_foundation::{Identity, Value};

/// Maps identities to labels in order of first request.
///
/// Entries are never removed, and each one keeps a handle to the labelled
/// value. A labelled instance therefore stays alive as long as the index,
/// and no other instance can take over its identity and label. Not
/// thread-safe; use external synchronization if needed.
#[derive(Clone, Debug, Default)]
pub struct LabelIndex {
    labels: HashMap<Identity, (usize, Value)>,
}

impl LabelIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the label for `value`, assigning the next one on first request.
    pub fn label(&mut self, id: Identity, value: &Value) -> usize {
        let next = self.labels.len();
        self.labels.entry(id).or_insert_with(|| (next, value.clone())).0
    }

    /// Returns the label for `id` without assigning one.
    #[must_use]
    pub fn get(&self, id: Identity) -> Option<usize> {
        self.labels.get(&id).map(|(label, _)| *label)
    }

    /// Returns the number of labelled identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if nothing has been labelled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

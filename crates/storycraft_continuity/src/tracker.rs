//! Dirty-scene tracking between regenerations.

use std::collections::BTreeSet;

/// Scene indexes hand-edited since the last successful regeneration.
///
/// The tracker accumulates across edits and clears only when a
/// regeneration succeeds; a failed call leaves it intact so the user can
/// retry. An ordered set keeps the anchor (the minimum) cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTracker {
    dirty: BTreeSet<usize>,
}

impl EditTracker {
    /// New tracker with no pending edits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hand-edit at the given scene index.
    pub fn mark(&mut self, index: usize) {
        self.dirty.insert(index);
    }

    /// Whether any edits are pending.
    pub fn is_empty(&self) -> bool {
        self.dirty.is_empty()
    }

    /// Number of distinct dirty indexes.
    pub fn len(&self) -> usize {
        self.dirty.len()
    }

    /// Whether the given index is dirty.
    pub fn contains(&self, index: usize) -> bool {
        self.dirty.contains(&index)
    }

    /// The earliest dirty index; regeneration starts immediately after it.
    pub fn anchor(&self) -> Option<usize> {
        self.dirty.first().copied()
    }

    /// Dirty indexes in ascending order.
    pub fn indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.dirty.iter().copied()
    }

    /// Forget all pending edits (after a successful regeneration).
    pub fn clear(&mut self) {
        self.dirty.clear();
    }
}

//! Comparator output types.

use serde::{Deserialize, Serialize};

use crate::model::ItemRef;

/// The classified delta between two back-reference snapshots
///
/// Derived and transient: computed per notification and never stored.
/// All three lists are always populated (possibly empty) so downstream
/// processing stays uniform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeSet {
    /// Items referencing the entity in `after` but not `before`
    pub added: Vec<ItemRef>,
    /// Items referencing the entity in `before` but not `after`
    pub removed: Vec<ItemRef>,
    /// Always empty: in-place text edits are not classified (documented
    /// limitation, kept for shape stability)
    pub modified: Vec<ItemRef>,
}

impl ChangeSet {
    /// True when no additions or removals were detected
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }
}

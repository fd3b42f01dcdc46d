//! Snapshot delta computation.
//!
//! The entry point is [`diff`], which partitions two referencing-item
//! snapshots into a [`ChangeSet`].

use std::collections::BTreeSet;

use crate::diff::model::ChangeSet;
use crate::model::Snapshot;

/// Compute the added/removed partition between two snapshots
///
/// Identifier equality is exact-match on the stable id field. Items present
/// on both sides are never reported, even when their text differs
/// (`modified` stays empty by design). Order within each output list follows
/// the order of the corresponding input list.
pub fn diff(before: &Snapshot, after: &Snapshot) -> ChangeSet {
    let before_ids: BTreeSet<&str> = before.refs.iter().map(|r| r.id.as_str()).collect();
    let after_ids: BTreeSet<&str> = after.refs.iter().map(|r| r.id.as_str()).collect();

    let added = after
        .refs
        .iter()
        .filter(|r| !before_ids.contains(r.id.as_str()))
        .cloned()
        .collect();
    let removed = before
        .refs
        .iter()
        .filter(|r| !after_ids.contains(r.id.as_str()))
        .cloned()
        .collect();

    ChangeSet {
        added,
        removed,
        modified: Vec::new(),
    }
}

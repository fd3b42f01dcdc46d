use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::item::ItemRef;

/// One side of a change notification: the watched entity's referencing items
///
/// The host delivers an immutable `(before, after)` pair of these on every
/// change to the watched entity's back-reference set. A snapshot is never
/// retained past the handling of a single notification.
///
/// Absence of the `refs` field is not an error; it deserializes to the empty
/// list, matching a watched page that nothing references yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Items currently referencing the watched entity
    #[serde(default)]
    pub refs: Vec<ItemRef>,
}

impl Snapshot {
    /// Snapshot with no referencing items
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from the given referencing items
    pub fn from_refs(refs: Vec<ItemRef>) -> Self {
        Self { refs }
    }

    /// Parse a raw notification payload, degrading to empty on malformed input
    ///
    /// Notifications with a missing or wrongly-shaped `refs` field are
    /// treated as the empty referencing set rather than raised as errors;
    /// a malformed notification aborts nothing.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// True when no items reference the watched entity
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

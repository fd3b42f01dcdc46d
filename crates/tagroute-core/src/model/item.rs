use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Referencing-item descriptor carried in change notifications
///
/// The minimal projection of a host item that the comparator and the engine
/// need: its stable identifier and its text at notification time. Never
/// cached across notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    /// Stable host identifier
    pub id: String,
    /// Textual content at the time of the notification
    #[serde(default)]
    pub text: String,
}

impl ItemRef {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Read model for a single host item
///
/// Every item has one immediate container (`parent_id`) and an ordered
/// position among its siblings. Root pages have no container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Stable host identifier
    pub id: String,
    /// Mutable text content
    pub text: String,
    /// Immediate container; None for root pages
    pub parent_id: Option<String>,
    /// Position among siblings (ascending)
    pub order: u32,
    /// When the item was last mutated (text, container, or position)
    pub updated_at: DateTime<Utc>,
}

impl ItemRecord {
    /// True when this item is a root page (has no container)
    pub fn is_page(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Target position for create/move requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOrder {
    /// Exact sibling position
    Exact(u32),
    /// Append after the last existing sibling
    Last,
}

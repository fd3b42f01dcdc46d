use serde::{Deserialize, Serialize};

/// The reference form left behind (or the move action) when a rule fires
///
/// A closed enumeration so the reference formatter's mapping is exhaustive
/// and compiler-checked. Persisted values outside the known set deserialize
/// to `BlockRef`, which keeps old rule lists loadable after the set grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefKind {
    /// Inline embed: `{{embed: ((id))}}`
    Embed,
    /// Embed with breadcrumb path: `{{embed-path: ((id))}}`
    EmbedPath,
    /// Embed of the item's children only: `{{embed-children: ((id))}}`
    EmbedChildren,
    /// Move the item itself instead of referencing it
    MoveBlock,
    /// Plain block reference: `((id))`
    ///
    /// The fallback for unrecognized persisted values; `#[serde(other)]`
    /// requires it to sit last in the enum.
    #[default]
    #[serde(other)]
    BlockRef,
}

impl RefKind {
    /// True when this kind triggers move semantics rather than copy semantics
    pub fn is_move(&self) -> bool {
        matches!(self, RefKind::MoveBlock)
    }
}

/// Rule - a user-authored routing policy
///
/// A rule watches for items tagged with `tag` and routes each new one to
/// `destination_id` using the action selected by `reference_kind`. Within an
/// active rule set a rule is identified by its tag: at most one live
/// subscription exists per tag.
///
/// Rules are persisted as an ordered JSON list with no schema versioning;
/// fields added later must deserialize to defaults when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// The label whose appearance triggers this rule (non-empty)
    pub tag: String,

    /// Identifier of the container item or page receiving output
    ///
    /// Existence is re-checked every time the rule fires, not just at
    /// creation.
    pub destination_id: String,

    /// Textual form left behind, or move semantics for `MoveBlock`
    #[serde(default)]
    pub reference_kind: RefKind,

    /// Leave a `((id))` back-reference at the vacated position
    ///
    /// Only meaningful when `reference_kind` is `MoveBlock`.
    #[serde(default = "default_true")]
    pub leave_back_reference: bool,
}

fn default_true() -> bool {
    true
}

impl Rule {
    /// Create a copy-reference rule with default settings
    pub fn new(tag: impl Into<String>, destination_id: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            destination_id: destination_id.into(),
            reference_kind: RefKind::default(),
            leave_back_reference: true,
        }
    }

    /// Builder-style override of the reference kind
    pub fn with_kind(mut self, kind: RefKind) -> Self {
        self.reference_kind = kind;
        self
    }

    /// Builder-style override of the back-reference flag
    pub fn with_back_reference(mut self, leave: bool) -> Self {
        self.leave_back_reference = leave;
        self
    }
}

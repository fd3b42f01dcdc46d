use crate::model::RefKind;

/// Render the textual reference form a rule leaves behind
///
/// `MoveBlock` renders the plain block-reference form: the moved item is
/// referenced that way in its back-reference, never embedded.
pub fn render_reference(item_id: &str, kind: RefKind) -> String {
    match kind {
        RefKind::BlockRef | RefKind::MoveBlock => format!("(({item_id}))"),
        RefKind::Embed => format!("{{{{embed: (({item_id}))}}}}"),
        RefKind::EmbedPath => format!("{{{{embed-path: (({item_id}))}}}}"),
        RefKind::EmbedChildren => format!("{{{{embed-children: (({item_id}))}}}}"),
    }
}

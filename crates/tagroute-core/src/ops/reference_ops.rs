use crate::errors::{Result, RouteError};
use crate::host::HostStore;
use crate::markup::{render_reference, strip_tag};
use crate::model::{ItemOrder, ItemRef, Rule};

/// Leave a reference to the triggering item at the rule's destination
///
/// Creates a new item at the destination (appended last) whose text is the
/// rule's reference form for the triggering item, then strips the rule's tag
/// from the triggering item's own text.
///
/// Returns the id of the created reference item.
///
/// # Errors
/// * `DestinationMissing` - destination vanished since rule creation
/// * Any host error from the create or update requests
pub fn copy_reference(host: &mut dyn HostStore, item: &ItemRef, rule: &Rule) -> Result<String> {
    if host.read_item(&rule.destination_id).is_none() {
        return Err(RouteError::DestinationMissing {
            destination_id: rule.destination_id.clone(),
        });
    }

    let ref_text = render_reference(&item.id, rule.reference_kind);
    let ref_id = host.create_item(&rule.destination_id, ItemOrder::Last, &ref_text)?;

    let stripped = strip_tag(&item.text, &rule.tag);
    if stripped != item.text {
        host.update_item(&item.id, &stripped)?;
    }

    Ok(ref_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use crate::model::RefKind;

    #[test]
    fn test_copy_reference_creates_ref_and_strips_tag() {
        let mut host = MemoryHost::new();
        host.add_page("inbox-page", "Inbox");
        host.add_page("page-x", "Destination");
        host.add_block("b1", "inbox-page", 0, "Call Dana #Inbox");

        let rule = Rule::new("Inbox", "page-x");
        let item = ItemRef::new("b1", "Call Dana #Inbox");

        let ref_id = copy_reference(&mut host, &item, &rule).unwrap();

        let created = host.read_item(&ref_id).unwrap();
        assert_eq!(created.text, "((b1))");
        assert_eq!(created.parent_id.as_deref(), Some("page-x"));

        assert_eq!(host.read_item("b1").unwrap().text, "Call Dana");
    }

    #[test]
    fn test_copy_reference_embed_form() {
        let mut host = MemoryHost::new();
        host.add_page("p", "P");
        host.add_page("d", "D");
        host.add_block("b1", "p", 0, "note #Clip");

        let rule = Rule::new("Clip", "d").with_kind(RefKind::Embed);
        let item = ItemRef::new("b1", "note #Clip");

        let ref_id = copy_reference(&mut host, &item, &rule).unwrap();
        assert_eq!(host.read_item(&ref_id).unwrap().text, "{{embed: ((b1))}}");
    }

    #[test]
    fn test_copy_reference_missing_destination() {
        let mut host = MemoryHost::new();
        host.add_page("p", "P");
        host.add_block("b1", "p", 0, "x #T");

        let rule = Rule::new("T", "gone");
        let result = copy_reference(&mut host, &ItemRef::new("b1", "x #T"), &rule);
        assert!(matches!(result, Err(RouteError::DestinationMissing { .. })));
    }

    #[test]
    fn test_copy_reference_skips_update_when_tag_absent() {
        // The snapshot text may already be clean (e.g. resync after a crash)
        let mut host = MemoryHost::new();
        host.add_page("p", "P");
        host.add_page("d", "D");
        host.add_block("b1", "p", 0, "already clean");

        let rule = Rule::new("T", "d");
        copy_reference(&mut host, &ItemRef::new("b1", "already clean"), &rule).unwrap();
        assert_eq!(host.read_item("b1").unwrap().text, "already clean");
    }
}

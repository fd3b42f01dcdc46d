use std::collections::HashSet;

use crate::host::HostStore;

/// Resolve an item's immediate container and sibling order
///
/// Returns `None` for root pages (no container) and for unknown items;
/// callers treat both as "unknown/absent", not as distinguishable errors.
/// An item sitting directly under a page reports the page as its container.
pub fn immediate_container(host: &dyn HostStore, item_id: &str) -> Option<(String, u32)> {
    let item = host.read_item(item_id)?;
    item.parent_id.map(|parent| (parent, item.order))
}

/// True iff `candidate_id` appears anywhere in `item_id`'s ancestor chain
///
/// Walks parent pointers upward. Host graphs are acyclic by construction, so
/// the walk is bounded by nesting depth; the visited set guards against a
/// corrupted chain looping forever. Any lookup failure terminates the walk
/// with a negative result.
pub fn is_ancestor_of(host: &dyn HostStore, candidate_id: &str, item_id: &str) -> bool {
    let mut visited: HashSet<String> = HashSet::new();
    let mut current = match host.read_item(item_id) {
        Some(item) => item.parent_id,
        None => return false,
    };

    while let Some(id) = current {
        if id == candidate_id {
            return true;
        }
        if !visited.insert(id.clone()) {
            return false;
        }
        current = host.read_item(&id).and_then(|item| item.parent_id);
    }

    false
}

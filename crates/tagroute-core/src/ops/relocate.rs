use tracing::warn;

use crate::errors::{Result, RouteError};
use crate::host::HostStore;
use crate::markup::render_reference;
use crate::model::{ItemOrder, RefKind, Rule};
use crate::traversal::{immediate_container, is_ancestor_of};

/// Move an item to a rule's destination, optionally leaving a back-reference
///
/// Steps, short-circuiting on the first failure:
/// 1. Cycle guard: moving an item into its own descendant subtree is
///    forbidden and rejected before any mutation (self-moves included).
/// 2. When the rule leaves a back-reference, resolve the item's current
///    container and order; fail if the item vanished.
/// 3. Verify the destination still exists.
/// 4. Move the item to the destination, appended last.
/// 5. Create the `((id))` back-reference at the vacated container/order.
///
/// Once step 4 has committed the move, a failing step 5 is logged and the
/// relocation still reports success: the item has reached its destination
/// and a fallback copy would double-handle it. Best-effort, not atomic.
///
/// # Errors
/// * `CycleDetected` - destination is the item itself or inside its subtree
/// * `ContainerUnresolved` - back-reference requested but item not found
/// * `DestinationMissing` - destination vanished since rule creation
/// * Any host error from the move itself
pub fn relocate(host: &mut dyn HostStore, item_id: &str, rule: &Rule) -> Result<()> {
    let destination_id = rule.destination_id.as_str();

    // Cycle guard, before any mutation
    if item_id == destination_id || is_ancestor_of(host, item_id, destination_id) {
        return Err(RouteError::CycleDetected {
            item_id: item_id.to_string(),
            destination_id: destination_id.to_string(),
        });
    }

    // Resolve the vacated position up front; the move invalidates it
    let origin = if rule.leave_back_reference {
        match immediate_container(host, item_id) {
            Some(origin) => Some(origin),
            None => {
                return Err(RouteError::ContainerUnresolved {
                    item_id: item_id.to_string(),
                })
            }
        }
    } else {
        None
    };

    if host.read_item(destination_id).is_none() {
        return Err(RouteError::DestinationMissing {
            destination_id: destination_id.to_string(),
        });
    }

    host.move_item(item_id, destination_id, ItemOrder::Last)?;

    if let Some((container_id, order)) = origin {
        let back_ref = render_reference(item_id, RefKind::BlockRef);
        if let Err(err) = host.create_item(&container_id, ItemOrder::Exact(order), &back_ref) {
            warn!(
                item_id,
                container_id,
                error = %err,
                "move committed but back-reference creation failed"
            );
        }
    }

    Ok(())
}

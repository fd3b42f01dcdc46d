//! Host-store abstraction.
//!
//! The document graph, its query/subscription primitives, and the settings
//! store are external collaborators. This module defines the narrow trait
//! contracts TagRoute consumes them through, plus an in-memory
//! implementation used by tests and embedders.
//!
//! Subscriptions are owned resources: whoever calls [`HostStore::subscribe`]
//! is responsible for a matching [`HostStore::unsubscribe`] before the
//! subscriber goes away, otherwise the host will invoke stale callbacks.

pub mod memory;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Result;
use crate::model::{ItemOrder, ItemRecord, Snapshot};

pub use memory::{MemoryHost, MemorySettings};

/// Compiled subscription target: a pull pattern scoped to one entity
///
/// Deterministically derived from a rule's tag; two rules with the same tag
/// always compile to the same target. The host assumes exactly one live
/// handler per `(pull_pattern, entity)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WatchTarget {
    /// Shape of the data to pull: identifier, text, back-reference closure
    pub pull_pattern: String,
    /// Entity reference the pattern is scoped to
    pub entity: String,
}

/// Opaque host-issued subscription handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WatchHandle(pub u64);

/// Contract with the host document store
///
/// Mutations are sequential per notification: each request completes (or
/// fails) before the next dependent request is issued, so a later step can
/// rely on an earlier step's success.
pub trait HostStore {
    /// Register a watch on the target; the host will deliver
    /// `(before, after)` snapshot pairs for it until unsubscribed
    fn subscribe(&mut self, target: &WatchTarget) -> WatchHandle;

    /// Remove a previously registered watch; unknown handles are ignored
    fn unsubscribe(&mut self, target: &WatchTarget, handle: WatchHandle);

    /// Read a single item; `None` when it does not exist
    fn read_item(&self, id: &str) -> Option<ItemRecord>;

    /// Read the target's current referencing set (the present pull state,
    /// independent of any notification)
    fn read_refs(&self, target: &WatchTarget) -> Snapshot;

    /// Create an item under `container_id` at the given position; returns
    /// the new item's id
    fn create_item(&mut self, container_id: &str, order: ItemOrder, text: &str) -> Result<String>;

    /// Replace an item's text
    fn update_item(&mut self, id: &str, text: &str) -> Result<()>;

    /// Reassign an item's container and position
    fn move_item(&mut self, id: &str, container_id: &str, order: ItemOrder) -> Result<()>;
}

/// Contract with the host's persistent key-value settings store
pub trait SettingsStore {
    /// Read a stored value; `None` when the key has never been written
    fn get(&self, key: &str) -> Option<Value>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: Value);
}

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use super::{HostStore, SettingsStore, WatchHandle, WatchTarget};
use crate::errors::{Result, RouteError};
use crate::markup::mentions_tag;
use crate::model::{ItemOrder, ItemRecord, ItemRef, Snapshot};

/// A stored item in the in-memory graph
#[derive(Debug, Clone)]
struct StoredItem {
    id: String,
    text: String,
    parent_id: Option<String>,
    order: u32,
    updated_at: DateTime<Utc>,
}

/// In-memory host store
///
/// A simple HashMap-based document graph for tests and embedders. Not
/// thread-safe (no Arc/RwLock) - designed for single-threaded use, matching
/// the engine's event-driven model.
///
/// Notification delivery is driven by the caller: mutate the graph, then
/// hand `(before, after)` pairs from [`MemoryHost::read_refs`] to the
/// engine. Move invocations are counted so tests can assert that the cycle
/// guard fires before any mutation.
#[derive(Debug, Default)]
pub struct MemoryHost {
    items: HashMap<String, StoredItem>,
    watches: HashMap<WatchHandle, WatchTarget>,
    next_handle: u64,
    move_calls: u64,
}

impl MemoryHost {
    /// Create a new empty host
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a root page whose text is its title
    pub fn add_page(&mut self, id: &str, title: &str) {
        self.items.insert(
            id.to_string(),
            StoredItem {
                id: id.to_string(),
                text: title.to_string(),
                parent_id: None,
                order: 0,
                updated_at: Utc::now(),
            },
        );
    }

    /// Insert a block under an existing container at the given order
    pub fn add_block(&mut self, id: &str, parent_id: &str, order: u32, text: &str) {
        self.items.insert(
            id.to_string(),
            StoredItem {
                id: id.to_string(),
                text: text.to_string(),
                parent_id: Some(parent_id.to_string()),
                order,
                updated_at: Utc::now(),
            },
        );
    }

    /// All items referencing the tag, in insertion-independent (id-sorted) order
    ///
    /// Stands in for the host's back-reference closure: every block whose
    /// text mentions the tag in any markup form.
    pub fn referencing_items(&self, tag: &str) -> Snapshot {
        let mut refs: Vec<ItemRef> = self
            .items
            .values()
            .filter(|item| item.parent_id.is_some() && mentions_tag(&item.text, tag))
            .map(|item| ItemRef::new(item.id.clone(), item.text.clone()))
            .collect();
        refs.sort_by(|a, b| a.id.cmp(&b.id));
        Snapshot::from_refs(refs)
    }

    /// Direct children of a container, sorted by order
    pub fn children_of(&self, container_id: &str) -> Vec<ItemRecord> {
        let mut children: Vec<ItemRecord> = self
            .items
            .values()
            .filter(|item| item.parent_id.as_deref() == Some(container_id))
            .map(record)
            .collect();
        children.sort_by_key(|c| c.order);
        children
    }

    /// Number of live watches
    pub fn watch_count(&self) -> usize {
        self.watches.len()
    }

    /// Number of move requests issued so far
    pub fn move_count(&self) -> u64 {
        self.move_calls
    }

    fn resolve_order(&self, container_id: &str, order: ItemOrder) -> u32 {
        match order {
            ItemOrder::Exact(n) => n,
            ItemOrder::Last => self
                .items
                .values()
                .filter(|item| item.parent_id.as_deref() == Some(container_id))
                .map(|item| item.order + 1)
                .max()
                .unwrap_or(0),
        }
    }
}

fn record(item: &StoredItem) -> ItemRecord {
    ItemRecord {
        id: item.id.clone(),
        text: item.text.clone(),
        parent_id: item.parent_id.clone(),
        order: item.order,
        updated_at: item.updated_at,
    }
}

/// Extract the title from an entity ref of the form `[:node/title "..."]`
fn entity_title(entity: &str) -> Option<&str> {
    let start = entity.find('"')? + 1;
    let end = entity.rfind('"')?;
    (start <= end).then(|| &entity[start..end])
}

impl HostStore for MemoryHost {
    fn subscribe(&mut self, target: &WatchTarget) -> WatchHandle {
        self.next_handle += 1;
        let handle = WatchHandle(self.next_handle);
        self.watches.insert(handle, target.clone());
        handle
    }

    fn unsubscribe(&mut self, _target: &WatchTarget, handle: WatchHandle) {
        self.watches.remove(&handle);
    }

    fn read_item(&self, id: &str) -> Option<ItemRecord> {
        self.items.get(id).map(record)
    }

    fn read_refs(&self, target: &WatchTarget) -> Snapshot {
        match entity_title(&target.entity) {
            Some(tag) => self.referencing_items(tag),
            None => Snapshot::empty(),
        }
    }

    fn create_item(&mut self, container_id: &str, order: ItemOrder, text: &str) -> Result<String> {
        if !self.items.contains_key(container_id) {
            return Err(RouteError::ItemNotFound {
                item_id: container_id.to_string(),
            });
        }
        let id = Uuid::now_v7().to_string();
        let order = self.resolve_order(container_id, order);
        self.items.insert(
            id.clone(),
            StoredItem {
                id: id.clone(),
                text: text.to_string(),
                parent_id: Some(container_id.to_string()),
                order,
                updated_at: Utc::now(),
            },
        );
        Ok(id)
    }

    fn update_item(&mut self, id: &str, text: &str) -> Result<()> {
        let item = self.items.get_mut(id).ok_or_else(|| RouteError::ItemNotFound {
            item_id: id.to_string(),
        })?;
        item.text = text.to_string();
        item.updated_at = Utc::now();
        Ok(())
    }

    fn move_item(&mut self, id: &str, container_id: &str, order: ItemOrder) -> Result<()> {
        self.move_calls += 1;
        if !self.items.contains_key(container_id) {
            return Err(RouteError::ItemNotFound {
                item_id: container_id.to_string(),
            });
        }
        let order = self.resolve_order(container_id, order);
        let item = self.items.get_mut(id).ok_or_else(|| RouteError::ItemNotFound {
            item_id: id.to_string(),
        })?;
        item.parent_id = Some(container_id.to_string());
        item.order = order;
        item.updated_at = Utc::now();
        Ok(())
    }
}

/// In-memory settings store
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: HashMap<String, Value>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }
}

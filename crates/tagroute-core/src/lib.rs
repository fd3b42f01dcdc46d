//! TagRoute Core - rule-driven block routing for graph outliners
//!
//! This crate provides the reactive core shared by every TagRoute frontend,
//! including:
//! - Rule and snapshot models with forward-compatible serialization
//! - Tag markup transforms (strip, mention detection, reference rendering)
//! - The change comparator that classifies back-reference deltas
//! - Ancestry traversal over the host's containment chain
//! - The relocator (move-with-backreference, cycle-guarded)
//! - The rule compiler producing deterministic subscription targets
//! - The host-store abstraction plus an in-memory implementation
//!
//! Orchestration (subscription ownership, dispatch, settings persistence)
//! lives in `tagroute-engine`.

pub mod diff;
pub mod errors;
pub mod host;
pub mod logging_facility;
pub mod markup;
pub mod model;
pub mod ops;
pub mod rules;
pub mod traversal;

// Re-export commonly used types
pub use diff::{diff, ChangeSet};
pub use errors::{Result, RouteError};
pub use host::{HostStore, MemoryHost, MemorySettings, SettingsStore, WatchHandle, WatchTarget};
pub use model::{ItemOrder, ItemRecord, ItemRef, RefKind, Rule, Snapshot};

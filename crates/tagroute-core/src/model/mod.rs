pub mod item;
pub mod rule;
pub mod snapshot;

pub use item::{ItemOrder, ItemRecord, ItemRef};
pub use rule::{RefKind, Rule};
pub use snapshot::Snapshot;

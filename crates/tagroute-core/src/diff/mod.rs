//! Change comparator.
//!
//! Classifies the delta between two back-reference snapshots of a watched
//! entity into an added/removed partition.
//!
//! ## Guarantees
//!
//! - **Determinism**: input order is preserved in the output lists.
//! - **Graceful degradation**: an absent or malformed referencing list is
//!   treated as empty, never as an error.
//! - **`modified` is permanently empty**: text edits to items that already
//!   reference the watched entity are not detected by this design.

pub mod engine;
pub mod model;

pub use engine::diff;
pub use model::ChangeSet;

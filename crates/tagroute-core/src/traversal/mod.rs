pub mod ancestry;

pub use ancestry::{immediate_container, is_ancestor_of};

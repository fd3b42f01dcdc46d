pub mod reference_ops;
pub mod relocate;

pub use reference_ops::copy_reference;
pub use relocate::relocate;

pub mod compile;
pub mod validation;

pub use compile::compile;
pub use validation::validate_rule;

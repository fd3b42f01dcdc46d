//! TagRoute Engine - Orchestration layer
//!
//! Owns the active rule set and its subscriptions, dispatches change
//! notifications to the core's relocator and reference ops, and persists
//! rules through the host's settings store.

pub mod engine;
pub mod settings;

pub use engine::RuleEngine;
pub use settings::{load_rules, save_rules, RULES_KEY};

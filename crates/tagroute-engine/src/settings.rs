//! Rule persistence through the host's settings store.
//!
//! Rules are stored as an ordered JSON list under a single stable key.
//! There is no schema versioning: fields added to [`Rule`] later must
//! deserialize to defaults when absent, which `Rule`'s serde derives
//! guarantee.

use serde_json::Value;

use tagroute_core::{Result, Rule, SettingsStore};

/// Settings key holding the persisted rule list
pub const RULES_KEY: &str = "block_routing_rules";

/// Load the persisted rule list
///
/// A key that has never been written loads as the empty rule set.
///
/// # Errors
/// Returns `Serialization` when the stored value is not a valid rule list.
pub fn load_rules(settings: &dyn SettingsStore) -> Result<Vec<Rule>> {
    match settings.get(RULES_KEY) {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(Vec::new()),
    }
}

/// Persist the rule list, replacing any previous one
///
/// # Errors
/// Returns `Serialization` when the rules cannot be encoded (practically
/// unreachable for `Rule`, kept for contract symmetry).
pub fn save_rules(settings: &mut dyn SettingsStore, rules: &[Rule]) -> Result<()> {
    let value: Value = serde_json::to_value(rules)?;
    settings.set(RULES_KEY, value);
    Ok(())
}

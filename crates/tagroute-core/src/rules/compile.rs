use crate::host::WatchTarget;
use crate::model::Rule;

/// Pull pattern requesting an item's identifier, text, and the full
/// back-reference closure of the watched entity.
const REF_CLOSURE_PATTERN: &str =
    "[:block/_refs :block/uid :node/title {:block/_refs [:block/uid :block/string]}]";

/// Compile a rule into its subscription target
///
/// Deterministic and pure: the target depends only on the rule's tag, so two
/// rules with the same tag always compile to the same target. The engine
/// relies on this for its one-subscription-per-tag invariant.
pub fn compile(rule: &Rule) -> WatchTarget {
    WatchTarget {
        pull_pattern: REF_CLOSURE_PATTERN.to_string(),
        entity: format!("[:node/title \"{}\"]", rule.tag),
    }
}

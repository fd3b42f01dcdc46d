//! The rule engine: subscription ownership and notification dispatch.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use tagroute_core::markup::strip_tag;
use tagroute_core::ops::{copy_reference, relocate};
use tagroute_core::rules::{compile, validate_rule};
use tagroute_core::{
    diff, log_op_end, log_op_error, log_op_start, HostStore, ItemRef, Result, Rule, Snapshot,
    WatchHandle, WatchTarget,
};

/// One installed rule: the rule itself, its compiled target, and the live
/// subscription handle issued by the host
#[derive(Debug, Clone)]
struct WatchEntry {
    rule: Rule,
    target: WatchTarget,
    handle: WatchHandle,
}

/// Owns the active rule set and one live subscription per tag
///
/// Constructed once per process lifetime and torn down explicitly; there is
/// no ambient registry. The tag→subscription map is mutated only by
/// [`RuleEngine::add_rule`], [`RuleEngine::remove_rule`] and
/// [`RuleEngine::teardown`] (single-writer discipline: rule edits originate
/// from one UI interaction at a time).
///
/// Every failure inside notification handling is logged and scoped to that
/// single notification; the rule stays active for future notifications and
/// nothing is retried automatically.
#[derive(Debug, Default)]
pub struct RuleEngine {
    watches: HashMap<String, WatchEntry>,
}

impl RuleEngine {
    /// Create an engine with no rules installed
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active rules
    pub fn rule_count(&self) -> usize {
        self.watches.len()
    }

    /// Look up the active rule for a tag
    pub fn rule(&self, tag: &str) -> Option<&Rule> {
        self.watches.get(tag).map(|entry| &entry.rule)
    }

    /// The live subscription handle for a tag, if installed
    pub fn handle_for(&self, tag: &str) -> Option<WatchHandle> {
        self.watches.get(tag).map(|entry| entry.handle)
    }

    /// Validate, compile, and install a rule
    ///
    /// Replacing an existing rule for the same tag uninstalls the old
    /// subscription first, so a tag never has duplicate handlers.
    ///
    /// # Errors
    /// Returns `InvalidRule` when the rule fails validation; nothing is
    /// installed in that case and the caller surfaces a declined operation.
    pub fn add_rule(&mut self, host: &mut dyn HostStore, rule: Rule) -> Result<()> {
        log_op_start!("add_rule", tag = %rule.tag);
        if let Err(err) = validate_rule(&rule) {
            log_op_error!("add_rule", err);
            return Err(err);
        }

        if let Some(old) = self.watches.remove(&rule.tag) {
            host.unsubscribe(&old.target, old.handle);
        }

        let target = compile(&rule);
        let handle = host.subscribe(&target);
        self.watches.insert(
            rule.tag.clone(),
            WatchEntry {
                rule,
                target,
                handle,
            },
        );
        log_op_end!("add_rule");
        Ok(())
    }

    /// Uninstall the rule for a tag; no-op when none is installed
    pub fn remove_rule(&mut self, host: &mut dyn HostStore, tag: &str) {
        if let Some(entry) = self.watches.remove(tag) {
            host.unsubscribe(&entry.target, entry.handle);
            info!(tag, "rule removed");
        }
    }

    /// Install persisted rules in order, skipping (and logging) invalid ones
    pub fn load_persisted_rules(&mut self, host: &mut dyn HostStore, rules: Vec<Rule>) {
        for rule in rules {
            let tag = rule.tag.clone();
            if let Err(err) = self.add_rule(host, rule) {
                warn!(tag, error = %err, "skipping persisted rule");
            }
        }
    }

    /// Handle a change notification from the host
    ///
    /// Classifies the snapshot delta and processes only the first added
    /// item: bursts of simultaneous additions are handled one-at-a-time
    /// across separate notifications, never batched. Notifications for
    /// unknown handles (e.g. delivered after a rule was removed) are
    /// dropped.
    pub fn on_notification(
        &self,
        host: &mut dyn HostStore,
        handle: WatchHandle,
        before: &Snapshot,
        after: &Snapshot,
    ) {
        let Some(entry) = self.watches.values().find(|e| e.handle == handle) else {
            debug!(?handle, "notification for unknown watch handle, dropping");
            return;
        };

        let changes = diff(before, after);
        let Some(item) = changes.added.first() else {
            return;
        };

        info!(tag = %entry.rule.tag, item_id = %item.id, "rule triggered");
        process_item(host, &entry.rule, item);
    }

    /// Process the tag's entire current referencing set
    ///
    /// Used when a rule is (re-)enabled: routes every item that already
    /// carries the tag, in sequence. Unlike change notifications, a resync
    /// is not subject to the first-item-only policy.
    pub fn resync(&self, host: &mut dyn HostStore, tag: &str) {
        let Some(entry) = self.watches.get(tag) else {
            return;
        };

        let current = host.read_refs(&entry.target);
        info!(tag, items = current.refs.len(), "resync started");
        for item in &current.refs {
            process_item(host, &entry.rule, item);
        }
    }

    /// Uninstall every live subscription and clear internal state
    ///
    /// Idempotent and safe to call with no rules installed.
    pub fn teardown(&mut self, host: &mut dyn HostStore) {
        log_op_start!("teardown", rules = self.watches.len());
        for (_, entry) in self.watches.drain() {
            host.unsubscribe(&entry.target, entry.handle);
        }
        log_op_end!("teardown");
    }
}

/// Route one triggering item according to the rule's action
///
/// Move semantics fall back to copy-reference when relocation fails before
/// the move itself commits. On either path the rule's tag is stripped from
/// the triggering item so the same item cannot re-trigger.
fn process_item(host: &mut dyn HostStore, rule: &Rule, item: &ItemRef) {
    if rule.reference_kind.is_move() {
        match relocate(host, &item.id, rule) {
            Ok(()) => {
                let stripped = strip_tag(&item.text, &rule.tag);
                if stripped != item.text {
                    if let Err(err) = host.update_item(&item.id, &stripped) {
                        log_op_error!("strip_after_move", err, item_id = %item.id);
                    }
                }
                return;
            }
            Err(err) => {
                warn!(
                    tag = %rule.tag,
                    item_id = %item.id,
                    error = %err,
                    "relocation failed, falling back to copy-reference"
                );
            }
        }
    }

    if let Err(err) = copy_reference(host, item, rule) {
        log_op_error!("copy_reference", err, item_id = %item.id);
    }
}

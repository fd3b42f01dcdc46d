//! End-to-end tests driving the engine through the in-memory host.
//!
//! Notification delivery follows the host contract: take the referencing
//! snapshot, mutate the graph, take it again, and hand the pair to the
//! engine under the rule's live handle.

use tagroute_core::{HostStore, MemoryHost, MemorySettings, RefKind, Rule, Snapshot};
use tagroute_engine::{load_rules, save_rules, RuleEngine};

fn notify(engine: &RuleEngine, host: &mut MemoryHost, tag: &str, before: &Snapshot) {
    let handle = engine.handle_for(tag).expect("rule installed");
    let after = host.referencing_items(tag);
    engine.on_notification(host, handle, before, &after);
}

#[test]
fn copy_reference_flow() {
    let mut host = MemoryHost::new();
    host.add_page("inbox-page", "Inbox");
    host.add_page("page-x", "Routed");

    let mut engine = RuleEngine::new();
    engine
        .add_rule(&mut host, Rule::new("Inbox", "page-x"))
        .unwrap();

    let before = host.referencing_items("Inbox");
    host.add_block("b1", "inbox-page", 0, "Call Dana #Inbox");
    notify(&engine, &mut host, "Inbox", &before);

    // A new item referencing the trigger appeared under the destination
    let routed = host.children_of("page-x");
    assert_eq!(routed.len(), 1);
    assert_eq!(routed[0].text, "((b1))");

    // The original item's text was rewritten without the tag
    assert_eq!(host.read_item("b1").unwrap().text, "Call Dana");
}

#[test]
fn move_flow_leaves_back_reference_at_original_order() {
    let mut host = MemoryHost::new();
    host.add_page("daily", "August 30th 2026");
    host.add_page("dest", "Projects");
    host.add_block("early", "daily", 0, "unrelated");

    let mut engine = RuleEngine::new();
    engine
        .add_rule(
            &mut host,
            Rule::new("Project", "dest").with_kind(RefKind::MoveBlock),
        )
        .unwrap();

    let before = host.referencing_items("Project");
    host.add_block("task", "daily", 1, "ship the beta #Project");
    notify(&engine, &mut host, "Project", &before);

    // The triggering item moved to the destination, appended last
    let moved = host.read_item("task").unwrap();
    assert_eq!(moved.parent_id.as_deref(), Some("dest"));
    // ...and its tag was stripped
    assert_eq!(moved.text, "ship the beta");

    // A back-reference appeared at the vacated position with the original order
    let daily_children = host.children_of("daily");
    assert_eq!(daily_children.len(), 2);
    let back_ref = daily_children
        .iter()
        .find(|c| c.id != "early")
        .expect("back-reference created");
    assert_eq!(back_ref.text, "((task))");
    assert_eq!(back_ref.order, 1);
}

#[test]
fn move_without_back_reference() {
    let mut host = MemoryHost::new();
    host.add_page("daily", "Daily");
    host.add_page("dest", "Projects");

    let mut engine = RuleEngine::new();
    engine
        .add_rule(
            &mut host,
            Rule::new("Project", "dest")
                .with_kind(RefKind::MoveBlock)
                .with_back_reference(false),
        )
        .unwrap();

    let before = host.referencing_items("Project");
    host.add_block("task", "daily", 0, "do it #Project");
    notify(&engine, &mut host, "Project", &before);

    assert_eq!(
        host.read_item("task").unwrap().parent_id.as_deref(),
        Some("dest")
    );
    assert!(host.children_of("daily").is_empty());
}

#[test]
fn cycle_falls_back_to_copy_reference() {
    let mut host = MemoryHost::new();
    host.add_page("daily", "Daily");
    // The destination is nested beneath the item that will trigger the rule
    host.add_block("holder", "daily", 0, "container");
    host.add_block("nested-dest", "holder", 0, "dest");

    let mut engine = RuleEngine::new();
    engine
        .add_rule(
            &mut host,
            Rule::new("Loop", "nested-dest").with_kind(RefKind::MoveBlock),
        )
        .unwrap();

    let before = host.referencing_items("Loop");
    host.update_item("holder", "container #Loop").unwrap();
    notify(&engine, &mut host, "Loop", &before);

    // The move was rejected before any mutation...
    assert_eq!(host.move_count(), 0);
    assert_eq!(
        host.read_item("holder").unwrap().parent_id.as_deref(),
        Some("daily")
    );
    // ...and the item was copy-referenced instead of being lost
    let routed = host.children_of("nested-dest");
    assert_eq!(routed.len(), 1);
    assert_eq!(routed[0].text, "((holder))");
    assert_eq!(host.read_item("holder").unwrap().text, "container");
}

#[test]
fn only_first_added_item_is_processed_per_notification() {
    let mut host = MemoryHost::new();
    host.add_page("inbox-page", "Inbox");
    host.add_page("page-x", "Routed");

    let mut engine = RuleEngine::new();
    engine
        .add_rule(&mut host, Rule::new("Inbox", "page-x"))
        .unwrap();

    let before = host.referencing_items("Inbox");
    host.add_block("a1", "inbox-page", 0, "first #Inbox");
    host.add_block("a2", "inbox-page", 1, "second #Inbox");
    notify(&engine, &mut host, "Inbox", &before);

    // One routed reference, for the first added item only
    let routed = host.children_of("page-x");
    assert_eq!(routed.len(), 1);
    assert_eq!(routed[0].text, "((a1))");
    assert_eq!(host.read_item("a2").unwrap().text, "second #Inbox");

    // The still-tagged item arrives via the next notification
    let before = host.referencing_items("Inbox");
    host.add_block("a3", "inbox-page", 2, "third #Inbox");
    notify(&engine, &mut host, "Inbox", &before);
    // a3 was the only addition relative to the second snapshot
    let texts: Vec<String> = host
        .children_of("page-x")
        .into_iter()
        .map(|c| c.text)
        .collect();
    assert_eq!(texts, vec!["((a1))".to_string(), "((a3))".to_string()]);
}

#[test]
fn empty_delta_is_a_noop() {
    let mut host = MemoryHost::new();
    host.add_page("inbox-page", "Inbox");
    host.add_page("page-x", "Routed");
    host.add_block("b1", "inbox-page", 0, "old #Inbox");

    let mut engine = RuleEngine::new();
    engine
        .add_rule(&mut host, Rule::new("Inbox", "page-x"))
        .unwrap();

    let snap = host.referencing_items("Inbox");
    let handle = engine.handle_for("Inbox").unwrap();
    engine.on_notification(&mut host, handle, &snap, &snap);

    assert!(host.children_of("page-x").is_empty());
    assert_eq!(host.read_item("b1").unwrap().text, "old #Inbox");
}

#[test]
fn resync_routes_every_already_tagged_item() {
    let mut host = MemoryHost::new();
    host.add_page("inbox-page", "Inbox");
    host.add_page("page-x", "Routed");
    host.add_block("b1", "inbox-page", 0, "one #Inbox");
    host.add_block("b2", "inbox-page", 1, "two #[[Inbox]]");

    let mut engine = RuleEngine::new();
    engine
        .add_rule(&mut host, Rule::new("Inbox", "page-x"))
        .unwrap();

    engine.resync(&mut host, "Inbox");

    let texts: Vec<String> = host
        .children_of("page-x")
        .into_iter()
        .map(|c| c.text)
        .collect();
    assert_eq!(texts, vec!["((b1))".to_string(), "((b2))".to_string()]);
    assert_eq!(host.read_item("b1").unwrap().text, "one");
    assert_eq!(host.read_item("b2").unwrap().text, "two");
}

#[test]
fn vanished_destination_aborts_notification_but_rule_survives() {
    let mut host = MemoryHost::new();
    host.add_page("inbox-page", "Inbox");

    let mut engine = RuleEngine::new();
    // Destination never existed in the host; the rule still installs
    engine
        .add_rule(&mut host, Rule::new("Inbox", "ghost-page"))
        .unwrap();

    let before = host.referencing_items("Inbox");
    host.add_block("b1", "inbox-page", 0, "note #Inbox");
    notify(&engine, &mut host, "Inbox", &before);

    // Nothing was routed, the item kept its text, the rule stays active
    assert_eq!(host.read_item("b1").unwrap().text, "note #Inbox");
    assert_eq!(engine.rule_count(), 1);
}

#[test]
fn persisted_rules_load_and_fire() {
    let mut settings = MemorySettings::new();
    let rules = vec![Rule::new("Inbox", "page-x")];
    save_rules(&mut settings, &rules).unwrap();

    let mut host = MemoryHost::new();
    host.add_page("inbox-page", "Inbox");
    host.add_page("page-x", "Routed");

    let mut engine = RuleEngine::new();
    engine.load_persisted_rules(&mut host, load_rules(&settings).unwrap());
    assert_eq!(engine.rule_count(), 1);

    let before = host.referencing_items("Inbox");
    host.add_block("b1", "inbox-page", 0, "hello #Inbox");
    notify(&engine, &mut host, "Inbox", &before);

    assert_eq!(host.children_of("page-x")[0].text, "((b1))");
}

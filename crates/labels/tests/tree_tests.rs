//! Integration tests for the label tree
//!
//! These tests exercise the public build API end to end.

use labels::{LabelRecord, LabelTreeBuilder, TreeNode, TreeOptions, build_tree, find, walk};
use proptest::prelude::*;

/// Helper to create test labels
fn label(id: &str, name: &str, unread: u32) -> LabelRecord {
    LabelRecord::new(id, name).with_unread_count(unread)
}

/// Flatten to (path, aggregate unread, is_leaf) in display order
fn shape(nodes: &[TreeNode]) -> Vec<(String, u32, bool)> {
    let mut out = Vec::new();
    walk(nodes, &mut |_, n: &TreeNode| {
        out.push((n.full_path.clone(), n.aggregate_unread_count, n.is_leaf))
    });
    out
}

#[test]
fn test_empty_and_adversarial_names() {
    assert!(build_tree(&[], None).is_empty());

    let labels = [label("1", "", 1), label("2", "/", 1), label("3", "a//b", 2)];
    let nodes = build_tree(&labels, None);
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].segment_name, "a");
    assert_eq!(nodes[0].aggregate_unread_count, 2);
    assert_eq!(find(&nodes, "a/b").unwrap().id.as_str(), "3");
}

#[test]
fn test_bubbling_through_chain() {
    let labels = [label("1", "A", 1), label("2", "A/B", 2), label("3", "A/B/C", 3)];
    let nodes = build_tree(&labels, None);

    assert_eq!(find(&nodes, "A").unwrap().aggregate_unread_count, 6);
    assert_eq!(find(&nodes, "A/B").unwrap().aggregate_unread_count, 5);
    assert_eq!(find(&nodes, "A/B/C").unwrap().aggregate_unread_count, 3);
}

#[test]
fn test_dual_role_node() {
    let labels = [label("w", "Work", 2), label("c", "Work/Clients", 5)];
    let nodes = build_tree(&labels, None);

    let work = &nodes[0];
    assert!(!work.is_leaf);
    assert!(!work.is_folder());
    assert_eq!(work.own_unread_count, 2);
    assert_eq!(work.aggregate_unread_count, 7);
    assert_eq!(work.children.len(), 1);
    assert_eq!(work.children[0].full_path, "Work/Clients");
}

#[test]
fn test_search_preserves_ancestry() {
    let labels = [label("1", "Work/Clients/Acme", 1), label("2", "Personal", 0)];

    let nodes = build_tree(&labels, Some("Acme"));
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].segment_name, "Work");
    assert_eq!(nodes[0].children.len(), 1);
    assert_eq!(nodes[0].children[0].segment_name, "Clients");
    assert_eq!(nodes[0].children[0].children[0].segment_name, "Acme");

    assert!(build_tree(&labels, Some("Zzz")).is_empty());
}

#[test]
fn test_search_is_case_insensitive_and_blank_is_ignored() {
    let labels = [label("1", "Work/Clients/Acme", 1), label("2", "Personal", 0)];
    assert_eq!(build_tree(&labels, Some("aCmE")).len(), 1);
    assert_eq!(build_tree(&labels, Some("")).len(), 2);
    assert_eq!(build_tree(&labels, Some("  ")).len(), 2);
}

#[test]
fn test_same_input_same_output() {
    let labels = [
        label("1", "Zeta/One", 1),
        label("2", "alpha", 0),
        label("3", "Zeta", 2),
        label("4", "Mid/Deep/Er", 4),
    ];
    assert_eq!(build_tree(&labels, None), build_tree(&labels, None));
}

#[test]
fn test_inbox_excluded_but_nested_inbox_kept() {
    let labels = [
        label("1", "Inbox", 3),
        label("2", "INBOX", 3),
        label("3", "inbox", 3),
        label("4", "Inbox/Receipts", 1),
    ];
    let nodes = build_tree(&labels, None);

    assert_eq!(nodes.len(), 1);
    let inbox = &nodes[0];
    assert_eq!(inbox.segment_name, "Inbox");
    assert!(inbox.is_folder());
    assert_eq!(inbox.own_unread_count, 0);
    assert_eq!(inbox.aggregate_unread_count, 1);
    assert_eq!(inbox.children[0].segment_name, "Receipts");
}

#[test]
fn test_reserved_name_with_stray_separators_excluded() {
    for name in ["Inbox/", "/Inbox", "Inbox//", "//INBOX/"] {
        let nodes = build_tree(&[label("x", name, 9)], None);
        assert!(nodes.is_empty(), "{name:?} should be excluded");
    }

    let nodes = build_tree(&[label("x", "/Inbox/Receipts", 9)], None);
    assert_eq!(
        shape(&nodes),
        [
            ("Inbox".to_string(), 9, false),
            ("Inbox/Receipts".to_string(), 9, true),
        ]
    );
    assert!(nodes[0].is_folder());
}

#[test]
fn test_scenario_two_children() {
    let labels = [label("1", "A", 0), label("2", "A/B", 3), label("3", "A/C", 1)];
    let nodes = build_tree(&labels, None);

    assert_eq!(nodes.len(), 1);
    let a = &nodes[0];
    assert_eq!(a.aggregate_unread_count, 4);
    assert!(!a.is_leaf);

    let names: Vec<&str> = a.children.iter().map(|c| c.segment_name.as_str()).collect();
    assert_eq!(names, ["B", "C"]);
    assert_eq!(a.children[0].own_unread_count, 3);
    assert!(a.children[0].is_leaf);
    assert_eq!(a.children[1].own_unread_count, 1);
    assert!(a.children[1].is_leaf);
}

#[test]
fn test_builder_from_options() {
    let options = TreeOptions::from_json(r#"{"reserved_names": ["Receipts"]}"#).unwrap();
    let builder = LabelTreeBuilder::from_options(&options);

    let labels = [label("1", "Receipts", 1), label("2", "Inbox", 1), label("3", "Work", 1)];
    let nodes = builder.build(&labels, None);
    assert_eq!(shape(&nodes), [("Work".to_string(), 1, true)]);
}

#[test]
fn test_json_output_shape() {
    let nodes = build_tree(&[label("2", "Work/Clients", 5)], None);
    let json = serde_json::to_value(&nodes).unwrap();

    assert_eq!(json[0]["segmentName"], "Work");
    assert_eq!(json[0]["id"], "folder:Work");
    assert_eq!(json[0]["aggregateUnreadCount"], 5);
    assert_eq!(json[0]["children"][0]["id"], "2");
    assert_eq!(json[0]["children"][0]["isLeaf"], true);
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!["a", "B", "c", "", "Inbox", "d/e"]), 0..4)
        .prop_map(|parts| parts.join("/"))
}

proptest! {
    #[test]
    fn prop_build_is_total_and_counts_add_up(
        entries in prop::collection::vec((name_strategy(), 0u32..100), 0..12)
    ) {
        let labels: Vec<LabelRecord> = entries
            .iter()
            .enumerate()
            .map(|(i, (name, unread))| label(&i.to_string(), name, *unread))
            .collect();

        let nodes = build_tree(&labels, None);
        walk(&nodes, &mut |_, n: &TreeNode| {
            let children: u32 = n.children.iter().map(|c| c.aggregate_unread_count).sum();
            assert_eq!(n.aggregate_unread_count, n.own_unread_count + children);
            assert_eq!(n.is_leaf, n.children.is_empty());
        });

        let _ = build_tree(&labels, Some("b"));
    }

    #[test]
    fn prop_input_order_does_not_matter(
        names in prop::collection::hash_set(name_strategy(), 0..10),
        seed in any::<u64>()
    ) {
        let labels: Vec<LabelRecord> = names
            .iter()
            .enumerate()
            .map(|(i, name)| label(&format!("id{i}"), name, i as u32))
            .collect();

        // Normalization can merge distinct names onto one path, so keep one
        // record per normalized path
        let mut seen = std::collections::HashSet::new();
        let labels: Vec<LabelRecord> = labels
            .into_iter()
            .filter(|l| {
                let key: Vec<&str> = l.name.split('/').filter(|s| !s.is_empty()).collect();
                seen.insert(key.join("/"))
            })
            .collect();

        let mut shuffled = labels.clone();
        let len = shuffled.len();
        if len > 1 {
            shuffled.rotate_left((seed as usize) % len);
            shuffled.reverse();
        }

        prop_assert_eq!(build_tree(&labels, None), build_tree(&shuffled, None));
    }
}

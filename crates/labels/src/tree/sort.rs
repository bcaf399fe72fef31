//! Sibling ordering

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::node::TreeNode;

/// Sort every level by segment name, case-insensitively
///
/// Ties fall back to the exact segment name and then the full path, so the
/// order never depends on input order.
pub fn sort_siblings(nodes: &mut [TreeNode]) {
    nodes.sort_by(compare_names);
    for node in nodes {
        sort_siblings(&mut node.children);
    }
}

fn compare_names(a: &TreeNode, b: &TreeNode) -> Ordering {
    a.segment_name
        .to_lowercase()
        .cmp(&b.segment_name.to_lowercase())
        .then_with(|| a.segment_name.cmp(&b.segment_name))
        .then_with(|| a.full_path.cmp(&b.full_path))
}

/// How the host orders the top level of the tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootOrder {
    /// Keep the builder's alphabetical order
    #[default]
    Alphabetical,
    /// Roots with unread messages first, alphabetical within each group
    UnreadFirst,
}

/// Apply a presentation order to root nodes only
///
/// The builder never calls this; it is a call-site choice.
pub fn order_roots(roots: &mut [TreeNode], order: RootOrder) {
    match order {
        RootOrder::Alphabetical => {}
        // Stable sort keeps the alphabetical order inside each group
        RootOrder::UnreadFirst => roots.sort_by_key(|n| !n.has_unread()),
    }
}

//! Search filtering over a built tree

use super::node::TreeNode;

/// Keep nodes whose segment name contains `term`, plus their ancestors
///
/// Matching is a case-insensitive substring test. Subtrees with no match are
/// dropped. Aggregate counts are left as they were, so a kept ancestor still
/// shows the unread total of its whole unfiltered subtree. A blank term
/// returns the input unchanged.
pub fn filter_by_search(nodes: Vec<TreeNode>, term: &str) -> Vec<TreeNode> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return nodes;
    }
    filter_nodes(nodes, &needle)
}

fn filter_nodes(nodes: Vec<TreeNode>, needle: &str) -> Vec<TreeNode> {
    nodes
        .into_iter()
        .filter_map(|node| filter_node(node, needle))
        .collect()
}

fn filter_node(mut node: TreeNode, needle: &str) -> Option<TreeNode> {
    let self_match = node.segment_name.to_lowercase().contains(needle);
    node.children = filter_nodes(std::mem::take(&mut node.children), needle);

    if !self_match && node.children.is_empty() {
        return None;
    }
    node.is_leaf = node.children.is_empty();
    Some(node)
}

//! Text rendering of the label tree

use std::collections::HashSet;

use labels::{TreeNode, flatten};

/// Render the tree as indented lines, one row per visible node
///
/// Unread totals are shown in parentheses when non-zero.
pub fn render_text(nodes: &[TreeNode], expanded: Option<&HashSet<String>>) -> String {
    let mut out = String::new();
    for row in flatten(nodes, expanded) {
        let node = row.node;
        let icon = if node.is_folder() { "📂" } else { "📁" };
        let marker = match (node.is_leaf, expanded) {
            (true, _) => " ",
            (false, Some(set)) if !set.contains(&node.full_path) => "▸",
            (false, _) => "▾",
        };

        out.push_str(&"  ".repeat(row.depth));
        out.push_str(&format!("{marker} {icon} {}", node.segment_name));
        if node.has_unread() {
            out.push_str(&format!(" ({})", node.aggregate_unread_count));
        }
        out.push('\n');
    }
    out
}

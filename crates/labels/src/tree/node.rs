//! Output nodes of the label tree

use std::collections::HashSet;

use serde::{Serialize, Serializer};

use crate::models::LabelId;

/// Prefix of the synthetic key given to folders with no label of their own
pub const FOLDER_KEY_PREFIX: &str = "folder:";

/// Identity of a tree node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeId {
    /// The node is backed by a label record
    Label(LabelId),
    /// Synthetic folder, holding its stable key (`folder:<full path>`)
    Folder(String),
}

impl NodeId {
    pub fn folder(full_path: &str) -> Self {
        Self::Folder(format!("{FOLDER_KEY_PREFIX}{full_path}"))
    }

    /// Stable key for the host: the label id, or the synthetic folder key
    pub fn as_str(&self) -> &str {
        match self {
            Self::Label(id) => id.as_str(),
            Self::Folder(key) => key,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self, Self::Folder(_))
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A node in the label tree, fully populated by the builder
///
/// Nodes are rebuilt from scratch on every build and are read-only for
/// consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Last path segment
    pub segment_name: String,
    /// Normalized path from the root, segments joined by `/`
    pub full_path: String,
    pub id: NodeId,
    /// Children sorted by segment name
    pub children: Vec<TreeNode>,
    /// Unread count of the label itself (0 for synthetic folders)
    pub own_unread_count: u32,
    /// Own unread count plus every descendant's
    pub aggregate_unread_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub own_total_count: Option<u32>,
    /// Own total count (0 when unknown) plus every descendant's
    pub aggregate_total_count: u32,
    pub is_leaf: bool,
}

impl TreeNode {
    /// True when no label record backs this node
    pub fn is_folder(&self) -> bool {
        self.id.is_synthetic()
    }

    pub fn has_unread(&self) -> bool {
        self.aggregate_unread_count > 0
    }
}

/// Find the node at `full_path` anywhere in the forest
pub fn find<'a>(nodes: &'a [TreeNode], full_path: &str) -> Option<&'a TreeNode> {
    for node in nodes {
        if node.full_path == full_path {
            return Some(node);
        }
        let is_ancestor = full_path
            .strip_prefix(node.full_path.as_str())
            .is_some_and(|rest| rest.starts_with('/'));
        if is_ancestor {
            return find(&node.children, full_path);
        }
    }
    None
}

/// Visit every node in pre-order with its depth (roots are depth 0)
pub fn walk<'a, F>(nodes: &'a [TreeNode], visit: &mut F)
where
    F: FnMut(usize, &'a TreeNode),
{
    fn go<'a, F: FnMut(usize, &'a TreeNode)>(nodes: &'a [TreeNode], depth: usize, visit: &mut F) {
        for node in nodes {
            visit(depth, node);
            go(&node.children, depth + 1, visit);
        }
    }
    go(nodes, 0, visit);
}

/// One visible row of an expandable tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatNode<'a> {
    pub depth: usize,
    pub node: &'a TreeNode,
}

/// Flatten the forest into display rows
///
/// Children are emitted only under nodes whose `full_path` is in
/// `expanded`; `None` expands everything.
pub fn flatten<'a>(nodes: &'a [TreeNode], expanded: Option<&HashSet<String>>) -> Vec<FlatNode<'a>> {
    fn go<'a>(
        nodes: &'a [TreeNode],
        depth: usize,
        expanded: Option<&HashSet<String>>,
        out: &mut Vec<FlatNode<'a>>,
    ) {
        for node in nodes {
            out.push(FlatNode { depth, node });
            let open = expanded.is_none_or(|set| set.contains(&node.full_path));
            if open {
                go(&node.children, depth + 1, expanded, out);
            }
        }
    }

    let mut out = Vec::new();
    go(nodes, 0, expanded, &mut out);
    out
}

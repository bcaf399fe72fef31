//! Labels crate - label hierarchy for a Gmail-backed mail client
//!
//! This crate turns the flat label list reported by Gmail into a folder
//! tree for display:
//! - Domain models (LabelRecord, LabelId)
//! - Tree building with unread-count bubbling
//! - Search filtering and sibling ordering
//! - Tree options loaded from the arbor config directory
//!
//! Building is pure and synchronous; every call starts from scratch.

pub mod config;
pub mod models;
pub mod tree;

pub use crate::config::TreeOptions;
pub use models::{LabelId, LabelKind, LabelRecord, ListLabelsResponse};
pub use tree::{
    FlatNode, LabelPath, LabelPathError, LabelTreeBuilder, NodeId, ReservedLabels, RootOrder,
    TreeNode, build_tree, filter_by_search, find, flatten, order_roots, sort_siblings, walk,
};

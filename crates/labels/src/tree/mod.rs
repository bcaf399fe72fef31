//! Label hierarchy: builds a folder tree from flat slash-delimited label names
//!
//! Pipeline, leaves first:
//! - [`reserved`] drops system and provider-internal labels
//! - [`path`] splits names into segments and finds parent paths
//! - [`builder`] assembles the tree and bubbles unread counts upward
//! - [`search`] narrows the tree to matches and their ancestors
//! - [`sort`] orders siblings, plus the caller-side root policy

pub mod builder;
pub mod node;
pub mod path;
pub mod reserved;
pub mod search;
pub mod sort;

pub use builder::{LabelTreeBuilder, build_tree};
pub use node::{FlatNode, NodeId, TreeNode, find, flatten, walk};
pub use path::{LabelPath, LabelPathError};
pub use reserved::ReservedLabels;
pub use search::filter_by_search;
pub use sort::{RootOrder, order_roots, sort_siblings};

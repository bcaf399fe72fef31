//! Label tree construction
//!
//! A build runs in two phases. Labels are first inserted into a scratch
//! arena keyed by full path, then the arena is converted into immutable
//! [`TreeNode`] values, unread counts are bubbled up, and the result is
//! filtered and sorted. Nothing survives between builds.

use std::collections::HashMap;

use log::{debug, warn};

use super::node::{NodeId, TreeNode};
use super::path::{LabelPath, parent_paths};
use super::reserved::ReservedLabels;
use super::search::filter_by_search;
use super::sort::sort_siblings;
use crate::config::TreeOptions;
use crate::models::{LabelId, LabelRecord};

/// Builds a display tree from a flat list of labels
#[derive(Debug, Clone, Default)]
pub struct LabelTreeBuilder {
    reserved: ReservedLabels,
}

impl LabelTreeBuilder {
    /// Create a builder with the built-in reserved names
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with a custom reserved set
    pub fn with_reserved(reserved: ReservedLabels) -> Self {
        Self { reserved }
    }

    /// Create a builder with the built-in reserved set plus configured extras
    pub fn from_options(options: &TreeOptions) -> Self {
        let mut reserved = ReservedLabels::default();
        reserved.extend(&options.reserved_names, &options.reserved_prefixes);
        Self { reserved }
    }

    /// Build the label tree
    ///
    /// Reserved, system and malformed labels are skipped. When several labels
    /// share a full path the first one in input order is attached. A blank
    /// `search_term` disables filtering.
    pub fn build(&self, labels: &[LabelRecord], search_term: Option<&str>) -> Vec<TreeNode> {
        let accepted: Vec<(LabelPath, &LabelRecord)> = labels
            .iter()
            .filter_map(|label| self.accept(label).map(|path| (path, label)))
            .collect();

        let mut scratch = ScratchTree::default();

        // Known parent paths become folders before any label is attached
        let mut parents: Vec<String> = parent_paths(accepted.iter().map(|(p, _)| p))
            .into_iter()
            .collect();
        parents.sort();
        for parent in &parents {
            if let Ok(path) = LabelPath::parse(parent) {
                scratch.ensure_path(&path);
            }
        }

        for (path, label) in &accepted {
            let idx = scratch.ensure_path(path);
            scratch.attach(idx, label);
        }

        let mut nodes = scratch.into_nodes();
        bubble_counts(&mut nodes);

        if let Some(term) = search_term {
            nodes = filter_by_search(nodes, term);
        }
        sort_siblings(&mut nodes);

        debug!(
            "Built label tree: {} labels in, {} accepted, {} roots",
            labels.len(),
            accepted.len(),
            nodes.len()
        );
        nodes
    }

    /// Check a record against the exclusion rules and parse its path
    fn accept(&self, label: &LabelRecord) -> Option<LabelPath> {
        if label.is_system() {
            debug!("Skipping system label {} ({:?})", label.id, label.name);
            return None;
        }
        let path = match LabelPath::parse(&label.name) {
            Ok(path) => path,
            Err(e) => {
                debug!("Skipping label {}: {}", label.id, e);
                return None;
            }
        };
        // Checked after normalization so "Inbox/" cannot slip through as "Inbox"
        if self.reserved.is_reserved(&path.full_path()) {
            debug!("Skipping reserved label {} ({:?})", label.id, label.name);
            return None;
        }
        Some(path)
    }
}

/// Build a label tree with the default reserved names
pub fn build_tree(labels: &[LabelRecord], search_term: Option<&str>) -> Vec<TreeNode> {
    LabelTreeBuilder::new().build(labels, search_term)
}

/// Label data attached to a scratch node
#[derive(Debug)]
struct Attached {
    id: LabelId,
    unread_count: u32,
    total_count: Option<u32>,
}

#[derive(Debug)]
struct ScratchNode {
    segment: String,
    full_path: String,
    label: Option<Attached>,
    /// Child indices keyed by segment name
    children: HashMap<String, usize>,
}

/// Mutable arena used while a single build is in progress
#[derive(Debug, Default)]
struct ScratchTree {
    nodes: Vec<ScratchNode>,
    roots: HashMap<String, usize>,
}

impl ScratchTree {
    /// Descend along `path`, creating missing nodes, and return the terminal index
    fn ensure_path(&mut self, path: &LabelPath) -> usize {
        let mut parent: Option<usize> = None;
        let mut full_path = String::new();

        for segment in path.segments() {
            if !full_path.is_empty() {
                full_path.push('/');
            }
            full_path.push_str(segment);

            let existing = match parent {
                Some(p) => self.nodes[p].children.get(segment).copied(),
                None => self.roots.get(segment).copied(),
            };

            let idx = match existing {
                Some(idx) => idx,
                None => {
                    let idx = self.nodes.len();
                    self.nodes.push(ScratchNode {
                        segment: segment.clone(),
                        full_path: full_path.clone(),
                        label: None,
                        children: HashMap::new(),
                    });
                    match parent {
                        Some(p) => self.nodes[p].children.insert(segment.clone(), idx),
                        None => self.roots.insert(segment.clone(), idx),
                    };
                    idx
                }
            };
            parent = Some(idx);
        }

        // LabelPath always has at least one segment
        parent.unwrap_or_default()
    }

    /// Attach label data to a node; the first label for a path wins
    fn attach(&mut self, idx: usize, label: &LabelRecord) {
        let node = &mut self.nodes[idx];
        match &node.label {
            None => {
                node.label = Some(Attached {
                    id: label.id.clone(),
                    unread_count: label.unread_count,
                    total_count: label.total_count,
                });
            }
            Some(existing) if existing.id == label.id => {
                debug!("Label {} listed twice for {:?}", label.id, node.full_path);
            }
            Some(existing) => {
                warn!(
                    "Labels {} and {} both map to {:?}; keeping {}",
                    existing.id, label.id, node.full_path, existing.id
                );
            }
        }
    }

    /// Convert the arena into output nodes, unsorted and not yet bubbled
    fn into_nodes(self) -> Vec<TreeNode> {
        self.roots
            .values()
            .map(|&idx| self.convert(idx))
            .collect()
    }

    fn convert(&self, idx: usize) -> TreeNode {
        let scratch = &self.nodes[idx];
        let children: Vec<TreeNode> = scratch
            .children
            .values()
            .map(|&child| self.convert(child))
            .collect();

        let (id, own_unread_count, own_total_count) = match &scratch.label {
            Some(label) => (
                NodeId::Label(label.id.clone()),
                label.unread_count,
                label.total_count,
            ),
            None => (NodeId::folder(&scratch.full_path), 0, None),
        };

        TreeNode {
            segment_name: scratch.segment.clone(),
            full_path: scratch.full_path.clone(),
            id,
            is_leaf: children.is_empty(),
            children,
            own_unread_count,
            aggregate_unread_count: 0,
            own_total_count,
            aggregate_total_count: 0,
        }
    }
}

/// Post-order pass setting aggregate counts from already-bubbled children
pub(crate) fn bubble_counts(nodes: &mut [TreeNode]) {
    for node in nodes {
        bubble_counts(&mut node.children);

        let (unread, total) = node.children.iter().fold(
            (node.own_unread_count, node.own_total_count.unwrap_or(0)),
            |(unread, total), child| {
                (
                    unread.saturating_add(child.aggregate_unread_count),
                    total.saturating_add(child.aggregate_total_count),
                )
            },
        );
        node.aggregate_unread_count = unread;
        node.aggregate_total_count = total;
    }
}

//! Reserved label names that never appear in the user's label tree
//!
//! System folders (Inbox, Sent, ...) are rendered separately by the host,
//! so the tree only carries the user's own hierarchy.

use std::collections::HashSet;

/// Names matched against the whole label name, case-insensitively
const RESERVED_NAMES: &[&str] = &[
    "inbox",
    "sent",
    "draft",
    "drafts",
    "spam",
    "trash",
    "important",
    "starred",
    "unread",
    "chat",
    "all mail",
    "sent mail",
    "scheduled",
    "snoozed",
    "opened",
];

/// Prefixes for provider-internal names (Gmail categories, IMAP-mapped folders)
const RESERVED_PREFIXES: &[&str] = &["category_", "[gmail]", "[imap]"];

/// Set of reserved names and prefixes, stored lowercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedLabels {
    names: HashSet<String>,
    prefixes: Vec<String>,
}

impl Default for ReservedLabels {
    fn default() -> Self {
        Self {
            names: RESERVED_NAMES.iter().map(|s| s.to_string()).collect(),
            prefixes: RESERVED_PREFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ReservedLabels {
    /// An empty set that reserves nothing
    pub fn none() -> Self {
        Self {
            names: HashSet::new(),
            prefixes: Vec::new(),
        }
    }

    /// Add extra names and prefixes on top of the current set
    pub fn extend<N, P>(&mut self, names: N, prefixes: P)
    where
        N: IntoIterator,
        N::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        self.names.extend(
            names
                .into_iter()
                .map(|n| n.as_ref().trim().to_lowercase())
                .filter(|n| !n.is_empty()),
        );
        for prefix in prefixes {
            let prefix = prefix.as_ref().trim().to_lowercase();
            if !prefix.is_empty() && !self.prefixes.contains(&prefix) {
                self.prefixes.push(prefix);
            }
        }
    }

    /// Whether a label name is reserved
    ///
    /// Only the bare name is compared, so `Inbox` is reserved while
    /// `Inbox/Receipts` is not.
    pub fn is_reserved(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.names.contains(&lower) || self.prefixes.iter().any(|p| lower.starts_with(p.as_str()))
    }
}

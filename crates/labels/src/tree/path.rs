//! Label name segmentation

use std::collections::HashSet;

use thiserror::Error;

/// Separator between levels of a label name
pub const SEPARATOR: char = '/';

/// Reasons a label name cannot be placed in the tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelPathError {
    #[error("label name is empty")]
    Empty,
    #[error("label name {0:?} has no segments")]
    OnlySeparators(String),
}

/// A normalized label path: non-empty segments joined by `/`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelPath {
    segments: Vec<String>,
}

impl LabelPath {
    /// Split a label name into segments
    ///
    /// Empty segments are discarded, so `"a//b"` becomes `a/b` and `"/a/"`
    /// becomes `a`.
    pub fn parse(name: &str) -> Result<Self, LabelPathError> {
        if name.is_empty() {
            return Err(LabelPathError::Empty);
        }

        let segments: Vec<String> = name
            .split(SEPARATOR)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if segments.is_empty() {
            return Err(LabelPathError::OnlySeparators(name.to_string()));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn full_path(&self) -> String {
        join(&self.segments)
    }

    /// Strict prefixes of this path, shortest first
    pub fn prefixes(&self) -> impl Iterator<Item = String> + '_ {
        (1..self.segments.len()).map(|i| join(&self.segments[..i]))
    }
}

fn join(segments: &[String]) -> String {
    segments.join("/")
}

/// Collect every strict prefix of every path
///
/// A path in this set is a folder even if no label names it.
pub fn parent_paths<'a>(paths: impl IntoIterator<Item = &'a LabelPath>) -> HashSet<String> {
    paths.into_iter().flat_map(|p| p.prefixes()).collect()
}

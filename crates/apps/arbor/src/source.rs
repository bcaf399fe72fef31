//! Label data source: reads a label list from a file or stdin

use anyhow::{Context, Result};
use labels::{LabelRecord, ListLabelsResponse};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Accepted input shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum LabelFile {
    /// Gmail `users.labels.list` response
    Gmail(ListLabelsResponse),
    /// Bare array of label records
    List(Vec<LabelRecord>),
}

/// Parse labels from JSON text
pub fn parse_labels(json: &str) -> Result<Vec<LabelRecord>> {
    let file: LabelFile = serde_json::from_str(json).context("Failed to parse label list")?;
    Ok(match file {
        LabelFile::Gmail(response) => response.labels,
        LabelFile::List(labels) => labels,
    })
}

/// Read labels from `path`, or from stdin when `path` is `None` or `-`
pub fn read_labels(path: Option<&Path>) -> Result<Vec<LabelRecord>> {
    let content = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read label file: {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read labels from stdin")?;
            buf
        }
    };
    parse_labels(&content)
}

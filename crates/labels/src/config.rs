//! Label tree options
//!
//! Options are loaded from (in order of priority):
//! 1. `label-tree.json` in the arbor config directory
//! 2. Built-in defaults
//!
//! `ARBOR_ROOT_ORDER` overrides the root order from either source.

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::tree::RootOrder;

/// Options filename in the arbor config directory
const OPTIONS_FILE: &str = "label-tree.json";

/// Environment variable overriding [`TreeOptions::root_order`]
const ROOT_ORDER_ENV: &str = "ARBOR_ROOT_ORDER";

/// User-tunable behaviour of the label tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeOptions {
    /// Extra label names to hide, on top of the built-in reserved names
    pub reserved_names: Vec<String>,
    /// Extra name prefixes to hide
    pub reserved_prefixes: Vec<String>,
    /// Ordering applied to the top level by the host
    pub root_order: RootOrder,
}

impl TreeOptions {
    /// Load options from the config directory, falling back to defaults
    pub fn load() -> Result<Self> {
        let mut options = if config::config_exists(OPTIONS_FILE) {
            debug!("Loading tree options from {OPTIONS_FILE}");
            config::load_json(OPTIONS_FILE)?
        } else {
            Self::default()
        };

        if let Ok(value) = std::env::var(ROOT_ORDER_ENV) {
            options.root_order = parse_root_order(&value)?;
        }
        Ok(options)
    }

    /// Load options from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        config::load_json_file(path)
    }

    /// Parse options from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse tree options JSON")
    }

    /// Get the default options file path
    pub fn default_path() -> Option<PathBuf> {
        config::config_path(OPTIONS_FILE)
    }
}

fn parse_root_order(value: &str) -> Result<RootOrder> {
    serde_json::from_value(serde_json::Value::String(value.trim().to_lowercase()))
        .with_context(|| format!("Invalid {ROOT_ORDER_ENV} value: {value:?}"))
}

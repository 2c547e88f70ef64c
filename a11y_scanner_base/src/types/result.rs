//! Core result types as returned by the accessibility engine.
//!
//! The four categories partition every rule the engine evaluated; the
//! partitioning itself is an engine-guaranteed invariant and is not
//! re-validated here. Fields this pipeline does not interpret (engine
//! metadata, timestamps, impact levels, ...) are carried verbatim in
//! flattened maps so a persisted result stays byte-compatible with the
//! engine's own shape.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::category::RuleCategory;
use crate::types::error::ResultParseError;

/// Complete structured result of one accessibility scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Rules that did not apply to the scanned DOM subset
    pub inapplicable: Vec<Rule>,

    /// Rules the engine could not conclusively evaluate
    pub incomplete: Vec<Rule>,

    /// Rules that passed on every checked node
    pub passes: Vec<Rule>,

    /// Rules with at least one offending node
    pub violations: Vec<Rule>,

    /// Additional top-level fields emitted by the engine, preserved as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single accessibility check result with its implicated DOM nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Engine rule identifier (e.g. "color-contrast")
    pub id: String,

    /// Human-readable issue description
    pub help: String,

    /// Implicated DOM nodes, in engine-supplied order
    #[serde(default)]
    pub nodes: Vec<Node>,

    /// Additional per-rule fields, preserved as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One DOM element implicated by a rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Selector chain; the first element is the primary locator
    #[serde(default)]
    pub target: Vec<String>,

    /// Outer markup snippet of the element
    #[serde(default)]
    pub html: String,

    /// Additional per-node fields, preserved as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ScanResult {
    /// Get the rules of one category, in engine-supplied order
    pub fn category(&self, category: RuleCategory) -> &[Rule] {
        match category {
            RuleCategory::Inapplicable => &self.inapplicable,
            RuleCategory::Incomplete => &self.incomplete,
            RuleCategory::Passes => &self.passes,
            RuleCategory::Violations => &self.violations,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serialize to compact JSON
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ResultParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a previously persisted result from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, ResultParseError> {
        let json = std::fs::read_to_string(path).map_err(|source| ResultParseError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

impl Node {
    /// Primary locator for this node, if the engine supplied one
    pub fn primary_locator(&self) -> Option<&str> {
        self.target.first().map(String::as_str)
    }
}

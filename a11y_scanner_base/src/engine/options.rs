//! Scan scope and rule-set configuration passed through to the engine.

use serde::Serialize;
use serde_json::{Map, Value};

/// DOM subset the engine should analyze
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanContext {
    /// Analyze the whole document (engine default)
    Document,

    /// Restrict analysis to the subtree matched by a CSS selector
    Selector(String),
}

impl ScanContext {
    pub fn selector(selector: impl Into<String>) -> Self {
        ScanContext::Selector(selector.into())
    }

    /// JSON argument for the engine's run call; `None` means the argument
    /// is omitted so the engine falls back to its document-wide default
    pub(crate) fn to_argument(&self) -> Option<String> {
        match self {
            ScanContext::Document => None,
            ScanContext::Selector(selector) => Some(Value::String(selector.clone()).to_string()),
        }
    }
}

impl Default for ScanContext {
    fn default() -> Self {
        ScanContext::Document
    }
}

/// Options controlling which rule sets the engine runs
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanOptions {
    #[serde(rename = "runOnly", skip_serializing_if = "Option::is_none")]
    run_only: Option<RunOnly>,

    #[serde(skip_serializing_if = "Map::is_empty")]
    rules: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct RunOnly {
    #[serde(rename = "type")]
    kind: &'static str,
    values: Vec<String>,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the run to rules carrying any of the given tags
    /// (e.g. "wcag2a", "wcag2aa")
    pub fn with_run_only_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.run_only = Some(RunOnly {
            kind: "tag",
            values: tags.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Enable or disable a single rule by id
    pub fn with_rule(mut self, rule_id: impl Into<String>, enabled: bool) -> Self {
        self.rules.insert(
            rule_id.into(),
            serde_json::json!({ "enabled": enabled }),
        );
        self
    }

    pub fn is_empty(&self) -> bool {
        self.run_only.is_none() && self.rules.is_empty()
    }

    /// JSON argument for the engine's run call
    pub(crate) fn to_argument(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

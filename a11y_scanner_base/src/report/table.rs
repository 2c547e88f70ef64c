//! Pure transform from a scan result category to report rows.

use serde::Serialize;

use crate::types::{RuleCategory, ScanResult};

/// One report line for a (rule, node) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// 1-based row number within this table
    pub id: usize,

    /// Primary locator of the implicated node
    pub locator: String,

    /// Outer markup snippet of the node
    pub html: String,

    /// Human-readable issue description from the rule
    pub issue: String,
}

/// Ordered issue report for one result category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTable {
    category: RuleCategory,
    rows: Vec<ReportRow>,
}

impl ReportTable {
    /// Build the report for `category`. Rules and their nodes are
    /// iterated in engine-supplied order, one row per (rule, node) pair;
    /// row ids restart at 1 on every call. Does not mutate `result`.
    pub fn render(result: &ScanResult, category: RuleCategory) -> Self {
        let mut rows = Vec::new();
        let mut id = 1;

        for rule in result.category(category) {
            for node in &rule.nodes {
                rows.push(ReportRow {
                    id,
                    locator: node
                        .primary_locator()
                        .map(|locator| locator.trim().to_string())
                        .unwrap_or_default(),
                    html: node.html.trim().to_string(),
                    issue: rule.help.trim().to_string(),
                });
                id += 1;
            }
        }

        Self { category, rows }
    }

    pub fn category(&self) -> RuleCategory {
        self.category
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_from(value: serde_json::Value) -> ScanResult {
        serde_json::from_value(value).unwrap()
    }

    fn contrast_result() -> ScanResult {
        result_from(serde_json::json!({
            "inapplicable": [], "incomplete": [], "passes": [],
            "violations": [{
                "id": "color-contrast",
                "help": "Contrast",
                "nodes": [{"target": ["#a"], "html": "<div>"}]
            }]
        }))
    }

    #[test]
    fn single_violation_renders_one_row() {
        let table = ReportTable::render(&contrast_result(), RuleCategory::Violations);
        assert_eq!(
            table.rows(),
            &[ReportRow {
                id: 1,
                locator: "#a".to_string(),
                html: "<div>".to_string(),
                issue: "Contrast".to_string(),
            }]
        );
    }

    #[test]
    fn row_count_is_sum_of_node_counts() {
        let result = result_from(serde_json::json!({
            "inapplicable": [], "incomplete": [], "passes": [],
            "violations": [
                {"id": "a", "help": "A", "nodes": [
                    {"target": ["#one"], "html": "<p>"},
                    {"target": ["#two"], "html": "<p>"}
                ]},
                {"id": "b", "help": "B", "nodes": [
                    {"target": ["#three"], "html": "<p>"}
                ]}
            ]
        }));
        let table = ReportTable::render(&result, RuleCategory::Violations);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn ids_are_sequential_and_reset_per_call() {
        let result = result_from(serde_json::json!({
            "inapplicable": [], "incomplete": [], "passes": [],
            "violations": [
                {"id": "a", "help": "A", "nodes": [
                    {"target": ["#one"], "html": "<p>"},
                    {"target": ["#two"], "html": "<p>"}
                ]}
            ]
        }));

        let first = ReportTable::render(&result, RuleCategory::Violations);
        let ids: Vec<usize> = first.rows().iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![1, 2]);

        // A second render starts the counter over.
        let second = ReportTable::render(&result, RuleCategory::Violations);
        assert_eq!(second.rows()[0].id, 1);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let result = result_from(serde_json::json!({
            "inapplicable": [], "incomplete": [], "passes": [],
            "violations": [{
                "id": "a",
                "help": "  Contrast \n",
                "nodes": [{"target": ["  #a  "], "html": "\t<div>\n"}]
            }]
        }));
        let table = ReportTable::render(&result, RuleCategory::Violations);
        let row = &table.rows()[0];
        assert_eq!(row.locator, "#a");
        assert_eq!(row.html, "<div>");
        assert_eq!(row.issue, "Contrast");
    }

    #[test]
    fn empty_target_renders_empty_locator() {
        let result = result_from(serde_json::json!({
            "inapplicable": [], "incomplete": [], "passes": [],
            "violations": [{
                "id": "a", "help": "A",
                "nodes": [{"target": [], "html": "<p>"}]
            }]
        }));
        let table = ReportTable::render(&result, RuleCategory::Violations);
        assert_eq!(table.rows()[0].locator, "");
    }

    #[test]
    fn empty_categories_render_empty_tables() {
        let result = result_from(serde_json::json!({
            "inapplicable": [], "incomplete": [], "passes": [], "violations": []
        }));
        for category in RuleCategory::ALL {
            assert!(ReportTable::render(&result, category).is_empty());
        }
    }

    #[test]
    fn rendering_other_categories_uses_their_rules() {
        let result = result_from(serde_json::json!({
            "inapplicable": [], "violations": [], "passes": [],
            "incomplete": [{
                "id": "aria-hidden-focus",
                "help": "Needs review",
                "nodes": [{"target": ["#widget"], "html": "<span>"}]
            }]
        }));
        let table = ReportTable::render(&result, RuleCategory::Incomplete);
        assert_eq!(table.len(), 1);
        assert_eq!(table.category(), RuleCategory::Incomplete);
        assert!(ReportTable::render(&result, RuleCategory::Violations).is_empty());
    }
}

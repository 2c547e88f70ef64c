//! # a11y_scanner_base - Accessibility Scan Pipeline
//!
//! Lets a browser-driven test suite execute an in-page accessibility
//! scan, capture the structured result, persist it, summarize it, and
//! render an issue report that can fail the current test run:
//! inject-scan → capture → persist → summarize → render →
//! gate-on-violations.

pub mod api;
pub mod engine;
pub mod report;
pub mod store;
pub mod types;

// Convenience re-exports
pub use api::{AuditError, AuditSession};

pub mod prelude {
    pub use crate::api::{AuditError, AuditSession, DEFAULT_ISSUES_CATEGORY};

    pub use crate::engine::{
        AccessibilityEngine, AxeEngine, DriverError, DriverProvider, ExecutionError,
        InjectionError, PageDriver, ScanContext, ScanOptions,
    };

    pub use crate::report::{render_html, ReportRow, ReportTable};
    pub use crate::store::{ResultStore, StoreError};

    pub use crate::types::{
        Node, ResultParseError, Rule, RuleCategory, ScanResult, Summary, UnsupportedCategory,
    };
}

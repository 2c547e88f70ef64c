//! # Audit Errors
//!
//! Top-level error taxonomy for the session pipeline. `ViolationsFound`
//! is an expected signaling failure ("the scanned page has accessibility
//! defects"), distinct from the infrastructure errors that mean the
//! tooling itself malfunctioned; the classification helpers let a host
//! framework sort test outcomes accordingly.

use crate::engine::error::{DriverError, ExecutionError, InjectionError};
use crate::store::StoreError;
use crate::types::UnsupportedCategory;

/// Comprehensive error type for the audit pipeline
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    /// `run` was called before a successful `inject` in this session
    #[error("Engine not injected; call inject before running a scan")]
    NotInjected,

    /// Error from the browser driver handle
    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),

    /// Error injecting the engine script
    #[error("Injection error: {0}")]
    Injection(#[from] InjectionError),

    /// Error executing the scan
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// Error from the result store (missing result, file write)
    #[error("Result store error: {0}")]
    Store(#[from] StoreError),

    /// Requested report category does not exist
    #[error("Report error: {0}")]
    UnsupportedCategory(#[from] UnsupportedCategory),

    /// Rendered issue report could not be written to its sink
    #[error("Failed to write issue report to sink: {0}")]
    ReportWrite(#[source] std::io::Error),

    /// The scanned page has accessibility defects
    #[error("Found accessibility issues: {count} violation rule(s)")]
    ViolationsFound { count: usize },
}

impl AuditError {
    /// Expected content failure, not a tool malfunction
    pub fn is_expected_failure(&self) -> bool {
        matches!(self, AuditError::ViolationsFound { .. })
    }

    /// Tooling/infrastructure malfunction (driver, engine, file I/O)
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            AuditError::Driver(_)
                | AuditError::Injection(_)
                | AuditError::Execution(_)
                | AuditError::Store(StoreError::WriteFailed { .. })
                | AuditError::Store(StoreError::Serialize(_))
                | AuditError::ReportWrite(_)
        )
    }

    /// Caller sequencing or argument mistake
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            AuditError::NotInjected
                | AuditError::Store(StoreError::NoResult)
                | AuditError::UnsupportedCategory(_)
        )
    }
}

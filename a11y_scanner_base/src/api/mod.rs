//! # Session API
//!
//! The keyword-facing surface: the audit session and the aggregated
//! error taxonomy.

pub mod errors;
pub mod session;

pub use errors::AuditError;
pub use session::{AuditSession, DEFAULT_ISSUES_CATEGORY};

//! # Accessibility Engine Boundary
//!
//! Traits for the two external collaborators (the browser driver handle
//! and the rule engine) plus the shipped axe-core style engine adapter.
//! Nothing in this module evaluates accessibility rules; it only loads
//! the engine script into the page and invokes it.

pub mod axe;
pub mod error;
pub mod options;
pub mod traits;

pub use axe::AxeEngine;
pub use error::{DriverError, ExecutionError, InjectionError};
pub use options::{ScanContext, ScanOptions};
pub use traits::{AccessibilityEngine, DriverProvider, PageDriver};

//! Extension points for the external collaborators.
//!
//! The host test framework owns the browser; this pipeline only needs a
//! handle that can evaluate scripts in the current page. Likewise the
//! rule engine is consumed as an opaque service that yields a structured
//! result. Both seams are traits so hosts and tests can supply their own
//! implementations.

use std::path::Path;

use serde_json::Value;

use crate::engine::error::{DriverError, ExecutionError, InjectionError};
use crate::engine::options::{ScanContext, ScanOptions};
use crate::types::ScanResult;

/// Opaque browser driver handle supporting in-page script execution
pub trait PageDriver {
    /// Evaluate a synchronous script in the current page and return its value
    fn execute_script(&mut self, script: &str) -> Result<Value, DriverError>;

    /// Evaluate an async script; the page signals completion through the
    /// callback the driver appends as the final script argument
    fn execute_async_script(&mut self, script: &str) -> Result<Value, DriverError>;
}

/// Source of the active driver handle, owned by the host framework
pub trait DriverProvider {
    type Driver: PageDriver;

    /// Borrow the currently active driver
    fn active_driver(&mut self) -> Result<&mut Self::Driver, DriverError>;
}

/// An accessibility rule engine that can be injected into and run against
/// a live page
pub trait AccessibilityEngine {
    /// Ensure the engine script is present and runnable in the current page.
    /// Idempotent; `script_path` overrides the engine's default script.
    fn inject(
        &self,
        driver: &mut dyn PageDriver,
        script_path: Option<&Path>,
    ) -> Result<(), InjectionError>;

    /// Scan the DOM subset selected by `context` under `options` and return
    /// the engine's structured result
    fn run(
        &self,
        driver: &mut dyn PageDriver,
        context: Option<&ScanContext>,
        options: Option<&ScanOptions>,
    ) -> Result<ScanResult, ExecutionError>;
}

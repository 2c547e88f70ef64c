//! # Result Store
//!
//! Holds the session's single most-recent scan result and persists it to
//! disk. A store never exposes a partially replaced result: `replace`
//! swaps the whole value, and `persist` writes through a temp file that
//! is atomically renamed over the destination.

pub mod error;

pub use error::StoreError;

use std::io::Write;
use std::path::Path;

use crate::types::ScanResult;

/// In-memory holder for the current scan result
#[derive(Debug, Default)]
pub struct ResultStore {
    current: Option<ScanResult>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current result, returning a reference to the new value
    pub fn replace(&mut self, result: ScanResult) -> &ScanResult {
        self.current = Some(result);
        self.current.as_ref().expect("result was just stored")
    }

    /// The session's current result; fails until a scan has succeeded
    pub fn current(&self) -> Result<&ScanResult, StoreError> {
        self.current.as_ref().ok_or(StoreError::NoResult)
    }

    pub fn has_result(&self) -> bool {
        self.current.is_some()
    }

    /// Serialize the current result as pretty UTF-8 JSON to `path`,
    /// creating or truncating it. The write goes to a temp file in the
    /// destination directory which is then renamed over `path`, so a
    /// failed write never leaves a file that appears valid.
    pub fn persist(&self, path: &Path) -> Result<(), StoreError> {
        let result = self.current()?;
        let json = serde_json::to_string_pretty(result)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let write_failed = |source: std::io::Error| StoreError::WriteFailed {
            path: path.display().to_string(),
            source,
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_failed)?;
        tmp.write_all(json.as_bytes()).map_err(write_failed)?;
        tmp.flush().map_err(write_failed)?;
        tmp.persist(path).map_err(|e| write_failed(e.error))?;

        log::debug!("persisted scan result to '{}'", path.display());
        Ok(())
    }
}

//! Engine-boundary errors.
//!
//! Infrastructure failures only; a page that merely has accessibility
//! defects is never an error at this layer.

/// Failure reported by the browser driver handle
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// No active page is available on the driver
    #[error("No active page is available on the driver")]
    NoActivePage,

    /// Script submitted to the page failed to execute
    #[error("Script execution failed: {reason}")]
    ScriptFailed { reason: String },

    /// Driver became unreachable
    #[error("Driver connection lost: {reason}")]
    ConnectionLost { reason: String },
}

/// Failure to make the engine script runnable in the current page
#[derive(Debug, thiserror::Error)]
pub enum InjectionError {
    /// Engine script file could not be read
    #[error("Failed to load engine script from '{path}': {source}")]
    ScriptLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Script loaded but the engine did not become available in the page
    #[error("Engine script evaluated but the engine is not available: {reason}")]
    ScriptEval { reason: String },

    /// Driver failed during injection
    #[error("Driver error during injection: {0}")]
    Driver(#[from] DriverError),
}

/// Failure to obtain a structured result from an engine run
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    /// The engine itself reported an internal failure
    #[error("Accessibility engine reported a failure: {reason}")]
    EngineFailure { reason: String },

    /// Driver became unreachable mid-scan
    #[error("Driver error during scan: {0}")]
    Driver(#[from] DriverError),

    /// The engine returned a value that does not match the result shape
    #[error("Engine returned a malformed result: {0}")]
    MalformedResult(#[from] serde_json::Error),

    /// Scan options could not be encoded for the engine
    #[error("Failed to encode scan options: {reason}")]
    InvalidOptions { reason: String },
}

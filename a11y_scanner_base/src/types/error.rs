//! Result parsing errors at the data-model boundary.

/// Failure to obtain a well-formed `ScanResult` from raw input
#[derive(Debug, thiserror::Error)]
pub enum ResultParseError {
    /// Result file could not be read
    #[error("Failed to read result file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Input does not match the engine's result shape
    #[error("Result does not match the engine shape: {0}")]
    Shape(#[from] serde_json::Error),
}

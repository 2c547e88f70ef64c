//! Result store errors.

/// Failure in the result store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No scan has succeeded in this session yet
    #[error("No scan result is available; run a scan first")]
    NoResult,

    /// Result file could not be written
    #[error("Failed to write result file '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Result could not be serialized
    #[error("Failed to serialize scan result: {0}")]
    Serialize(#[from] serde_json::Error),
}

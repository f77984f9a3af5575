use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the failure cases that can occur while configuring
/// the converter or driving the external exporter.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Raised when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when an exporter name outside the supported set is requested.
    #[error("unknown exporter '{name}', expected one of {allowed:?}")]
    InvalidExporter {
        name: String,
        allowed: Vec<&'static str>,
    },

    /// Raised when the output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when the exporter executable could not be started at all.
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when the exporter ran but reported failure.
    #[error("exporter exited unsuccessfully ({status})")]
    ExporterFailed { status: ExitStatus },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

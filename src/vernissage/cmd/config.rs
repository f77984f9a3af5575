use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::vernissage::cmd::exporter::Exporter;

/// Location of `VernissageCmd.exe` in a stock Vernissage 2.1 installation.
pub const DEFAULT_TOOL_PATH: &str =
    "C:/Program Files (x86)/Omicron NanoTechnology/Vernissage/V2.1/Bin/VernissageCmd.exe";

/// Value accepted by the setters to restore a built-in default.
pub const RESET_SENTINEL: &str = "default";

/// Settings used to build every exporter invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Path to the exporter executable. Stored verbatim, never checked.
    pub tool_path: PathBuf,
    /// Exporter plugin selected with `-exporter`.
    pub exporter: Exporter,
}

impl ConverterConfig {
    /// Creates a configuration using the given tool and the default exporter.
    pub fn with_tool(tool_path: impl Into<PathBuf>) -> Self {
        Self {
            tool_path: tool_path.into(),
            exporter: Exporter::default(),
        }
    }

    pub fn default_tool_path() -> &'static Path {
        Path::new(DEFAULT_TOOL_PATH)
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::with_tool(DEFAULT_TOOL_PATH)
    }
}

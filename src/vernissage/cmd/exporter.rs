use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::vernissage::cmd::error::ToolError;

/// Exporter plugins understood by `VernissageCmd.exe`.
///
/// The serialized form is the exact name the external tool expects after
/// `-exporter`, spaces included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Exporter {
    #[serde(rename = "BMP Exporter")]
    Bmp,
    #[serde(rename = "CasaXPS Exporter")]
    CasaXps,
    /// Flat file export, the tool's native interchange format.
    #[default]
    #[serde(rename = "Flattener")]
    Flattener,
    #[serde(rename = "IGOR5 Exporter")]
    Igor5,
    #[serde(rename = "JPG Exporter")]
    Jpg,
    #[serde(rename = "PHI MultiPak Exporter")]
    PhiMultiPak,
    #[serde(rename = "PNG Exporter")]
    Png,
    #[serde(rename = "TIFF Exporter")]
    Tiff,
    #[serde(rename = "VAMAS Exporter")]
    Vamas,
    #[serde(rename = "XY Curve Exporter")]
    XyCurve,
}

impl Exporter {
    /// Every supported exporter, in the order the tool documents them.
    pub const ALL: [Exporter; 10] = [
        Exporter::Bmp,
        Exporter::CasaXps,
        Exporter::Flattener,
        Exporter::Igor5,
        Exporter::Jpg,
        Exporter::PhiMultiPak,
        Exporter::Png,
        Exporter::Tiff,
        Exporter::Vamas,
        Exporter::XyCurve,
    ];

    /// Name passed on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Exporter::Bmp => "BMP Exporter",
            Exporter::CasaXps => "CasaXPS Exporter",
            Exporter::Flattener => "Flattener",
            Exporter::Igor5 => "IGOR5 Exporter",
            Exporter::Jpg => "JPG Exporter",
            Exporter::PhiMultiPak => "PHI MultiPak Exporter",
            Exporter::Png => "PNG Exporter",
            Exporter::Tiff => "TIFF Exporter",
            Exporter::Vamas => "VAMAS Exporter",
            Exporter::XyCurve => "XY Curve Exporter",
        }
    }

    /// Names of all supported exporters.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|exporter| exporter.as_str()).collect()
    }

    /// Listing of every exporter with the default one flagged.
    pub fn catalog() -> Vec<ExporterEntry> {
        Self::ALL
            .into_iter()
            .map(|exporter| ExporterEntry {
                name: exporter,
                default: exporter == Exporter::default(),
            })
            .collect()
    }
}

/// One row of the exporter listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExporterEntry {
    pub name: Exporter,
    pub default: bool,
}

impl fmt::Display for ExporterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.default {
            write!(f, "{} (default)", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

impl fmt::Display for Exporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exporter {
    type Err = ToolError;

    /// Matches exact names only; `"default"` is handled by the converter.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|exporter| exporter.as_str() == name)
            .ok_or_else(|| ToolError::InvalidExporter {
                name: name.to_string(),
                allowed: Self::names(),
            })
    }
}

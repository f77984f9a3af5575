//! Core library for the mtrx2flat command line application.
//!
//! The library wraps `VernissageCmd.exe`, the exporter shipped with Omicron
//! Vernissage, so MATRIX data directories can be batch-converted from code or
//! from the command line. Configuration lives in
//! [`vernissage::cmd::config`], the supported exporter plugins in
//! [`vernissage::cmd::exporter`], command-line construction in
//! [`vernissage::cmd::command`], and the conversion orchestration under
//! [`vernissage::cmd::convert`].

pub mod vernissage;

pub use vernissage::cmd::{Result, ToolError, command, config, convert, error, exporter};
pub use vernissage::cmd::config::ConverterConfig;
pub use vernissage::cmd::convert::{ConversionOutcome, ConversionRequest, Converter};
pub use vernissage::cmd::exporter::{Exporter, ExporterEntry};

pub mod command;
pub mod config;
pub mod convert;
pub mod error;
pub mod exporter;

pub use error::{Result, ToolError};

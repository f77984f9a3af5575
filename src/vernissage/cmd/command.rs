use std::ffi::OsString;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::process::Command;

use crate::vernissage::cmd::config::ConverterConfig;
use crate::vernissage::cmd::exporter::Exporter;

/// Lexically normalises a path: drops `.` segments, folds `name/..` pairs,
/// collapses repeated separators and renders with the platform separator.
///
/// The filesystem is never consulted, so symlinks are not resolved. An empty
/// result becomes `.`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(parts.last(), Some(Component::Normal(_))) {
                    parts.pop();
                } else if !matches!(parts.last(), Some(Component::RootDir)) {
                    // Leading `..` survives; `..` directly under the root is dropped.
                    parts.push(component);
                }
            }
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// One invocation of the exporter tool.
///
/// Renders as `<tool> -path "<input>" -outdir "<output>" -exporter <name>`.
/// Only the paths are quoted; the exporter name is passed bare and the tool
/// is expected to read everything after `-exporter` as the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: PathBuf,
    input: PathBuf,
    output: PathBuf,
    exporter: Exporter,
}

impl CommandLine {
    pub fn new(config: &ConverterConfig, input: &Path, output: &Path) -> Self {
        Self {
            program: config.tool_path.clone(),
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            exporter: config.exporter,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Argument text following the program, exactly as the tool receives it
    /// on Windows.
    pub fn arguments(&self) -> String {
        format!(
            "-path \"{}\" -outdir \"{}\" -exporter {}",
            self.input.display(),
            self.output.display(),
            self.exporter
        )
    }

    /// Argument vector equivalent to [`CommandLine::arguments`] after the
    /// tool's own tokenisation: the unquoted exporter name splits on spaces.
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv: Vec<OsString> = vec![
            "-path".into(),
            self.input.clone().into_os_string(),
            "-outdir".into(),
            self.output.clone().into_os_string(),
            "-exporter".into(),
        ];
        argv.extend(self.exporter.as_str().split_whitespace().map(OsString::from));
        argv
    }

    /// Builds the process to spawn. Standard streams are left for the caller
    /// to configure.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            command.raw_arg(self.arguments());
        }
        #[cfg(not(windows))]
        {
            command.args(self.argv());
        }
        command
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program.display(), self.arguments())
    }
}

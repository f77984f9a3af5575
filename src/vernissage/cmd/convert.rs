use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use tracing::{debug, info, instrument, warn};

use crate::vernissage::cmd::command::{CommandLine, normalize_path};
use crate::vernissage::cmd::config::{ConverterConfig, RESET_SENTINEL};
use crate::vernissage::cmd::error::{Result, ToolError};
use crate::vernissage::cmd::exporter::Exporter;

/// Parameters for a single conversion run.
#[derive(Debug)]
pub struct ConversionRequest {
    input_dir: PathBuf,
    output_dir: PathBuf,
    verbose: bool,
    stdout: Option<Stdio>,
    stderr: Option<Stdio>,
}

impl ConversionRequest {
    /// Verbose request with the exporter's streams inherited from this process.
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            verbose: true,
            stdout: None,
            stderr: None,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Redirects the exporter's standard output.
    pub fn stdout(mut self, sink: impl Into<Stdio>) -> Self {
        self.stdout = Some(sink.into());
        self
    }

    /// Redirects the exporter's standard error.
    pub fn stderr(mut self, sink: impl Into<Stdio>) -> Self {
        self.stderr = Some(sink.into());
        self
    }
}

/// What happened during a conversion run.
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    /// The command line exactly as it was announced.
    pub command_line: String,
    /// Normalised output directory handed to the tool.
    pub output_dir: PathBuf,
    /// Whether the output directory had to be created.
    pub created_output_dir: bool,
    /// Exit status reported by the exporter.
    pub status: ExitStatus,
}

impl ConversionOutcome {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Turns an unsuccessful exit status into an error.
    pub fn ensure_success(self) -> Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(ToolError::ExporterFailed {
                status: self.status,
            })
        }
    }
}

/// Drives `VernissageCmd.exe` with the current configuration.
///
/// Human-readable notices (configuration changes, directory creation, the
/// command line) are written to the console writer, standard output unless
/// replaced with [`Converter::with_console`].
pub struct Converter {
    config: ConverterConfig,
    console: Box<dyn Write + Send>,
}

impl Converter {
    pub fn new() -> Self {
        Self::with_config(ConverterConfig::default())
    }

    pub fn with_config(config: ConverterConfig) -> Self {
        Self {
            config,
            console: Box::new(io::stdout()),
        }
    }

    /// Replaces the writer that receives notices.
    pub fn with_console(mut self, console: impl Write + Send + 'static) -> Self {
        self.console = Box::new(console);
        self
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn tool_path(&self) -> &Path {
        &self.config.tool_path
    }

    pub fn exporter(&self) -> Exporter {
        self.config.exporter
    }

    pub fn exporter_name(&self) -> &'static str {
        self.config.exporter.as_str()
    }

    /// Points the converter at a different executable. `"default"` restores
    /// the stock installation path; anything else is kept as given.
    pub fn set_tool_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.config.tool_path = if path.as_os_str() == RESET_SENTINEL {
            ConverterConfig::default_tool_path().to_path_buf()
        } else {
            path
        };
        let message = format!(
            "VernissageCmd.exe path changed to {}",
            self.config.tool_path.display()
        );
        self.notify(&message);
    }

    /// Selects the exporter plugin by name. `"default"` restores
    /// [`Exporter::Flattener`]. Unknown names leave the configuration as it
    /// was and are reported both on the console and as an error.
    pub fn set_exporter_name(&mut self, name: &str) -> Result<Exporter> {
        let exporter = if name == RESET_SENTINEL {
            Exporter::default()
        } else {
            match name.parse::<Exporter>() {
                Ok(exporter) => exporter,
                Err(error) => {
                    let allowed: Vec<String> = Exporter::names()
                        .into_iter()
                        .map(|allowed| format!("'{allowed}'"))
                        .collect();
                    let message = format!(
                        "Unknown Exporter: {name}. Please use one of [{}].",
                        allowed.join(", ")
                    );
                    self.notify(&message);
                    return Err(error);
                }
            }
        };

        self.config.exporter = exporter;
        self.notify(&format!("Vernissage exporter changed to: {exporter}"));
        Ok(exporter)
    }

    /// Converts every file under the request's input directory into the
    /// output directory, creating the latter (one level only) when missing.
    ///
    /// Blocks until the exporter exits. A failing exit status is logged and
    /// returned in the outcome rather than raised; see
    /// [`ConversionOutcome::ensure_success`].
    #[instrument(
        level = "info",
        skip_all,
        fields(
            input = %request.input_dir.display(),
            output = %request.output_dir.display(),
            exporter = %self.config.exporter
        )
    )]
    pub fn convert(&mut self, request: ConversionRequest) -> Result<ConversionOutcome> {
        let input_dir = normalize_path(&request.input_dir);
        let output_dir = normalize_path(&request.output_dir);

        let created_output_dir = self.ensure_output_dir(&output_dir, request.verbose)?;

        let line = CommandLine::new(&self.config, &input_dir, &output_dir);
        let command_line = line.to_string();
        self.notify(&command_line);
        if request.verbose {
            self.notify(&format!("Converting data to: {}", output_dir.display()));
        }
        // Keep notices ahead of anything the exporter writes to the same stream.
        if let Err(error) = self.console.flush() {
            debug!(%error, "failed to flush console");
        }

        let mut command = line.to_command();
        if let Some(stdout) = request.stdout {
            command.stdout(stdout);
        }
        if let Some(stderr) = request.stderr {
            command.stderr(stderr);
        }
        debug!(argv = ?line.argv(), "launching exporter");

        let status = command.status().map_err(|source| ToolError::Launch {
            program: line.program().to_path_buf(),
            source,
        })?;

        if status.success() {
            info!(%status, "conversion finished");
        } else {
            warn!(%status, "exporter reported failure");
        }

        Ok(ConversionOutcome {
            command_line,
            output_dir,
            created_output_dir,
            status,
        })
    }

    fn ensure_output_dir(&mut self, output_dir: &Path, verbose: bool) -> Result<bool> {
        if output_dir.is_dir() {
            debug!("output directory already present");
            return Ok(false);
        }

        if verbose {
            self.notify(&format!("Creating {}", output_dir.display()));
        }
        match fs::create_dir(output_dir) {
            Ok(()) => Ok(true),
            // Someone else created it between the check and here.
            Err(error) if error.kind() == io::ErrorKind::AlreadyExists && output_dir.is_dir() => {
                Ok(false)
            }
            Err(source) => Err(ToolError::CreateOutputDir {
                path: output_dir.to_path_buf(),
                source,
            }),
        }
    }

    fn notify(&mut self, message: &str) {
        if let Err(error) = writeln!(self.console, "{message}") {
            debug!(%error, "failed to write console notice");
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

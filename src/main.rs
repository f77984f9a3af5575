use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use mtrx2flat::{ConversionRequest, Converter, Exporter, Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging(cli.verbose) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) -> Result<()> {
    let fallback = match verbosity {
        0 => "mtrx2flat=warn",
        1 => "mtrx2flat=info",
        _ => "mtrx2flat=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Convert(args) => execute_convert(args),
        Command::Exporters(args) => list_exporters(args),
        Command::Config(args) => show_config(args),
    }
}

fn execute_convert(args: ConvertArgs) -> Result<()> {
    let mut converter = args.tool.configure(Converter::new())?;
    let request = ConversionRequest::new(args.input, args.output).verbose(!args.quiet);
    converter.convert(request)?.ensure_success()?;
    Ok(())
}

fn list_exporters(args: ExportersArgs) -> Result<()> {
    let entries = Exporter::catalog();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in entries {
        println!("{entry}");
    }
    Ok(())
}

fn show_config(args: ToolArgs) -> Result<()> {
    // Notices go to stderr so stdout stays valid JSON.
    let converter = args.configure(Converter::new().with_console(std::io::stderr()))?;
    println!("{}", serde_json::to_string_pretty(converter.config())?);
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Batch-convert Omicron MATRIX data with VernissageCmd.exe."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a directory of MATRIX files.
    Convert(ConvertArgs),
    /// List the exporter plugins VernissageCmd.exe accepts.
    Exporters(ExportersArgs),
    /// Print the effective configuration as JSON.
    Config(ToolArgs),
}

#[derive(clap::Args)]
struct ToolArgs {
    /// Path to VernissageCmd.exe, or "default" for the stock install location.
    #[arg(long)]
    tool: Option<PathBuf>,

    /// Exporter plugin name, or "default" for Flattener.
    #[arg(long)]
    exporter: Option<String>,
}

impl ToolArgs {
    fn configure(self, mut converter: Converter) -> Result<Converter> {
        if let Some(tool) = self.tool {
            converter.set_tool_path(tool);
        }
        if let Some(exporter) = self.exporter {
            converter.set_exporter_name(&exporter)?;
        }
        Ok(converter)
    }
}

#[derive(clap::Args)]
struct ConvertArgs {
    /// Directory holding the MATRIX data to convert.
    #[arg(long)]
    input: PathBuf,

    /// Directory receiving the exported files. Created if missing.
    #[arg(long)]
    output: PathBuf,

    /// Only print the command line.
    #[arg(long)]
    quiet: bool,

    #[command(flatten)]
    tool: ToolArgs,
}

#[derive(clap::Args)]
struct ExportersArgs {
    /// Emit the list as JSON.
    #[arg(long)]
    json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_unknown_exporter() {
        let cli = Cli::try_parse_from(["mtrx2flat", "config", "--exporter", "CSV Exporter"])
            .expect("arguments parsed");

        let error = run(cli).expect_err("unknown exporter rejected");

        assert!(matches!(error, ToolError::InvalidExporter { .. }), "{error}");
    }

    #[test]
    fn config_accepts_tool_and_exporter_overrides() {
        let cli = Cli::try_parse_from([
            "mtrx2flat",
            "config",
            "--tool",
            "/opt/vernissage/VernissageCmd",
            "--exporter",
            "VAMAS Exporter",
        ])
        .expect("arguments parsed");
        let Command::Config(args) = cli.command else {
            panic!("config subcommand expected");
        };

        let converter = args
            .configure(Converter::new().with_console(std::io::sink()))
            .expect("configuration applied");

        assert_eq!(
            converter.tool_path(),
            std::path::Path::new("/opt/vernissage/VernissageCmd")
        );
        assert_eq!(converter.exporter(), Exporter::Vamas);
    }

    #[test]
    fn convert_requires_input_and_output() {
        assert!(Cli::try_parse_from(["mtrx2flat", "convert", "--input", "scans"]).is_err());
    }
}

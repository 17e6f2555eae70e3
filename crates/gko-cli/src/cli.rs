use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gko_config::{OutputConfig, OutputFormat};

/// Output form selectable on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FormatArg {
    Json,
    Lines,
    Both,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::Lines => Self::Lines,
            FormatArg::Both => Self::Both,
        }
    }
}

/// Top-level CLI parser for the `gko` binary.
#[derive(Debug, Parser)]
#[command(
    name = "gko",
    version,
    about = "Print the Ginkgo spec outline of Go test files"
)]
pub struct Cli {
    /// Go source files of one package, traversed in the order given
    #[arg(required_unless_present = "schema")]
    pub files: Vec<PathBuf>,

    /// Output form: json, lines, both (defaults to config `output.format`)
    #[arg(short, long)]
    pub format: Option<FormatArg>,

    /// Print the nested form on a single line
    #[arg(long)]
    pub compact: bool,

    /// Quiet mode (error-level logging only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Extra TOML config file layered above the discovered ones
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the JSON Schema of the nested form and exit
    #[arg(long)]
    pub schema: bool,
}

/// Effective output settings after flags override config.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Cli {
    #[must_use]
    pub fn output_settings(&self, config: &OutputConfig) -> OutputSettings {
        OutputSettings {
            format: self.format.map_or(config.format, Into::into),
            pretty: config.pretty && !self.compact,
        }
    }

    /// Tracing level used when `GKO_LOG` is unset.
    #[must_use]
    pub fn log_level<'a>(&self, configured: &'a str) -> &'a str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            configured
        }
    }
}

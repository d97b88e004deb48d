// src/config.rs
use clap::Parser;
use std::path::PathBuf;

use crate::constants::{DEFAULT_OUTPUT_DIR, ENV_DEFAULT_FORMAT, ENV_OUTPUT_DIR};
use crate::error::Result;
use crate::format::Format;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Input document to export (JSON, or YAML by extension)
    pub input: Option<PathBuf>,

    /// Output filename; its extension picks the format unless -f is given
    #[arg(short, long)]
    pub output: Option<String>,

    /// Export format token (e.g. "csv", "md", "xlsx")
    #[arg(short, long)]
    pub format: Option<String>,

    /// Directory for relative output paths
    #[arg(short = 'd', long)]
    pub output_dir: Option<String>,

    /// Document title for Markdown and HTML output
    #[arg(long)]
    pub title: Option<String>,

    /// Root element name for XML output
    #[arg(long)]
    pub root_element: Option<String>,

    /// Worksheet name for Excel output
    #[arg(long)]
    pub sheet_name: Option<String>,

    /// Table name for SQLite output
    #[arg(long)]
    pub table_name: Option<String>,

    /// Explicit CSV column order (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub headers: Option<Vec<String>>,

    /// Write compact JSON instead of pretty-printed
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// List the supported format tokens and exit
    #[arg(long, default_value_t = false)]
    pub list_formats: bool,
}

/// The two settings the engine consumes: where relative output paths land
/// and which format applies when neither the call nor the filename picks
/// one.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub default_format: Format,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            default_format: Format::Json,
        }
    }
}

impl ExportConfig {
    /// Built-in defaults overridden by the `OUTFORM_OUTPUT_DIR` and
    /// `OUTFORM_FORMAT` environment variables. A format token the registry
    /// does not know fails here rather than at the first export.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var(ENV_OUTPUT_DIR) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Ok(token) = std::env::var(ENV_DEFAULT_FORMAT) {
            config.default_format = token.parse()?;
        }
        Ok(config)
    }

    /// Resolves the effective configuration: command-line flags over
    /// environment variables over built-in defaults. The `-f` flag is not
    /// part of this layering; it travels with the individual export call.
    pub fn resolve(cli: &CommandLineInput) -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Some(dir) = &cli.output_dir {
            config.output_dir = PathBuf::from(dir);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use std::env;

    #[test]
    fn defaults_point_at_output_dir_and_json() {
        let config = ExportConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("./output"));
        assert_eq!(config.default_format, Format::Json);
    }

    // Environment access is process-global, so every env assertion lives
    // in this one sequential test.
    #[test]
    fn environment_and_cli_layer_over_defaults() {
        env::set_var(ENV_OUTPUT_DIR, "/tmp/outform-env");
        env::set_var(ENV_DEFAULT_FORMAT, "yaml");

        let config = ExportConfig::from_env().unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/outform-env"));
        assert_eq!(config.default_format, Format::Yaml);

        // A CLI flag beats the environment.
        let cli = CommandLineInput::parse_from([
            "outform",
            "in.json",
            "--output-dir",
            "/tmp/outform-cli",
        ]);
        let config = ExportConfig::resolve(&cli).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/outform-cli"));
        assert_eq!(config.default_format, Format::Yaml);

        // A bad token in the environment fails fast.
        env::set_var(ENV_DEFAULT_FORMAT, "parquet");
        let err = ExportConfig::from_env().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);

        env::remove_var(ENV_OUTPUT_DIR);
        env::remove_var(ENV_DEFAULT_FORMAT);

        let config = ExportConfig::from_env().unwrap();
        assert_eq!(config.output_dir, PathBuf::from("./output"));
        assert_eq!(config.default_format, Format::Json);
    }

    #[test]
    fn cli_parses_per_format_knobs() {
        let cli = CommandLineInput::parse_from([
            "outform",
            "in.json",
            "-o",
            "report",
            "-f",
            "markdown",
            "--title",
            "Quarterly",
            "--headers",
            "name,age",
            "--compact",
        ]);
        assert_eq!(cli.input, Some(PathBuf::from("in.json")));
        assert_eq!(cli.output.as_deref(), Some("report"));
        assert_eq!(cli.format.as_deref(), Some("markdown"));
        assert_eq!(cli.title.as_deref(), Some("Quarterly"));
        assert_eq!(
            cli.headers,
            Some(vec!["name".to_string(), "age".to_string()])
        );
        assert!(cli.compact);
        assert!(!cli.verbose);
    }
}

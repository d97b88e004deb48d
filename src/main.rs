// src/main.rs

// Modules defined in the crate
mod config;
mod constants;
mod error;
mod export;
mod format;
mod model;
mod opaque;
mod render;
mod table;

// Specific imports
use crate::config::{CommandLineInput, ExportConfig};
use crate::error::ExportError;
use anyhow::Context;
use clap::Parser;
use export::Exporter;
use format::{supported_formats, Format};
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use model::Value;
use opaque::{read_pickle, JsonOptions};
use render::{HtmlOptions, MarkdownOptions, XmlOptions};
use std::fs;
use std::path::{Path, PathBuf};
use table::{CsvOptions, ExcelOptions, SqliteOptions};

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("outform.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Reads the input document into a value tree. The parser is picked by
/// extension: YAML for `.yaml`/`.yml`, a binary snapshot for
/// `.pkl`/`.pickle`, JSON for everything else.
fn read_input(path: &Path) -> anyhow::Result<Value> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("yaml") | Some("yml") => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_yaml::from_str(&text)
                .with_context(|| format!("parsing {} as YAML", path.display()))
        }
        Some("pkl") | Some("pickle") => {
            let value = read_pickle(path)
                .with_context(|| format!("reading {} as a binary snapshot", path.display()))?;
            Ok(value)
        }
        _ => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing {} as JSON", path.display()))
        }
    }
}

/// Runs one export, routing per-format CLI knobs to the matching options.
fn run_export(
    exporter: &Exporter,
    cli: &CommandLineInput,
    value: &Value,
    filename: &str,
    format: Format,
) -> Result<PathBuf, ExportError> {
    match format {
        Format::Csv => match &cli.headers {
            Some(headers) => {
                exporter.export_csv_with(value, filename, &CsvOptions::with_headers(headers.clone()))
            }
            None => exporter.export_csv(value, filename),
        },
        Format::Json => {
            if cli.compact {
                exporter.export_json_with(value, filename, &JsonOptions::compact())
            } else {
                exporter.export_json(value, filename)
            }
        }
        Format::Xml => match &cli.root_element {
            Some(root) => {
                exporter.export_xml_with(value, filename, &XmlOptions::with_root(root.as_str()))
            }
            None => exporter.export_xml(value, filename),
        },
        Format::Markdown => match &cli.title {
            Some(title) => exporter.export_markdown_with(
                value,
                filename,
                &MarkdownOptions::with_title(title.as_str()),
            ),
            None => exporter.export_markdown(value, filename),
        },
        Format::Html => match &cli.title {
            Some(title) => {
                exporter.export_html_with(value, filename, &HtmlOptions::with_title(title.as_str()))
            }
            None => exporter.export_html(value, filename),
        },
        Format::Yaml => exporter.export_yaml(value, filename),
        Format::Excel => match &cli.sheet_name {
            Some(name) => exporter.export_excel_with(
                value,
                filename,
                &ExcelOptions::with_sheet_name(name.as_str()),
            ),
            None => exporter.export_excel(value, filename),
        },
        Format::Sqlite => match &cli.table_name {
            Some(name) => exporter.export_sqlite_with(
                value,
                filename,
                &SqliteOptions::with_table_name(name.as_str()),
            ),
            None => exporter.export_sqlite(value, filename),
        },
        Format::Pickle => exporter.export_pickle(value, filename),
    }
}

/// Prints the format registry, one token per line with its aliases.
fn print_formats() {
    println!("Supported export formats ({}):", supported_formats().len());
    for format in Format::ALL {
        let aliases = format.aliases();
        if aliases.is_empty() {
            println!("  {}", format.token());
        } else {
            println!("  {} (aliases: {})", format.token(), aliases.join(", "));
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    if cli.list_formats {
        print_formats();
        return Ok(());
    }

    let input = cli
        .input
        .clone()
        .context("no input document given (use --list-formats to see the registry)")?;
    let value = read_input(&input)?;
    println!("📄 Read {} from {}", value.variant_name(), input.display());

    let config = ExportConfig::resolve(&cli)?;
    let exporter = Exporter::new(config);

    let filename = match &cli.output {
        Some(name) => name.clone(),
        None => input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("export")
            .to_string(),
    };

    let format = exporter
        .resolve_format(&filename, cli.format.as_deref())
        .with_context(|| format!("supported formats: {}", supported_formats().join(", ")))?;

    let path = run_export(&exporter, &cli, &value, &filename, format).map_err(|e| {
        log::error!("Export failed ({}): {}", e.kind(), e);
        e
    })?;
    println!("✓ Exported {} to {}", format.display_name(), path.display());

    Ok(())
}

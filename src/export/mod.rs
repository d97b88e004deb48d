// src/export/mod.rs
//! The dispatcher: resolves a format, places the artifact on disk, checks
//! the shape precondition, and hands the value to the right codec.

pub mod paths;

use std::fs;
use std::path::PathBuf;

use log::{debug, info};

use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::format::Format;
use crate::model::{Mapping, Value};
use crate::opaque::{self, JsonOptions};
use crate::render::{render_html, render_markdown, render_xml};
use crate::render::{HtmlOptions, MarkdownOptions, XmlOptions};
use crate::table::{write_csv, write_excel, write_sqlite};
use crate::table::{CsvOptions, ExcelOptions, SqliteOptions};

/// The export engine. Owns its configuration; every call is independent,
/// borrows the value immutably, and returns the absolute path of the
/// artifact it produced.
///
/// ```no_run
/// use outform::{ExportConfig, Exporter, Value};
/// use serde_json::json;
///
/// let exporter = Exporter::new(ExportConfig::default());
/// let value = Value::from(json!({"status": "ok"}));
/// let path = exporter.export(&value, "report", Some("markdown"))?;
/// # Ok::<(), outform::ExportError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// An exporter over the built-in defaults: `./output`, JSON.
    #[allow(dead_code)] // Public API - may be used by library consumers
    pub fn with_defaults() -> Self {
        Self::new(ExportConfig::default())
    }

    #[allow(dead_code)] // Public API - may be used by library consumers
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Which format an export call would use. First match wins: the
    /// explicit token, the filename extension, the configured default.
    /// An explicit token or a present extension that the registry does
    /// not know fails; there is no silent fallback past either.
    pub fn resolve_format(&self, filename: &str, explicit: Option<&str>) -> Result<Format> {
        let format = match explicit {
            Some(token) => token.parse()?,
            None => match paths::filename_extension(filename) {
                Some(ext) => ext.parse()?,
                None => self.config.default_format,
            },
        };
        debug!("Resolved format {format} for {filename}");
        Ok(format)
    }

    /// Export `value` to `filename`, resolving the format per
    /// [`resolve_format`](Self::resolve_format). Default options apply;
    /// callers with per-format knobs use the `_with` entry points.
    #[allow(dead_code)] // Public API - may be used by library consumers
    pub fn export(&self, value: &Value, filename: &str, format: Option<&str>) -> Result<PathBuf> {
        let format = self.resolve_format(filename, format)?;
        self.export_as(value, filename, format)
    }

    /// Export with the format already decided.
    #[allow(dead_code)] // Public API - may be used by library consumers
    pub fn export_as(&self, value: &Value, filename: &str, format: Format) -> Result<PathBuf> {
        match format {
            Format::Csv => self.export_csv(value, filename),
            Format::Json => self.export_json(value, filename),
            Format::Xml => self.export_xml(value, filename),
            Format::Markdown => self.export_markdown(value, filename),
            Format::Html => self.export_html(value, filename),
            Format::Yaml => self.export_yaml(value, filename),
            Format::Excel => self.export_excel(value, filename),
            Format::Sqlite => self.export_sqlite(value, filename),
            Format::Pickle => self.export_pickle(value, filename),
        }
    }

    pub fn export_csv(&self, value: &Value, filename: &str) -> Result<PathBuf> {
        self.export_csv_with(value, filename, &CsvOptions::default())
    }

    pub fn export_csv_with(
        &self,
        value: &Value,
        filename: &str,
        options: &CsvOptions,
    ) -> Result<PathBuf> {
        let records = require_record_set(Format::Csv, value)?;
        let path = self.prepare_destination(filename, Format::Csv)?;
        write_csv(records, &path, options)?;
        info!("Exported {} records to CSV file: {}", records.len(), path.display());
        Ok(path)
    }

    pub fn export_json(&self, value: &Value, filename: &str) -> Result<PathBuf> {
        self.export_json_with(value, filename, &JsonOptions::default())
    }

    pub fn export_json_with(
        &self,
        value: &Value,
        filename: &str,
        options: &JsonOptions,
    ) -> Result<PathBuf> {
        let path = self.prepare_destination(filename, Format::Json)?;
        opaque::write_json(value, &path, options)?;
        info!("Exported data to JSON file: {}", path.display());
        Ok(path)
    }

    pub fn export_xml(&self, value: &Value, filename: &str) -> Result<PathBuf> {
        self.export_xml_with(value, filename, &XmlOptions::default())
    }

    pub fn export_xml_with(
        &self,
        value: &Value,
        filename: &str,
        options: &XmlOptions,
    ) -> Result<PathBuf> {
        let entries = require_mapping(Format::Xml, value)?;
        let path = self.prepare_destination(filename, Format::Xml)?;
        let doc = render_xml(entries, options);
        fs::write(&path, doc).map_err(|e| ExportError::io_failure(&path, e))?;
        info!("Exported data to XML file: {}", path.display());
        Ok(path)
    }

    pub fn export_markdown(&self, value: &Value, filename: &str) -> Result<PathBuf> {
        self.export_markdown_with(value, filename, &MarkdownOptions::default())
    }

    pub fn export_markdown_with(
        &self,
        value: &Value,
        filename: &str,
        options: &MarkdownOptions,
    ) -> Result<PathBuf> {
        let entries = require_mapping(Format::Markdown, value)?;
        let path = self.prepare_destination(filename, Format::Markdown)?;
        let doc = render_markdown(entries, options);
        fs::write(&path, doc).map_err(|e| ExportError::io_failure(&path, e))?;
        info!("Exported data to Markdown file: {}", path.display());
        Ok(path)
    }

    pub fn export_html(&self, value: &Value, filename: &str) -> Result<PathBuf> {
        self.export_html_with(value, filename, &HtmlOptions::default())
    }

    pub fn export_html_with(
        &self,
        value: &Value,
        filename: &str,
        options: &HtmlOptions,
    ) -> Result<PathBuf> {
        let entries = require_mapping(Format::Html, value)?;
        let path = self.prepare_destination(filename, Format::Html)?;
        let doc = render_html(entries, options);
        fs::write(&path, doc).map_err(|e| ExportError::io_failure(&path, e))?;
        info!("Exported data to HTML file: {}", path.display());
        Ok(path)
    }

    pub fn export_yaml(&self, value: &Value, filename: &str) -> Result<PathBuf> {
        let path = self.prepare_destination(filename, Format::Yaml)?;
        opaque::write_yaml(value, &path)?;
        info!("Exported data to YAML file: {}", path.display());
        Ok(path)
    }

    pub fn export_excel(&self, value: &Value, filename: &str) -> Result<PathBuf> {
        self.export_excel_with(value, filename, &ExcelOptions::default())
    }

    pub fn export_excel_with(
        &self,
        value: &Value,
        filename: &str,
        options: &ExcelOptions,
    ) -> Result<PathBuf> {
        let records = require_record_set(Format::Excel, value)?;
        let path = self.prepare_destination(filename, Format::Excel)?;
        write_excel(records, &path, options)?;
        info!("Exported {} records to Excel file: {}", records.len(), path.display());
        Ok(path)
    }

    pub fn export_sqlite(&self, value: &Value, filename: &str) -> Result<PathBuf> {
        self.export_sqlite_with(value, filename, &SqliteOptions::default())
    }

    pub fn export_sqlite_with(
        &self,
        value: &Value,
        filename: &str,
        options: &SqliteOptions,
    ) -> Result<PathBuf> {
        let records = require_record_set(Format::Sqlite, value)?;
        let path = self.prepare_destination(filename, Format::Sqlite)?;
        write_sqlite(records, &path, options)?;
        info!(
            "Exported {} records to SQLite database: {}",
            records.len(),
            path.display()
        );
        Ok(path)
    }

    pub fn export_pickle(&self, value: &Value, filename: &str) -> Result<PathBuf> {
        let path = self.prepare_destination(filename, Format::Pickle)?;
        opaque::write_pickle(value, &path)?;
        info!("Exported data to pickle file: {}", path.display());
        Ok(path)
    }

    /// The absolute path an export will write to, with parent directories
    /// created: extension ensured, relative names joined under the
    /// configured output directory, then absolutized lexically. On
    /// failure past this point a partial file may remain at the returned
    /// path.
    fn prepare_destination(&self, filename: &str, format: Format) -> Result<PathBuf> {
        let named = paths::ensure_extension(filename, format);
        let mut destination = PathBuf::from(named);
        if destination.is_relative() {
            destination = self.config.output_dir.join(destination);
        }
        let destination = std::path::absolute(&destination)
            .map_err(|e| ExportError::io_failure(&destination, e))?;
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|e| ExportError::io_failure(parent, e))?;
        }
        debug!("Resolved destination: {}", destination.display());
        Ok(destination)
    }
}

fn require_mapping(format: Format, value: &Value) -> Result<&Mapping> {
    value
        .as_mapping()
        .ok_or_else(|| ExportError::shape_violation(format))
}

fn require_record_set(format: Format, value: &Value) -> Result<&[Value]> {
    if !format.shape().admits(value) {
        return Err(ExportError::shape_violation(format));
    }
    Ok(value.as_sequence().unwrap_or(&[]))
}

// src/lib.rs
//! outform library — renders hierarchical data into durable artifact files.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `ExportError`, `ErrorKind`, `Result`
//! - **Configuration** — `ExportConfig`, `CommandLineInput`
//! - **Data model** — `Value`, `Scalar`, `Mapping`
//! - **Format registry** — `Format`, `Shape`, `supported_formats`
//! - **Export engine** — `Exporter` and its per-format methods
//! - **Codecs** — `render_markdown`, `render_html`, `render_xml`, `write_csv`, etc.

// Internal modules — must match what's in main.rs
mod config;
mod constants;
mod error;
mod export;
mod format;
mod model;
mod opaque;
mod render;
mod table;

// --- Error Handling ---
pub use crate::error::{ErrorKind, ExportError, Result};

// --- Configuration ---
pub use crate::config::{CommandLineInput, ExportConfig};

// --- Data Model ---
pub use crate::model::{Mapping, Scalar, Value};

// --- Format Registry ---
pub use crate::format::{supported_formats, Format, Shape};

// --- Export Engine ---
pub use crate::export::paths::{ensure_extension, filename_extension, has_accepted_extension};
pub use crate::export::Exporter;

// --- Markup Renderers ---
pub use crate::render::{
    render_html, render_markdown, render_xml, sanitize_element_name, HtmlOptions, MarkdownOptions,
    XmlOptions,
};

// --- Tabular Codecs ---
pub use crate::table::{
    cell_text, write_csv, write_excel, write_sqlite, CsvOptions, ExcelOptions, RecordTable,
    SqliteOptions,
};

// --- Serialized Snapshots ---
pub use crate::opaque::{read_pickle, write_json, write_pickle, write_yaml, JsonOptions};

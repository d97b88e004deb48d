// src/format.rs
//! The format registry: every artifact format the engine can produce.
//!
//! Instead of dispatching on magic strings like `"xlsx"`, the format
//! vocabulary is encoded in the type system. `Format` is the registry:
//! the exhaustive matches below are the single source of truth for
//! canonical tokens, accepted aliases, on-disk extensions, and the
//! structural precondition each codec places on its input.

use std::fmt;
use std::str::FromStr;

use crate::error::ExportError;
use crate::model::Value;

/// A canonical export format.
///
/// Variants are ordered the way `supported_formats` reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Comma-separated values; requires a record set.
    Csv,
    /// JSON text, pretty-printed by default.
    Json,
    /// XML document built by recursive structural descent.
    Xml,
    /// Markdown document built by recursive structural descent.
    Markdown,
    /// Self-contained styled HTML document.
    Html,
    /// YAML text in block style.
    Yaml,
    /// Excel workbook with a single worksheet.
    Excel,
    /// SQLite database with a single table.
    Sqlite,
    /// Compact binary snapshot of the value tree.
    Pickle,
}

impl Format {
    /// Every supported format, in registry order.
    pub const ALL: [Format; 9] = [
        Format::Csv,
        Format::Json,
        Format::Xml,
        Format::Markdown,
        Format::Html,
        Format::Yaml,
        Format::Excel,
        Format::Sqlite,
        Format::Pickle,
    ];

    /// Resolves a format token to the canonical format.
    ///
    /// Matching is case-insensitive, accepts every alias, and strips one
    /// leading `.` so a filename extension can be passed directly.
    /// Returns `None` for tokens outside the registry.
    pub fn from_token(token: &str) -> Option<Format> {
        let token = token.strip_prefix('.').unwrap_or(token);
        let token = token.to_ascii_lowercase();
        match token.as_str() {
            "csv" => Some(Format::Csv),
            "json" => Some(Format::Json),
            "xml" => Some(Format::Xml),
            "markdown" | "md" => Some(Format::Markdown),
            "html" => Some(Format::Html),
            "yaml" | "yml" => Some(Format::Yaml),
            "excel" | "xlsx" => Some(Format::Excel),
            "sqlite" | "db" => Some(Format::Sqlite),
            "pickle" | "pkl" => Some(Format::Pickle),
            _ => None,
        }
    }

    /// The canonical token for this format.
    pub fn token(&self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Json => "json",
            Format::Xml => "xml",
            Format::Markdown => "markdown",
            Format::Html => "html",
            Format::Yaml => "yaml",
            Format::Excel => "excel",
            Format::Sqlite => "sqlite",
            Format::Pickle => "pickle",
        }
    }

    /// Human-facing name used in error messages and CLI listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Format::Csv => "CSV",
            Format::Json => "JSON",
            Format::Xml => "XML",
            Format::Markdown => "Markdown",
            Format::Html => "HTML",
            Format::Yaml => "YAML",
            Format::Excel => "Excel",
            Format::Sqlite => "SQLite",
            Format::Pickle => "Pickle",
        }
    }

    /// Alternate spellings accepted for this format, canonical token excluded.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Format::Markdown => &["md"],
            Format::Yaml => &["yml"],
            Format::Excel => &["xlsx"],
            Format::Sqlite => &["db"],
            Format::Pickle => &["pkl"],
            _ => &[],
        }
    }

    /// The canonical on-disk suffix, without the dot.
    ///
    /// Note this is not always the token: markdown artifacts end in `.md`,
    /// Excel in `.xlsx`, SQLite in `.db`, pickle in `.pkl`.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Json => "json",
            Format::Xml => "xml",
            Format::Markdown => "md",
            Format::Html => "html",
            Format::Yaml => "yaml",
            Format::Excel => "xlsx",
            Format::Sqlite => "db",
            Format::Pickle => "pkl",
        }
    }

    /// Suffix spellings that count as "extension already present" when the
    /// output path is resolved, without dots.
    ///
    /// Covers the canonical extension plus alias spellings, so
    /// `report.yml` is not renamed to `report.yml.yaml`.
    pub fn accepted_extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Csv => &["csv"],
            Format::Json => &["json"],
            Format::Xml => &["xml"],
            Format::Markdown => &["md"],
            Format::Html => &["html"],
            Format::Yaml => &["yaml", "yml"],
            Format::Excel => &["xlsx"],
            Format::Sqlite => &["db"],
            Format::Pickle => &["pkl", "pickle"],
        }
    }

    /// The structural precondition the codec places on its input.
    pub fn shape(&self) -> Shape {
        match self {
            Format::Csv | Format::Excel | Format::Sqlite => Shape::RecordSet,
            Format::Xml | Format::Markdown | Format::Html => Shape::Mapping,
            Format::Json | Format::Yaml | Format::Pickle => Shape::Any,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Format {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::from_token(s).ok_or_else(|| ExportError::UnsupportedFormat {
            token: s.to_string(),
        })
    }
}

/// The canonical format tokens, in registry order.
///
/// This is the discovery surface for callers that want to present the
/// engine's capabilities without hardcoding them.
pub fn supported_formats() -> Vec<&'static str> {
    Format::ALL.iter().map(|f| f.token()).collect()
}

/// Structural precondition a format places on the exported value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Any value tree is acceptable.
    Any,
    /// The top level must be a mapping.
    Mapping,
    /// The value must be a sequence of flat records
    /// (mappings whose every field is a scalar).
    RecordSet,
}

impl Shape {
    /// Whether `value` satisfies this precondition.
    pub fn admits(&self, value: &Value) -> bool {
        match self {
            Shape::Any => true,
            Shape::Mapping => value.is_mapping(),
            Shape::RecordSet => value.is_record_set(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Any => write!(f, "any value"),
            Shape::Mapping => write!(f, "a mapping at the top level"),
            Shape::RecordSet => write!(f, "a sequence of flat records (mappings of scalar fields)"),
        }
    }
}

// src/table/csv.rs
//! CSV codec.

use std::fs::File;
use std::path::Path;

use crate::error::{ExportError, Result};
use crate::format::Format;
use crate::model::Value;

use super::{cell_text, RecordTable};

/// Knobs for the CSV codec.
#[derive(Debug, Clone, Default)]
pub struct CsvOptions {
    /// Explicit column order. When unset, the first record's key order
    /// decides the columns.
    pub headers: Option<Vec<String>>,
}

impl CsvOptions {
    pub fn with_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: Some(headers.into_iter().map(Into::into).collect()),
        }
    }
}

/// Write a record set as CSV: one header row, then one row per record.
///
/// With no columns to write (empty record set and no explicit headers)
/// the file is created empty; explicit headers over an empty set produce
/// a header-only file.
pub fn write_csv(records: &[Value], path: &Path, options: &CsvOptions) -> Result<()> {
    let table = RecordTable::project(records, options.headers.as_deref());

    let file = File::create(path).map_err(|e| ExportError::io_failure(path, e))?;
    let mut writer = csv::Writer::from_writer(file);

    if !table.headers().is_empty() {
        writer
            .write_record(table.headers())
            .map_err(|e| ExportError::codec_failure(Format::Csv, path, e))?;
        for row in table.rows() {
            writer
                .write_record(row.into_iter().map(cell_text))
                .map_err(|e| ExportError::codec_failure(Format::Csv, path, e))?;
        }
    }

    writer
        .flush()
        .map_err(|e| ExportError::io_failure(path, e))?;
    Ok(())
}

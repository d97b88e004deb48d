// src/table/mod.rs
//! Tabular codecs: record sets projected onto a fixed column grid.
//!
//! CSV, Excel, and SQLite all consume the same projection. Columns come
//! from an explicit header list or from the first record's key order;
//! every record is then read positionally against those columns. A record
//! missing a column yields an empty cell, and keys outside the column set
//! are dropped without comment, so records that drift from the first
//! record's shape lose data silently. Callers that care should pass
//! explicit headers.

pub mod csv;
pub mod excel;
pub mod sqlite;

pub use self::csv::{write_csv, CsvOptions};
pub use self::excel::{write_excel, ExcelOptions};
pub use self::sqlite::{write_sqlite, SqliteOptions};

use crate::model::{Mapping, Scalar, Value};

/// A record set projected onto a fixed header order.
#[derive(Debug)]
pub struct RecordTable<'a> {
    headers: Vec<String>,
    records: Vec<&'a Mapping>,
}

impl<'a> RecordTable<'a> {
    /// Project `items` onto a column grid. Non-mapping items are skipped;
    /// the dispatcher's shape check rejects them before this point, so the
    /// skip only matters for direct callers.
    pub fn project(items: &'a [Value], headers: Option<&[String]>) -> Self {
        let records: Vec<&'a Mapping> = items.iter().filter_map(Value::as_mapping).collect();
        let headers = match headers {
            Some(list) => list.to_vec(),
            None => records
                .first()
                .map(|first| first.keys().cloned().collect())
                .unwrap_or_default(),
        };
        Self { headers, records }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[allow(dead_code)] // Public API - may be used by library consumers
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Rows in record order; each row holds one cell per header, `None`
    /// where the record has no such key or the value is not a scalar.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Option<&'a Scalar>>> + '_ {
        self.records.iter().map(move |record| {
            self.headers
                .iter()
                .map(|header| record.get(header).and_then(Value::as_scalar))
                .collect()
        })
    }

    /// All cells of one column, in record order.
    pub fn column<'b>(&'b self, header: &'b str) -> impl Iterator<Item = Option<&'a Scalar>> + 'b {
        self.records
            .iter()
            .map(move |record| record.get(header).and_then(Value::as_scalar))
    }
}

/// Cell text for text-grid output: absent cells and nulls are empty.
pub fn cell_text(cell: Option<&Scalar>) -> String {
    cell.map(Scalar::to_string).unwrap_or_default()
}

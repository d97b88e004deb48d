// src/table/sqlite.rs
//! SQLite codec.

use std::path::Path;

use log::debug;
use rusqlite::types::Value as SqlValue;
use rusqlite::Connection;

use crate::constants::DEFAULT_TABLE_NAME;
use crate::error::{ExportError, Result};
use crate::format::Format;
use crate::model::{Scalar, Value};

use super::RecordTable;

/// Knobs for the SQLite codec.
#[derive(Debug, Clone)]
pub struct SqliteOptions {
    /// Name of the table the records land in.
    pub table_name: String,
}

impl Default for SqliteOptions {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
        }
    }
}

impl SqliteOptions {
    pub fn with_table_name(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }
}

/// Write a record set into a SQLite database file, replacing the target
/// table if it already exists.
///
/// Column types are inferred from the cells: a column of integers and
/// booleans is INTEGER, a column mixing in floats is REAL, anything else
/// is TEXT (nulls do not vote; an all-null column is TEXT). Booleans are
/// stored as 0/1 and missing cells as NULL. The drop, create, and inserts
/// run in one transaction. An empty record set leaves a valid database
/// file with no table in it.
pub fn write_sqlite(records: &[Value], path: &Path, options: &SqliteOptions) -> Result<()> {
    let table = RecordTable::project(records, None);
    debug!(
        "Writing {} records into table {} of {}",
        table.record_count(),
        options.table_name,
        path.display()
    );
    let mut conn = Connection::open(path)
        .map_err(|e| ExportError::codec_failure(Format::Sqlite, path, e))?;

    replace_table(&mut conn, &table, &options.table_name)
        .map_err(|e| ExportError::codec_failure(Format::Sqlite, path, e))?;

    conn.close()
        .map_err(|(_, e)| ExportError::codec_failure(Format::Sqlite, path, e))?;
    Ok(())
}

fn replace_table(
    conn: &mut Connection,
    table: &RecordTable<'_>,
    table_name: &str,
) -> Result<(), rusqlite::Error> {
    // No columns means no CREATE TABLE to run; the file alone is the artifact.
    if table.headers().is_empty() {
        return Ok(());
    }

    let quoted_table = quote_identifier(table_name);
    let columns: Vec<String> = table
        .headers()
        .iter()
        .map(|header| {
            format!(
                "{} {}",
                quote_identifier(header),
                column_affinity(table.column(header))
            )
        })
        .collect();

    let tx = conn.transaction()?;
    tx.execute_batch(&format!(
        "DROP TABLE IF EXISTS {quoted_table};\n\
         CREATE TABLE {quoted_table} ({});",
        columns.join(", ")
    ))?;

    {
        let placeholders: Vec<&str> = table.headers().iter().map(|_| "?").collect();
        let mut insert = tx.prepare(&format!(
            "INSERT INTO {quoted_table} VALUES ({})",
            placeholders.join(", ")
        ))?;
        for row in table.rows() {
            insert.execute(rusqlite::params_from_iter(
                row.into_iter().map(sql_value),
            ))?;
        }
    }

    tx.commit()
}

/// SQL type for a column, decided by its cells.
fn column_affinity<'a>(cells: impl Iterator<Item = Option<&'a Scalar>>) -> &'static str {
    let mut saw_integer = false;
    let mut saw_float = false;
    for cell in cells {
        match cell {
            None | Some(Scalar::Null) => {}
            Some(Scalar::Bool(_)) | Some(Scalar::Int(_)) => saw_integer = true,
            Some(Scalar::Float(_)) => saw_float = true,
            Some(Scalar::Text(_)) => return "TEXT",
        }
    }
    if saw_float {
        "REAL"
    } else if saw_integer {
        "INTEGER"
    } else {
        "TEXT"
    }
}

fn sql_value(cell: Option<&Scalar>) -> SqlValue {
    match cell {
        None | Some(Scalar::Null) => SqlValue::Null,
        Some(Scalar::Bool(b)) => SqlValue::Integer(i64::from(*b)),
        Some(Scalar::Int(n)) => SqlValue::Integer(*n),
        Some(Scalar::Float(x)) => SqlValue::Real(*x),
        Some(Scalar::Text(t)) => SqlValue::Text(t.clone()),
    }
}

/// Double-quote an identifier, doubling any embedded quotes.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

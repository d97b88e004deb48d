// src/table/excel.rs
//! Excel codec.

use std::path::Path;

use rust_xlsxwriter::{Color, Format as CellFormat, FormatBorder, Workbook, XlsxError};

use crate::constants::{DEFAULT_SHEET_NAME, EXCEL_COLUMN_PADDING};
use crate::error::{ExportError, Result};
use crate::format::Format;
use crate::model::{Scalar, Value};

use super::{cell_text, RecordTable};

/// Header row fill, a light blue.
const HEADER_FILL: u32 = 0xD9E1F2;

/// Knobs for the Excel codec.
#[derive(Debug, Clone)]
pub struct ExcelOptions {
    /// Worksheet name.
    pub sheet_name: String,
}

impl Default for ExcelOptions {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

impl ExcelOptions {
    pub fn with_sheet_name(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }
}

/// Write a record set as a single-worksheet Excel workbook.
///
/// The header row is bold, filled, and bordered; numbers and booleans are
/// written as typed cells and nulls stay blank. Each column is widened to
/// its longest text plus a fixed margin so the sheet opens readable. An
/// empty record set saves a workbook with one empty worksheet.
pub fn write_excel(records: &[Value], path: &Path, options: &ExcelOptions) -> Result<()> {
    let table = RecordTable::project(records, None);
    build_workbook(&table, options)
        .and_then(|mut workbook| workbook.save(path))
        .map_err(|e| ExportError::codec_failure(Format::Excel, path, e))
}

fn build_workbook(table: &RecordTable<'_>, options: &ExcelOptions) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&options.sheet_name)?;

    let header_format = CellFormat::new()
        .set_bold()
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_border(FormatBorder::Thin);

    let mut widths: Vec<usize> = table
        .headers()
        .iter()
        .map(|header| header.chars().count())
        .collect();

    for (col, header) in table.headers().iter().enumerate() {
        worksheet.write_with_format(0, col as u16, header.as_str(), &header_format)?;
    }

    for (row, cells) in table.rows().enumerate() {
        let row = (row + 1) as u32;
        for (col, cell) in cells.into_iter().enumerate() {
            match cell {
                Some(Scalar::Bool(b)) => {
                    worksheet.write(row, col as u16, *b)?;
                }
                Some(Scalar::Int(n)) => {
                    worksheet.write(row, col as u16, *n)?;
                }
                Some(Scalar::Float(x)) => {
                    worksheet.write(row, col as u16, *x)?;
                }
                Some(Scalar::Text(t)) => {
                    worksheet.write(row, col as u16, t.as_str())?;
                }
                Some(Scalar::Null) | None => {}
            }
            let text_width = cell_text(cell).chars().count();
            if text_width > widths[col] {
                widths[col] = text_width;
            }
        }
    }

    for (col, width) in widths.iter().enumerate() {
        worksheet.set_column_width(col as u16, (width + EXCEL_COLUMN_PADDING) as f64)?;
    }

    Ok(workbook)
}

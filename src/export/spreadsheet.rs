//! Tabular export
//!
//! Rows are any `Serialize` struct; the serde field names become the
//! header row. Workbooks carry the declared sheet name as their single
//! worksheet; CSV files only carry it in the response headers.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ExportFile;
use crate::error::{AppError, AppResult};

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// File format of a spreadsheet export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SpreadsheetFormat {
    #[default]
    Xlsx,
    Csv,
}

impl SpreadsheetFormat {
    pub const ALL: [SpreadsheetFormat; 2] = [SpreadsheetFormat::Xlsx, SpreadsheetFormat::Csv];

    pub fn extension(&self) -> &'static str {
        match self {
            SpreadsheetFormat::Xlsx => "xlsx",
            SpreadsheetFormat::Csv => "csv",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            SpreadsheetFormat::Xlsx => XLSX_CONTENT_TYPE,
            SpreadsheetFormat::Csv => CSV_CONTENT_TYPE,
        }
    }
}

/// Lowercase `name` with whitespace runs replaced by `-`
pub fn slug(name: &str) -> String {
    WHITESPACE.replace_all(name.trim(), "-").to_lowercase()
}

/// `<slug>-<date>.<extension>`
pub fn dated_filename(name: &str, date: NaiveDate, format: SpreadsheetFormat) -> String {
    format!(
        "{}-{}.{}",
        slug(name),
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Serialize `rows` into a spreadsheet file
pub fn write_rows<T: Serialize>(
    rows: &[T],
    filename: String,
    sheet_name: &str,
    format: SpreadsheetFormat,
) -> AppResult<ExportFile> {
    let table = to_csv(rows)?;
    let bytes = match format {
        SpreadsheetFormat::Csv => table,
        SpreadsheetFormat::Xlsx => to_workbook(&table, sheet_name)?,
    };

    tracing::debug!("Exported {} rows to {} ({} bytes)", rows.len(), filename, bytes.len());
    Ok(ExportFile {
        filename,
        sheet_name: Some(sheet_name.to_string()),
        content_type: format.content_type(),
        bytes,
    })
}

fn to_csv<T: Serialize>(rows: &[T]) -> AppResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))
}

/// Single-sheet workbook; the first CSV record becomes a bold header row
fn to_workbook(table: &[u8], sheet_name: &str) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(table);
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let row = u32::try_from(row)
            .map_err(|_| AppError::Export(format!("Sheet {} has too many rows", sheet_name)))?;
        for (col, value) in record.iter().enumerate() {
            let col = u16::try_from(col).map_err(|_| {
                AppError::Export(format!("Sheet {} has too many columns", sheet_name))
            })?;
            if row == 0 {
                worksheet.write_string_with_format(row, col, value, &header)?;
            } else {
                worksheet.write_string(row, col, value)?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

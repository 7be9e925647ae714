//! Report export
//!
//! Renders finished reports and tabular datasets to downloadable files.
//! Nothing here influences domain state.

pub mod report;
pub mod spreadsheet;

use axum::{
    http::{header, HeaderName, HeaderValue},
    response::{IntoResponse, Response},
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use utoipa::IntoParams;

pub use report::InspectionReport;
pub use spreadsheet::SpreadsheetFormat;

/// A rendered file ready to be sent to the client
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    /// Declared sheet name for spreadsheet exports
    pub sheet_name: Option<String>,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Format selection for spreadsheet downloads
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ExportQuery {
    /// `xlsx` or `csv`; the configured default when omitted
    pub format: Option<SpreadsheetFormat>,
}

const SHEET_NAME_HEADER: &str = "x-sheet-name";

static UNSAFE_FILENAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("valid regex"));

/// `name` reduced to characters that need no quoting in a header value
pub fn safe_filename(name: &str) -> String {
    let cleaned = UNSAFE_FILENAME.replace_all(name.trim(), "_");
    if cleaned.trim_matches(|c| c == '_' || c == '.').is_empty() {
        "export".to_string()
    } else {
        cleaned.into_owned()
    }
}

impl IntoResponse for ExportFile {
    fn into_response(self) -> Response {
        let filename = safe_filename(&self.filename);
        if filename != self.filename {
            tracing::debug!("Sanitized export filename {:?} to {}", self.filename, filename);
        }
        let disposition = format!("attachment; filename=\"{}\"", filename);
        let mut response = (
            [(header::CONTENT_TYPE, self.content_type)],
            self.bytes,
        )
            .into_response();

        let headers = response.headers_mut();
        match HeaderValue::from_str(&disposition) {
            Ok(value) => {
                headers.insert(header::CONTENT_DISPOSITION, value);
            }
            Err(e) => tracing::warn!("Dropped Content-Disposition for {}: {}", filename, e),
        }
        if let Some(sheet) = self.sheet_name {
            match HeaderValue::from_str(&sheet) {
                Ok(value) => {
                    headers.insert(HeaderName::from_static(SHEET_NAME_HEADER), value);
                }
                Err(e) => tracing::warn!("Dropped {} header {:?}: {}", SHEET_NAME_HEADER, sheet, e),
            }
        }
        response
    }
}

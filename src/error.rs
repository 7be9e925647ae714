//! Error types for Firesafe server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes returned in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    NoSuchEquipment = 2,
    NoSuchInspection = 3,
    NoSuchData = 4,
    MissingRequiredFields = 5,
    BadValue = 6,
    Duplicate = 7,
    DeviceUnavailable = 8,
    ExportFailure = 9,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Equipment not found: {0}")]
    EquipmentNotFound(String),

    #[error("Inspection not found: {0}")]
    InspectionNotFound(String),

    /// Missing required fields or malformed input; `missing` lists the offending keys
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        missing: Vec<String>,
    },

    /// Camera permission denied or unavailable
    #[error("Device error: {0}")]
    Device(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Validation failure without field-level detail
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
            missing: Vec::new(),
        }
    }

    /// Application error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::EquipmentNotFound(_) => ErrorCode::NoSuchEquipment,
            AppError::InspectionNotFound(_) => ErrorCode::NoSuchInspection,
            AppError::NotFound(_) => ErrorCode::NoSuchData,
            AppError::Validation { missing, .. } if !missing.is_empty() => {
                ErrorCode::MissingRequiredFields
            }
            AppError::Validation { .. } | AppError::BadRequest(_) => ErrorCode::BadValue,
            AppError::Device(_) => ErrorCode::DeviceUnavailable,
            AppError::Conflict(_) => ErrorCode::Duplicate,
            AppError::Export(_) => ErrorCode::ExportFailure,
            AppError::Internal(_) => ErrorCode::Failure,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut missing: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        missing.sort();
        AppError::Validation {
            message: "Please complete all required fields".to_string(),
            missing,
        }
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Export(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
    /// Keys of required fields that were not provided
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let (status, message, missing) = match self {
            AppError::NotFound(msg)
            | AppError::EquipmentNotFound(msg)
            | AppError::InspectionNotFound(msg) => (StatusCode::NOT_FOUND, msg, Vec::new()),
            AppError::Validation { message, missing } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message, missing)
            }
            AppError::Device(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg, Vec::new()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg, Vec::new()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, Vec::new()),
            AppError::Export(msg) => {
                tracing::error!("Export error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Export failed".to_string(),
                    Vec::new(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Vec::new(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
            missing,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_code_follows_variant_not_message() {
        let equipment = AppError::EquipmentNotFound("Inspection-looking text".to_string());
        assert_eq!(equipment.code(), ErrorCode::NoSuchEquipment);

        let inspection = AppError::InspectionNotFound("Equipment-looking text".to_string());
        assert_eq!(inspection.code(), ErrorCode::NoSuchInspection);

        let other = AppError::NotFound("Equipment type sprinkler not found".to_string());
        assert_eq!(other.code(), ErrorCode::NoSuchData);
    }

    #[test]
    fn test_not_found_variants_share_status() {
        for err in [
            AppError::NotFound("report".to_string()),
            AppError::EquipmentNotFound("eq-404".to_string()),
            AppError::InspectionNotFound("insp-404".to_string()),
        ] {
            assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
        }
    }
}

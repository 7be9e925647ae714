//! Barcode scanning
//!
//! The camera and the barcode decoder are external collaborators behind
//! traits. [`CameraHandle`] owns an open video stream and stops it exactly
//! once; [`ScanSession`] drives frames through the decoder until a code is
//! read or the scan is cancelled.

pub mod camera;
pub mod session;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;

pub use camera::CameraHandle;
pub use session::{ScanOutcome, ScanSession};

/// One captured video frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// A camera that can be opened for streaming
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CameraDevice: Send + Sync {
    /// Acquire the camera; fails with `AppError::Device` when it is
    /// unavailable or access is denied
    async fn open(&self) -> AppResult<Box<dyn VideoStream>>;
}

/// An open video stream
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoStream: Send + Sync {
    async fn next_frame(&mut self) -> AppResult<Frame>;

    /// Release the underlying device
    fn stop(&mut self);
}

/// Frame decoder; `Ok(None)` means no code in the frame
#[cfg_attr(test, mockall::automock)]
pub trait BarcodeDecoder: Send + Sync {
    fn decode(&self, frame: &Frame) -> anyhow::Result<Option<String>>;
}

/// What the scanned equipment is looked up for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScanPurpose {
    #[default]
    Equipment,
    Inspection,
}

impl ScanPurpose {
    /// Client route to continue with once the equipment is known
    pub fn route(&self, equipment_id: &str) -> String {
        match self {
            ScanPurpose::Equipment => format!("/equipment/{}", equipment_id),
            ScanPurpose::Inspection => format!("/inspection/checklist/{}", equipment_id),
        }
    }
}

/// Scanned code submitted for resolution
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScanRequest {
    pub code: String,
    #[serde(default)]
    pub purpose: ScanPurpose,
}

/// Equipment matched by a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ScanResolution {
    pub equipment_id: String,
    pub barcode: String,
    pub route: String,
}

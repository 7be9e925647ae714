//! Scan loop

use std::sync::Arc;

use tokio::sync::oneshot;

use super::{BarcodeDecoder, CameraDevice, CameraHandle};
use crate::error::AppResult;

/// How a scan session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Detected(String),
    Cancelled,
}

/// One acquire/decode/release cycle against a camera
pub struct ScanSession {
    camera: Arc<dyn CameraDevice>,
    decoder: Arc<dyn BarcodeDecoder>,
}

impl ScanSession {
    pub fn new(camera: Arc<dyn CameraDevice>, decoder: Arc<dyn BarcodeDecoder>) -> Self {
        Self { camera, decoder }
    }

    /// Decode frames until a code is read or `cancel` fires. A dropped
    /// sender counts as cancellation. The camera is released before this
    /// returns, whatever the outcome.
    pub async fn run(&self, cancel: oneshot::Receiver<()>) -> AppResult<ScanOutcome> {
        let mut handle = CameraHandle::acquire(self.camera.as_ref()).await?;

        let outcome = tokio::select! {
            biased;
            _ = cancel => {
                tracing::debug!("Scan cancelled");
                Ok(ScanOutcome::Cancelled)
            }
            result = decode_until_found(&mut handle, self.decoder.as_ref()) => {
                result.map(ScanOutcome::Detected)
            }
        };

        handle.release();
        outcome
    }
}

async fn decode_until_found(
    handle: &mut CameraHandle,
    decoder: &dyn BarcodeDecoder,
) -> AppResult<String> {
    loop {
        let frame = handle.next_frame().await?;
        match decoder.decode(&frame) {
            Ok(Some(code)) => {
                tracing::info!("Barcode detected: {}", code);
                return Ok(code);
            }
            Ok(None) => {}
            Err(e) => tracing::debug!("Frame decode failed: {}", e),
        }
        tokio::task::yield_now().await;
    }
}

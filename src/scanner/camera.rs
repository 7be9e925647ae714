//! Camera ownership

use super::{CameraDevice, Frame, VideoStream};
use crate::error::{AppError, AppResult};

/// Owns an open video stream. The stream is stopped on [`release`] or on
/// drop, whichever comes first, and never twice.
///
/// [`release`]: CameraHandle::release
pub struct CameraHandle {
    stream: Option<Box<dyn VideoStream>>,
}

impl CameraHandle {
    pub async fn acquire(camera: &dyn CameraDevice) -> AppResult<Self> {
        let stream = camera.open().await.map_err(|e| {
            tracing::warn!("Camera unavailable: {}", e);
            e
        })?;
        tracing::debug!("Camera acquired");
        Ok(Self {
            stream: Some(stream),
        })
    }

    pub fn is_active(&self) -> bool {
        self.stream.is_some()
    }

    pub async fn next_frame(&mut self) -> AppResult<Frame> {
        match self.stream.as_mut() {
            Some(stream) => stream.next_frame().await,
            None => Err(AppError::Device("Camera already released".to_string())),
        }
    }

    pub fn release(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
            tracing::debug!("Camera released");
        }
    }
}

impl Drop for CameraHandle {
    fn drop(&mut self) {
        self.release();
    }
}

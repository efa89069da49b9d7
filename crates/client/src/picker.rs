//! Image acquisition seam.
//!
//! On a device this is the camera or photo-library picker with its
//! permission prompt; here it is a trait so the rest of the flow can be
//! driven by file-based and test implementations.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::CaptureError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Result of presenting the picker UI. Cancellation is a normal outcome,
/// not an error.
pub enum PickOutcome {
    Picked(Vec<u8>),
    Cancelled,
}

/// One image source (camera or gallery). Permission is checked before the
/// picker is shown; a denied permission means `pick` is never called.
#[async_trait]
pub trait ImagePicker: Send + Sync {
    async fn request_permission(&self) -> PermissionStatus;

    async fn pick(&self) -> Result<PickOutcome, CaptureError>;
}

/// Picker backed by a file on disk -- the "gallery" of the demo binary.
pub struct FilePicker {
    path: PathBuf,
}

impl FilePicker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ImagePicker for FilePicker {
    async fn request_permission(&self) -> PermissionStatus {
        // Local file access needs no runtime permission.
        PermissionStatus::Granted
    }

    async fn pick(&self) -> Result<PickOutcome, CaptureError> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(PickOutcome::Picked(bytes))
    }
}

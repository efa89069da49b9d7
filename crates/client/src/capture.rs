//! The capture-and-encode flow with its single-slot concurrency guard.
//!
//! Exactly one flow may be in flight per controller (one per screen
//! instance). A second tap while a flow is running is dropped, not
//! queued. The guard is an optional handle to the active task rather
//! than a bare flag, so a stale flow can be aborted when the screen
//! regains focus or is navigated away from.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::encode;
use crate::picker::{ImagePicker, PermissionStatus, PickOutcome};

/// The one-shot value handed to the analysis screen on success.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    /// Base64 JPEG payload, already downscaled and recompressed.
    pub base64: String,
}

/// Terminal outcome of one capture flow.
#[derive(Debug)]
pub enum CaptureEvent {
    /// Image acquired and encoded; ready to hand off.
    Captured(CapturedImage),
    /// The user dismissed the picker. Silent: no message, no navigation.
    Cancelled,
    /// Permission was denied; the picker was never shown.
    PermissionDenied(String),
    /// Read or encode failure with a user-facing message.
    Failed(String),
}

/// Per-screen capture controller holding the in-flight slot.
#[derive(Default)]
pub struct CaptureController {
    in_flight: Option<JoinHandle<CaptureEvent>>,
}

impl CaptureController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a "Take Photo" / "Choose from Gallery" tap.
    ///
    /// Returns `false` (a no-op) if a flow is already in flight.
    pub fn tap(&mut self, picker: Arc<dyn ImagePicker>) -> bool {
        if self.is_processing() {
            tracing::debug!("Capture already in flight, ignoring tap");
            return false;
        }
        self.in_flight = Some(tokio::spawn(run_flow(picker)));
        true
    }

    /// Whether a capture flow is currently running.
    pub fn is_processing(&self) -> bool {
        matches!(&self.in_flight, Some(handle) if !handle.is_finished())
    }

    /// Await the active flow and clear the slot. Returns `None` when no
    /// flow was in flight.
    pub async fn finish(&mut self) -> Option<CaptureEvent> {
        let handle = self.in_flight.take()?;
        let event = handle
            .await
            .unwrap_or_else(|_| CaptureEvent::Failed("capture task aborted".into()));
        Some(event)
    }

    /// Reset the slot when the screen regains focus, aborting any flow a
    /// background/OS-level interruption left behind.
    pub fn reset_on_focus(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

async fn run_flow(picker: Arc<dyn ImagePicker>) -> CaptureEvent {
    if picker.request_permission().await == PermissionStatus::Denied {
        tracing::info!("Capture permission denied");
        return CaptureEvent::PermissionDenied(
            "Camera or photo access is required to analyze a room".into(),
        );
    }

    let outcome = match picker.pick().await {
        Ok(outcome) => outcome,
        Err(e) => return CaptureEvent::Failed(e.to_string()),
    };

    let bytes = match outcome {
        PickOutcome::Picked(bytes) => bytes,
        PickOutcome::Cancelled => {
            tracing::info!("Capture cancelled by user");
            return CaptureEvent::Cancelled;
        }
    };

    match encode::prepare_image(&bytes) {
        Ok(base64) => {
            tracing::info!(payload_len = base64.len(), "Image encoded for upload");
            CaptureEvent::Captured(CapturedImage { base64 })
        }
        Err(e) => CaptureEvent::Failed(e.to_string()),
    }
}

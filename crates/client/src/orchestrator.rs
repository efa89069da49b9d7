//! The analysis screen's state machine.
//!
//! `Idle -> Loading -> {Result | Error}`, with `Error -> Loading` only via
//! an explicit retry. The network call's own completion is the only
//! transition out of `Loading`; there is no automatic retry and no
//! timeout-driven transition here. The in-flight request is held as an
//! optional task handle so navigating away can abort it.

use std::sync::Arc;

use tokio::task::JoinHandle;

use roomlens_core::analysis::AnalyzeRoomResponse;

use crate::api::AnalyzeApi;
use crate::error::ClientError;

/// Mutually exclusive rendering states.
#[derive(Debug)]
pub enum AnalysisState {
    Idle,
    Loading,
    Result(AnalyzeRoomResponse),
    Error(String),
}

/// Drives one request/response cycle against the analysis endpoint.
pub struct Orchestrator {
    api: Arc<dyn AnalyzeApi>,
    state: AnalysisState,
    in_flight: Option<JoinHandle<Result<AnalyzeRoomResponse, ClientError>>>,
}

impl Orchestrator {
    pub fn new(api: Arc<dyn AnalyzeApi>) -> Self {
        Self {
            api,
            state: AnalysisState::Idle,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    /// Enter `Loading` and issue exactly one request.
    ///
    /// Only valid from `Idle`: a no-op (returns `false`) while a request
    /// is in flight, after a result has been rendered, and from `Error`
    /// (which requires an explicit [`retry`](Self::retry)).
    pub fn submit(&mut self, image_base64: String) -> bool {
        if self.in_flight.is_some() || !matches!(self.state, AnalysisState::Idle) {
            return false;
        }

        tracing::info!(payload_len = image_base64.len(), "Submitting analysis request");
        self.state = AnalysisState::Loading;
        let api = Arc::clone(&self.api);
        self.in_flight = Some(tokio::spawn(async move { api.analyze(image_base64).await }));
        true
    }

    /// Await the in-flight request and settle into `Result` or `Error`.
    pub async fn resolve(&mut self) -> &AnalysisState {
        if let Some(handle) = self.in_flight.take() {
            self.state = match handle.await {
                Ok(Ok(response)) => AnalysisState::Result(response),
                Ok(Err(e)) => {
                    tracing::warn!(error = %e, "Analysis request failed");
                    AnalysisState::Error(e.to_string())
                }
                Err(_) => AnalysisState::Error("analysis request aborted".into()),
            };
        }
        &self.state
    }

    /// User-triggered retry: only reachable from `Error`, re-issues the
    /// entire request (new model call, new record server-side).
    pub fn retry(&mut self, image_base64: String) -> bool {
        if !matches!(self.state, AnalysisState::Error(_)) {
            return false;
        }
        self.state = AnalysisState::Idle;
        self.submit(image_base64)
    }

    /// Cancellation-on-navigation: abort any in-flight request and return
    /// to `Idle`.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.state = AnalysisState::Idle;
    }
}

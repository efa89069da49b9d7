/// Errors from the capture-and-encode pipeline.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// Reading the underlying image resource failed.
    #[error("Failed to read image: {0}")]
    Read(#[from] std::io::Error),

    /// Decode, downscale, or re-encode failed.
    #[error("Failed to process image: {0}")]
    Processing(String),
}

/// Errors from the analysis HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced an HTTP response.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with an error; the message is either the
    /// server's own `error` field or a generic one carrying the status.
    #[error("{0}")]
    Api(String),

    /// A success response that does not match the typed contract.
    #[error("Unexpected response shape: {0}")]
    Decode(String),
}

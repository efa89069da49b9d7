//! Provider seam for structured scenario generation.
//!
//! The HTTP handler depends on this trait rather than on a concrete
//! provider so integration tests can inject a mock. The production
//! implementation lives in `roomlens-gemini`.

use async_trait::async_trait;

use crate::analysis::RoomAnalysis;
use crate::room::RoomType;

/// Errors surfaced by a scenario generator, independent of the provider.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The provider call itself failed (transport, timeout, non-2xx).
    #[error("Scenario generation failed: {0}")]
    Request(String),

    /// The provider answered but its output could not be decoded into a
    /// [`RoomAnalysis`].
    #[error("Scenario generation returned an unusable result: {0}")]
    Decode(String),
}

/// One structured-generation call: a room photo plus its (effective) room
/// type in, a full [`RoomAnalysis`] out. Implementations do not retry.
#[async_trait]
pub trait ScenarioGenerator: Send + Sync {
    async fn generate(
        &self,
        image_base64: &str,
        room_type: RoomType,
    ) -> Result<RoomAnalysis, GeneratorError>;
}

//! HTTP client for the analysis endpoint.

use async_trait::async_trait;
use serde::Deserialize;

use roomlens_core::analysis::AnalyzeRoomResponse;

use crate::error::ClientError;

/// Error body shape produced by the backend.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Seam used by the orchestrator so tests can stub the network.
#[async_trait]
pub trait AnalyzeApi: Send + Sync {
    async fn analyze(&self, image_base64: String) -> Result<AnalyzeRoomResponse, ClientError>;
}

/// Client for one backend instance.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` without a trailing slash, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Issue exactly one `POST /api/analyze-room` with the encoded image.
    ///
    /// The default flow sends no manual room-type override. The response
    /// is decoded strictly into the typed contract (closed enums); a
    /// malformed success body is an error, not something to render.
    pub async fn analyze_room(
        &self,
        image_base64: &str,
    ) -> Result<AnalyzeRoomResponse, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/analyze-room", self.base_url))
            .json(&serde_json::json!({ "imageBase64": image_base64 }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Api(error_message(status.as_u16(), &body)));
        }

        serde_json::from_str::<AnalyzeRoomResponse>(&body)
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl AnalyzeApi for ApiClient {
    async fn analyze(&self, image_base64: String) -> Result<AnalyzeRoomResponse, ClientError> {
        self.analyze_room(&image_base64).await
    }
}

/// Best-effort extraction of the server's error message. Falls back to a
/// generic message that always carries the numeric status code.
pub fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => format!("Request failed with status {status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use roomlens_core::room::{RoomType, ScenarioTier};

    #[test]
    fn parseable_error_body_is_shown_verbatim() {
        let msg = error_message(400, r#"{"error":"imageBase64 is required"}"#);
        assert_eq!(msg, "imageBase64 is required");
    }

    #[test]
    fn unparsable_error_body_falls_back_to_the_status_code() {
        for body in ["", "<html>502 Bad Gateway</html>", "{\"detail\":\"nope\"}"] {
            let msg = error_message(502, body);
            assert!(msg.contains("502"), "message {msg:?} must carry the code");
        }
    }

    #[test]
    fn success_body_decodes_into_typed_contract() {
        let body = r#"{
            "roomType": "bedroom",
            "scenarios": [
                {
                    "name": "Budget Refresh",
                    "totalCostMin": 800, "totalCostMax": 2500,
                    "materialsCost": 900, "laborCost": 700,
                    "timeEstimate": "3-5 days",
                    "permitLikelihood": "Low",
                    "valueImpact": 2,
                    "roiRating": "High",
                    "description": "Paint, lighting, hardware."
                },
                {
                    "name": "Mid-Range Remodel",
                    "totalCostMin": 6000, "totalCostMax": 14000,
                    "materialsCost": 5000, "laborCost": 4500,
                    "timeEstimate": "2-3 weeks",
                    "permitLikelihood": "Low",
                    "valueImpact": 5,
                    "roiRating": "Medium",
                    "description": "Flooring and built-ins."
                },
                {
                    "name": "Premium Upgrade",
                    "totalCostMin": 20000, "totalCostMax": 40000,
                    "materialsCost": 16000, "laborCost": 12000,
                    "timeEstimate": "5-8 weeks",
                    "permitLikelihood": "Medium",
                    "valueImpact": 9,
                    "roiRating": "Medium",
                    "description": "Full suite remodel."
                }
            ],
            "disclaimer": "Estimates are averages and not contractor quotes."
        }"#;

        let decoded: AnalyzeRoomResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.room_type, RoomType::Bedroom);
        assert_eq!(decoded.scenarios[0].name, ScenarioTier::BudgetRefresh);
    }

    #[test]
    fn out_of_enum_room_type_fails_the_decode() {
        let body = r#"{ "roomType": "garage", "scenarios": [], "disclaimer": "" }"#;
        assert!(serde_json::from_str::<AnalyzeRoomResponse>(body).is_err());
    }
}

//! Wire shapes and normalization for the room-analysis contract.
//!
//! The request is deserialized leniently (`Option` fields) so the endpoint
//! can answer malformed input with a descriptive 400 body instead of a
//! framework rejection. The response side is strict: scenario names,
//! ratings, and the room type are closed enums, and the provider output is
//! normalized into the fixed tier order before it reaches any caller.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::room::{Rating, RoomType, ScenarioTier};

/// Disclaimer appended to every successful analysis.
pub const DISCLAIMER: &str = "Estimates are averages and not contractor quotes.";

/// One renovation tier with its cost breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenovationScenario {
    pub name: ScenarioTier,
    pub total_cost_min: f64,
    pub total_cost_max: f64,
    pub materials_cost: f64,
    pub labor_cost: f64,
    pub time_estimate: String,
    pub permit_likelihood: Rating,
    /// Expected value impact as a percentage (5 means 5%).
    pub value_impact: f64,
    pub roi_rating: Rating,
    pub description: String,
}

/// Structured output produced by the generative model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAnalysis {
    pub room_type: RoomType,
    pub scenarios: Vec<RenovationScenario>,
}

/// Inbound request body for `POST /api/analyze-room`.
///
/// Both fields are optional at the serde level so that missing or
/// out-of-enum values surface as [`CoreError::Validation`] with a message
/// naming the offending field, via [`validate_request`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRoomRequest {
    pub image_base64: Option<String>,
    pub manual_room_type: Option<String>,
}

/// A request that passed validation.
#[derive(Debug, Clone)]
pub struct ValidRequest {
    pub image_base64: String,
    pub manual_room_type: Option<RoomType>,
}

/// Outbound response body for `POST /api/analyze-room`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRoomResponse {
    pub room_type: RoomType,
    pub scenarios: Vec<RenovationScenario>,
    pub disclaimer: String,
}

/// Validate the raw request body before any model call is made.
///
/// Rejects a missing or empty `imageBase64` and a `manualRoomType` outside
/// the four allowed values.
pub fn validate_request(req: &AnalyzeRoomRequest) -> Result<ValidRequest, CoreError> {
    let image_base64 = match &req.image_base64 {
        Some(s) if !s.trim().is_empty() => s.clone(),
        _ => {
            return Err(CoreError::Validation(
                "imageBase64 is required and must be a non-empty string".into(),
            ))
        }
    };

    let manual_room_type = match &req.manual_room_type {
        None => None,
        Some(raw) => Some(raw.parse::<RoomType>().map_err(|()| {
            let allowed: Vec<&str> = RoomType::ALL.iter().map(|r| r.as_str()).collect();
            CoreError::Validation(format!(
                "manualRoomType must be one of: {}",
                allowed.join(", ")
            ))
        })?),
    };

    Ok(ValidRequest {
        image_base64,
        manual_room_type,
    })
}

/// Normalize model output into the fixed tier order.
///
/// Requires exactly one scenario per tier and sane cost bounds
/// (`0 <= totalCostMin <= totalCostMax`, non-negative materials/labor).
/// Returns the scenarios reordered Budget -> Mid-Range -> Premium.
pub fn normalize_scenarios(
    mut scenarios: Vec<RenovationScenario>,
) -> Result<Vec<RenovationScenario>, CoreError> {
    if scenarios.len() != 3 {
        return Err(CoreError::Validation(format!(
            "expected exactly 3 scenarios, got {}",
            scenarios.len()
        )));
    }

    let mut ordered = Vec::with_capacity(3);
    for tier in ScenarioTier::ALL {
        let idx = scenarios
            .iter()
            .position(|s| s.name == tier)
            .ok_or_else(|| {
                CoreError::Validation(format!("missing \"{tier}\" scenario"))
            })?;
        ordered.push(scenarios.swap_remove(idx));
    }

    for scenario in &ordered {
        if scenario.total_cost_min < 0.0
            || scenario.materials_cost < 0.0
            || scenario.labor_cost < 0.0
        {
            return Err(CoreError::Validation(format!(
                "\"{}\" has a negative cost figure",
                scenario.name
            )));
        }
        if scenario.total_cost_min > scenario.total_cost_max {
            return Err(CoreError::Validation(format!(
                "\"{}\" has totalCostMin greater than totalCostMax",
                scenario.name
            )));
        }
    }

    Ok(ordered)
}

/// Instruction text sent to the model alongside the room photo.
pub fn analysis_prompt(room_type: RoomType) -> String {
    format!(
        "This is a {room_type}. Generate exactly 3 renovation scenarios with realistic US cost estimates:\n\
         1. Budget Refresh - Basic updates, minimal costs\n\
         2. Mid-Range Remodel - Moderate upgrades, balanced quality\n\
         3. Premium Upgrade - High-end finishes, maximum value\n\
         \n\
         For each scenario provide:\n\
         - name (exact match: \"Budget Refresh\", \"Mid-Range Remodel\", \"Premium Upgrade\")\n\
         - totalCostMin and totalCostMax (USD, realistic ranges)\n\
         - materialsCost and laborCost (USD)\n\
         - timeEstimate (days or weeks format)\n\
         - permitLikelihood (Low/Medium/High)\n\
         - valueImpact (percentage as number, e.g. 5 for 5%)\n\
         - roiRating (Low/Medium/High)\n\
         - description (brief description)\n\
         \n\
         Return as JSON with roomType and scenarios array."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(tier: ScenarioTier) -> RenovationScenario {
        RenovationScenario {
            name: tier,
            total_cost_min: 1_000.0,
            total_cost_max: 5_000.0,
            materials_cost: 2_000.0,
            labor_cost: 1_500.0,
            time_estimate: "1-2 weeks".into(),
            permit_likelihood: Rating::Low,
            value_impact: 5.0,
            roi_rating: Rating::Medium,
            description: "test".into(),
        }
    }

    #[test]
    fn validate_accepts_image_without_override() {
        let req = AnalyzeRoomRequest {
            image_base64: Some("aGVsbG8=".into()),
            manual_room_type: None,
        };
        let valid = validate_request(&req).unwrap();
        assert_eq!(valid.image_base64, "aGVsbG8=");
        assert!(valid.manual_room_type.is_none());
    }

    #[test]
    fn validate_rejects_missing_image() {
        let err = validate_request(&AnalyzeRoomRequest::default()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg.contains("imageBase64")));
    }

    #[test]
    fn validate_rejects_empty_image() {
        let req = AnalyzeRoomRequest {
            image_base64: Some("   ".into()),
            manual_room_type: None,
        };
        assert!(validate_request(&req).is_err());
    }

    #[test]
    fn validate_rejects_unknown_room_type() {
        let req = AnalyzeRoomRequest {
            image_base64: Some("aGVsbG8=".into()),
            manual_room_type: Some("garage".into()),
        };
        let err = validate_request(&req).unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg.contains("manualRoomType")));
    }

    #[test]
    fn validate_accepts_every_room_type() {
        for room in RoomType::ALL {
            let req = AnalyzeRoomRequest {
                image_base64: Some("aGVsbG8=".into()),
                manual_room_type: Some(room.as_str().into()),
            };
            let valid = validate_request(&req).unwrap();
            assert_eq!(valid.manual_room_type, Some(room));
        }
    }

    #[test]
    fn normalize_reorders_scenarios_into_tier_order() {
        let input = vec![
            scenario(ScenarioTier::PremiumUpgrade),
            scenario(ScenarioTier::BudgetRefresh),
            scenario(ScenarioTier::MidRangeRemodel),
        ];
        let ordered = normalize_scenarios(input).unwrap();
        let names: Vec<ScenarioTier> = ordered.iter().map(|s| s.name).collect();
        assert_eq!(names.as_slice(), ScenarioTier::ALL.as_slice());
    }

    #[test]
    fn normalize_rejects_wrong_count() {
        let input = vec![scenario(ScenarioTier::BudgetRefresh)];
        assert!(normalize_scenarios(input).is_err());
    }

    #[test]
    fn normalize_rejects_duplicate_tier() {
        let input = vec![
            scenario(ScenarioTier::BudgetRefresh),
            scenario(ScenarioTier::BudgetRefresh),
            scenario(ScenarioTier::PremiumUpgrade),
        ];
        assert!(normalize_scenarios(input).is_err());
    }

    #[test]
    fn normalize_rejects_inverted_cost_range() {
        let mut bad = scenario(ScenarioTier::MidRangeRemodel);
        bad.total_cost_min = 9_000.0;
        bad.total_cost_max = 4_000.0;
        let input = vec![
            scenario(ScenarioTier::BudgetRefresh),
            bad,
            scenario(ScenarioTier::PremiumUpgrade),
        ];
        let err = normalize_scenarios(input).unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg.contains("Mid-Range")));
    }

    #[test]
    fn normalize_rejects_negative_costs() {
        let mut bad = scenario(ScenarioTier::BudgetRefresh);
        bad.labor_cost = -1.0;
        let input = vec![
            bad,
            scenario(ScenarioTier::MidRangeRemodel),
            scenario(ScenarioTier::PremiumUpgrade),
        ];
        assert!(normalize_scenarios(input).is_err());
    }

    #[test]
    fn prompt_names_the_room_and_every_field() {
        let prompt = analysis_prompt(RoomType::Kitchen);
        assert!(prompt.contains("This is a kitchen."));
        for field in [
            "totalCostMin",
            "totalCostMax",
            "materialsCost",
            "laborCost",
            "timeEstimate",
            "permitLikelihood",
            "valueImpact",
            "roiRating",
        ] {
            assert!(prompt.contains(field), "prompt missing {field}");
        }
    }

    #[test]
    fn scenario_uses_camel_case_wire_names() {
        let json = serde_json::to_value(scenario(ScenarioTier::BudgetRefresh)).unwrap();
        assert_eq!(json["name"], "Budget Refresh");
        assert!(json.get("totalCostMin").is_some());
        assert!(json.get("permitLikelihood").is_some());
        assert!(json.get("roiRating").is_some());
        assert!(json.get("total_cost_min").is_none());
    }
}

//! Response schema handed to Gemini's structured-output mode.
//!
//! Uses the OpenAPI-subset vocabulary the `generateContent` API expects
//! (upper-case type names). Enum lists are built from the core enums so
//! the wire contract has a single source of truth.

use serde_json::{json, Value};

use roomlens_core::room::{Rating, RoomType, ScenarioTier};

/// Schema for the full analysis document: a detected room type plus
/// exactly three scenario objects.
pub fn room_analysis_schema() -> Value {
    let room_types: Vec<&str> = RoomType::ALL.iter().map(|r| r.as_str()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "roomType": {
                "type": "STRING",
                "enum": room_types,
            },
            "scenarios": {
                "type": "ARRAY",
                "minItems": 3,
                "maxItems": 3,
                "items": scenario_schema(),
            },
        },
        "required": ["roomType", "scenarios"],
    })
}

fn scenario_schema() -> Value {
    let tiers: Vec<&str> = ScenarioTier::ALL.iter().map(|t| t.as_str()).collect();
    let ratings: Vec<&str> = Rating::ALL.iter().map(|r| r.as_str()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING", "enum": tiers },
            "totalCostMin": { "type": "NUMBER" },
            "totalCostMax": { "type": "NUMBER" },
            "materialsCost": { "type": "NUMBER" },
            "laborCost": { "type": "NUMBER" },
            "timeEstimate": { "type": "STRING" },
            "permitLikelihood": { "type": "STRING", "enum": ratings.clone() },
            "valueImpact": { "type": "NUMBER" },
            "roiRating": { "type": "STRING", "enum": ratings },
            "description": { "type": "STRING" },
        },
        "required": [
            "name",
            "totalCostMin",
            "totalCostMax",
            "materialsCost",
            "laborCost",
            "timeEstimate",
            "permitLikelihood",
            "valueImpact",
            "roiRating",
            "description",
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_pins_scenario_count_to_three() {
        let schema = room_analysis_schema();
        assert_eq!(schema["properties"]["scenarios"]["minItems"], 3);
        assert_eq!(schema["properties"]["scenarios"]["maxItems"], 3);
    }

    #[test]
    fn schema_closes_the_enums() {
        let schema = room_analysis_schema();
        let room_enum = schema["properties"]["roomType"]["enum"].as_array().unwrap();
        assert_eq!(room_enum.len(), 4);
        assert!(room_enum.contains(&serde_json::json!("living room")));

        let items = &schema["properties"]["scenarios"]["items"];
        let names = items["properties"]["name"]["enum"].as_array().unwrap();
        assert_eq!(names[0], "Budget Refresh");
        assert_eq!(names[1], "Mid-Range Remodel");
        assert_eq!(names[2], "Premium Upgrade");

        for field in ["permitLikelihood", "roiRating"] {
            let ratings = items["properties"][field]["enum"].as_array().unwrap();
            assert_eq!(ratings.len(), 3);
        }
    }

    #[test]
    fn schema_requires_every_scenario_field() {
        let schema = room_analysis_schema();
        let required = schema["properties"]["scenarios"]["items"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required.len(), 10);
    }
}

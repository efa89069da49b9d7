//! Closed enums for room classification and scenario metadata.
//!
//! The wire protocol carries these as literal strings ("kitchen",
//! "Budget Refresh", "Low", ...). Modeling them as enums means a response
//! or provider payload with an out-of-range value fails at decode time
//! instead of leaking a free-form string into the rest of the system.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of room classifications accepted as a manual override and
/// produced by the model's own detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Kitchen,
    Bathroom,
    #[serde(rename = "living room")]
    LivingRoom,
    Bedroom,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Kitchen,
        RoomType::Bathroom,
        RoomType::LivingRoom,
        RoomType::Bedroom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Kitchen => "kitchen",
            RoomType::Bathroom => "bathroom",
            RoomType::LivingRoom => "living room",
            RoomType::Bedroom => "bedroom",
        }
    }
}

impl Default for RoomType {
    /// Fallback used when no manual override is supplied. Detection is
    /// delegated to the model; this value is only the demo default.
    fn default() -> Self {
        RoomType::LivingRoom
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomType::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or(())
    }
}

/// The three fixed renovation tiers, in their stable response order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioTier {
    #[serde(rename = "Budget Refresh")]
    BudgetRefresh,
    #[serde(rename = "Mid-Range Remodel")]
    MidRangeRemodel,
    #[serde(rename = "Premium Upgrade")]
    PremiumUpgrade,
}

impl ScenarioTier {
    /// Stable order: Budget -> Mid-Range -> Premium.
    pub const ALL: [ScenarioTier; 3] = [
        ScenarioTier::BudgetRefresh,
        ScenarioTier::MidRangeRemodel,
        ScenarioTier::PremiumUpgrade,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioTier::BudgetRefresh => "Budget Refresh",
            ScenarioTier::MidRangeRemodel => "Mid-Range Remodel",
            ScenarioTier::PremiumUpgrade => "Premium Upgrade",
        }
    }
}

impl fmt::Display for ScenarioTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-valued rating used for both permit likelihood and ROI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Low,
    Medium,
    High,
}

impl Rating {
    pub const ALL: [Rating; 3] = [Rating::Low, Rating::Medium, Rating::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Low => "Low",
            Rating::Medium => "Medium",
            Rating::High => "High",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Streak tiers: how many completed workouts a week needs to keep a streak.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named weekly workout threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreakType {
    #[serde(rename = "WEEKLY_3")]
    Weekly3,
    #[serde(rename = "WEEKLY_4")]
    Weekly4,
    #[serde(rename = "WEEKLY_5")]
    Weekly5,
    #[serde(rename = "WEEKLY_ANY")]
    WeeklyAny,
}

impl StreakType {
    /// Every tier, loosest first.
    pub const ALL: [StreakType; 4] = [
        StreakType::WeeklyAny,
        StreakType::Weekly3,
        StreakType::Weekly4,
        StreakType::Weekly5,
    ];

    /// Minimum completed workouts for a week to count toward this tier.
    pub const fn threshold(self) -> u32 {
        match self {
            StreakType::Weekly3 => 3,
            StreakType::Weekly4 => 4,
            StreakType::Weekly5 => 5,
            StreakType::WeeklyAny => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            StreakType::Weekly3 => "WEEKLY_3",
            StreakType::Weekly4 => "WEEKLY_4",
            StreakType::Weekly5 => "WEEKLY_5",
            StreakType::WeeklyAny => "WEEKLY_ANY",
        }
    }
}

impl fmt::Display for StreakType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known tier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown streak type: {0}")]
pub struct UnknownStreakType(pub String);

impl FromStr for StreakType {
    type Err = UnknownStreakType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StreakType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownStreakType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(StreakType::Weekly3.threshold(), 3);
        assert_eq!(StreakType::Weekly4.threshold(), 4);
        assert_eq!(StreakType::Weekly5.threshold(), 5);
        assert_eq!(StreakType::WeeklyAny.threshold(), 1);
    }

    #[test]
    fn test_parse_known_names() {
        for t in StreakType::ALL {
            assert_eq!(t.as_str().parse::<StreakType>(), Ok(t));
            assert_eq!(t.to_string(), t.as_str());
        }
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert!("WEEKLY_6".parse::<StreakType>().is_err());
        assert!("weekly_3".parse::<StreakType>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&StreakType::Weekly3).unwrap();
        assert_eq!(json, "\"WEEKLY_3\"");

        let parsed: StreakType = serde_json::from_str("\"WEEKLY_ANY\"").unwrap();
        assert_eq!(parsed, StreakType::WeeklyAny);
    }
}

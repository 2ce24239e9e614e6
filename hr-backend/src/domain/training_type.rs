// src/domain/training_type.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// 研修・ミーティングの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TrainingType {
    #[default]
    #[serde(rename = "Team Training")]
    TeamTraining,
    #[serde(rename = "One-on-One")]
    OneOnOne,
    #[serde(rename = "All Hands")]
    AllHands,
    #[serde(rename = "Interview")]
    Interview,
    #[serde(rename = "Training")]
    Training,
}

impl TrainingType {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "team training" => Some(Self::TeamTraining),
            "one-on-one" => Some(Self::OneOnOne),
            "all hands" => Some(Self::AllHands),
            "interview" => Some(Self::Interview),
            "training" => Some(Self::Training),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TeamTraining => "Team Training",
            Self::OneOnOne => "One-on-One",
            Self::AllHands => "All Hands",
            Self::Interview => "Interview",
            Self::Training => "Training",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::TeamTraining,
            Self::OneOnOne,
            Self::AllHands,
            Self::Interview,
            Self::Training,
        ]
    }
}

impl fmt::Display for TrainingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TrainingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| {
            format!(
                "Invalid training type: '{}'. Valid types are: {}",
                s,
                Self::all()
                    .iter()
                    .map(|t| t.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}

impl From<TrainingType> for String {
    fn from(value: TrainingType) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_labels() {
        for t in TrainingType::all() {
            assert_eq!(TrainingType::from_str(t.as_str()), Some(t));
        }
        assert_eq!(
            TrainingType::from_str("one-on-one"),
            Some(TrainingType::OneOnOne)
        );
        assert!("Workshop".parse::<TrainingType>().is_err());
    }

    #[test]
    fn test_serialized_form_matches_label() {
        let json = serde_json::to_string(&TrainingType::AllHands).unwrap();
        assert_eq!(json, "\"All Hands\"");
    }
}

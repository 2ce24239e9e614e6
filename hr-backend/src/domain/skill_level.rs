// src/domain/skill_level.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// 社員ごとのスキル習熟度
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum SkillLevel {
    /// 指導のもとで作業できる
    L1,
    /// 一人で作業できる (改善提案はまだ無い)
    L2,
    /// 一人で作業でき、改善提案ができる
    L3,
    /// エキスパート。他者を指導できる
    L4,
    /// 対象外
    #[default]
    NA,
}

impl SkillLevel {
    /// 文字列からSkillLevelに変換
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "L1" => Some(Self::L1),
            "L2" => Some(Self::L2),
            "L3" => Some(Self::L3),
            "L4" => Some(Self::L4),
            "NA" | "N/A" => Some(Self::NA),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
            Self::L3 => "L3",
            Self::L4 => "L4",
            Self::NA => "NA",
        }
    }

    /// すべての有効なレベルを取得
    pub fn all() -> Vec<Self> {
        vec![Self::L1, Self::L2, Self::L3, Self::L4, Self::NA]
    }

    /// 集計対象のレベル (NA 以外)
    pub fn rated() -> [Self; 4] {
        [Self::L1, Self::L2, Self::L3, Self::L4]
    }

    pub fn is_rated(&self) -> bool {
        !matches!(self, Self::NA)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::L1 => "Can work under supervision",
            Self::L2 => "Can work independently without feedback",
            Self::L3 => "Can work independently and suggest improvements",
            Self::L4 => "Expert who can train others",
            Self::NA => "Not applicable",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| {
            format!(
                "Invalid skill level: '{}'. Valid levels are: {}",
                s,
                Self::all()
                    .iter()
                    .map(|l| l.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}

// データベースとの変換用
impl From<SkillLevel> for String {
    fn from(level: SkillLevel) -> Self {
        level.as_str().to_string()
    }
}

impl TryFrom<String> for SkillLevel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(SkillLevel::from_str("L1"), Some(SkillLevel::L1));
        assert_eq!(SkillLevel::from_str("l4"), Some(SkillLevel::L4));
        assert_eq!(SkillLevel::from_str(" NA "), Some(SkillLevel::NA));
        assert_eq!(SkillLevel::from_str("L5"), None);
        assert!("expert".parse::<SkillLevel>().is_err());
    }

    #[test]
    fn test_default_is_na() {
        assert_eq!(SkillLevel::default(), SkillLevel::NA);
        assert!(!SkillLevel::NA.is_rated());
        assert!(SkillLevel::L2.is_rated());
    }

    #[test]
    fn test_serde_uses_level_code() {
        let json = serde_json::to_string(&SkillLevel::L3).unwrap();
        assert_eq!(json, "\"L3\"");
        let level: SkillLevel = serde_json::from_str("\"NA\"").unwrap();
        assert_eq!(level, SkillLevel::NA);
    }
}

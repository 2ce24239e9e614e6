// src/domain/skill_catalog.rs

//! 部署に初期投入できる組み込みのスキル一覧

use serde::{Deserialize, Serialize};

const MANUFACTURING_SKILLS: &[&str] = &[
    "Visual Inspection",
    "Computer Setting",
    "Dial Reading",
    "Seaming Make",
    "RC Check",
    "Roller Filing",
    "Master Matching",
    "Giver Track Size",
    "Lazer MC Operate",
    "Washing Oiling MC",
    "Searing Practice",
    "Child Complex Release",
    "Ball Searing BC",
    "Bore Gauge Setting",
    "Vernier Reading",
    "Large Die Equipment",
    "Rivet MC Setting",
    "Pneumatic Press MC",
    "Manual Operate",
];

const BONDED_SKILLS: &[&str] = &[
    "Knowledge of First In First Out",
    "Knowledge of Identification of Material Lot/Ladle",
    "Knowledge of Material System Docking/un-docking",
    "Knowledge of Bottle Handling",
    "Communication with Ladle System & Data Entry",
    "Knowledge of Verification of invoice with Supplier",
    "Knowledge of Preparation of Challan (OGC/FIFO)",
    "Knowledge of word Processing/Coordinating",
    "Knowledge of 5 S",
    "Knowledge of Inventory Management",
    "Wastage Management",
    "Knowledge of Internal Quality Standard",
    "Operate to OSHA/Pollution & with Safety Instructions",
    "Additional Skill Activity",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCatalog {
    /// 製造ライン向け (既定)
    #[default]
    Manufacturing,
    /// 保税倉庫向け
    Bonded,
}

impl SkillCatalog {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "manufacturing" | "default" => Some(Self::Manufacturing),
            "bonded" => Some(Self::Bonded),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manufacturing => "manufacturing",
            Self::Bonded => "bonded",
        }
    }

    pub fn skills(&self) -> &'static [&'static str] {
        match self {
            Self::Manufacturing => MANUFACTURING_SKILLS,
            Self::Bonded => BONDED_SKILLS,
        }
    }

    /// マトリクスの列見出し用の短い表記
    pub fn column_label(&self, skill: &str) -> String {
        match self {
            Self::Bonded => skill.replace("Knowledge of ", "").replace("with ", "w/ "),
            Self::Manufacturing => skill.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(SkillCatalog::Manufacturing.skills().len(), 19);
        assert_eq!(SkillCatalog::Bonded.skills().len(), 14);
        assert_eq!(
            SkillCatalog::Manufacturing.skills().first(),
            Some(&"Visual Inspection")
        );
    }

    #[test]
    fn test_default_catalog_is_manufacturing() {
        assert_eq!(SkillCatalog::default(), SkillCatalog::Manufacturing);
        assert_eq!(SkillCatalog::from_str(" Bonded "), Some(SkillCatalog::Bonded));
        assert_eq!(SkillCatalog::from_str("warehouse"), None);
    }

    #[test]
    fn test_column_label_shortens_bonded_names() {
        assert_eq!(
            SkillCatalog::Bonded.column_label("Communication with Ladle System & Data Entry"),
            "Communication w/ Ladle System & Data Entry"
        );
        assert_eq!(
            SkillCatalog::Bonded.column_label("Knowledge of 5 S"),
            "5 S"
        );
        assert_eq!(
            SkillCatalog::Manufacturing.column_label("RC Check"),
            "RC Check"
        );
    }
}

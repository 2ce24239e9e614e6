// src/console/skill_matrix.rs

//! スキルマトリクス画面
//!
//! 列は部署のスキル表、行は社員。保存されていないスキルは `NA` として扱う。
//! 絞り込みは読み込み済みのデータに対してのみ行う。

use crate::api::dto::employee_dto::{EmployeeDto, UpdateEmployeeSkillsRequest};
use crate::domain::skill_level::SkillLevel;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixMode {
    #[default]
    Read,
    Edit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("The matrix is not in edit mode")]
    NotEditing,

    #[error("Unknown employee {0}")]
    UnknownEmployee(Uuid),

    #[error("Skill '{0}' is not configured for this department")]
    UnknownSkill(String),
}

/// 絞り込み条件 (全て AND で順に適用する)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillFilters {
    pub employee_name: String,
    pub employee_code: String,
    pub skills: BTreeSet<String>,
    pub levels: BTreeSet<SkillLevel>,
}

impl SkillFilters {
    pub fn is_active(&self) -> bool {
        !self.employee_name.is_empty()
            || !self.employee_code.is_empty()
            || !self.skills.is_empty()
            || !self.levels.is_empty()
    }

    pub fn toggle_skill(&mut self, skill: &str) {
        if !self.skills.remove(skill) {
            self.skills.insert(skill.to_string());
        }
    }

    pub fn toggle_level(&mut self, level: SkillLevel) {
        if !self.levels.remove(&level) {
            self.levels.insert(level);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// レベル表示の四角の数 (NA は 0)
pub fn level_squares(level: SkillLevel) -> u8 {
    match level {
        SkillLevel::L1 => 1,
        SkillLevel::L2 => 2,
        SkillLevel::L3 => 3,
        SkillLevel::L4 => 4,
        SkillLevel::NA => 0,
    }
}

#[derive(Debug, Clone, Default)]
pub struct SkillMatrixView {
    skills: Vec<String>,
    employees: Vec<EmployeeDto>,
    stored: HashMap<Uuid, BTreeMap<String, SkillLevel>>,
    edited: HashMap<Uuid, BTreeMap<String, SkillLevel>>,
    mode: MatrixMode,
    show_filters: bool,
    pub filters: SkillFilters,
}

impl SkillMatrixView {
    /// `skills` は部署のスキル表の並び順のまま渡す
    pub fn new(skills: Vec<String>, employees: Vec<EmployeeDto>) -> Self {
        Self {
            skills,
            employees,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> MatrixMode {
        self.mode
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn show_filters(&self) -> bool {
        self.show_filters
    }

    pub fn toggle_filters(&mut self) {
        self.show_filters = !self.show_filters;
    }

    /// 社員一人分の保存済み習熟度を読み込む
    pub fn load_skills(&mut self, employee_id: Uuid, mapping: BTreeMap<String, SkillLevel>) {
        self.stored.insert(employee_id, mapping);
    }

    fn current(&self, employee_id: Uuid) -> Option<&BTreeMap<String, SkillLevel>> {
        match self.mode {
            MatrixMode::Edit => self.edited.get(&employee_id),
            MatrixMode::Read => self.stored.get(&employee_id),
        }
    }

    /// 表示するレベル。未登録なら NA
    pub fn level(&self, employee_id: Uuid, skill: &str) -> SkillLevel {
        self.current(employee_id)
            .and_then(|m| m.get(skill))
            .copied()
            .unwrap_or_default()
    }

    /// 設定済みの全スキルについての行
    pub fn row(&self, employee_id: Uuid) -> Vec<(String, SkillLevel)> {
        self.skills
            .iter()
            .map(|skill| (skill.clone(), self.level(employee_id, skill)))
            .collect()
    }

    pub fn visible_skills(&self) -> Vec<&str> {
        self.skills
            .iter()
            .filter(|s| self.filters.skills.is_empty() || self.filters.skills.contains(*s))
            .map(String::as_str)
            .collect()
    }

    pub fn visible_employees(&self) -> Vec<&EmployeeDto> {
        let name = self.filters.employee_name.to_lowercase();
        let code = &self.filters.employee_code;

        self.employees
            .iter()
            .filter(|e| name.is_empty() || e.name.to_lowercase().contains(&name))
            .filter(|e| code.is_empty() || e.employee_code.contains(code.as_str()))
            .filter(|e| {
                self.filters.levels.is_empty()
                    || self
                        .row(e.id)
                        .iter()
                        .any(|(_, level)| self.filters.levels.contains(level))
            })
            .collect()
    }

    pub fn start_edit(&mut self) {
        self.edited = self
            .employees
            .iter()
            .map(|e| (e.id, self.stored.get(&e.id).cloned().unwrap_or_default()))
            .collect();
        self.mode = MatrixMode::Edit;
    }

    pub fn set_level(
        &mut self,
        employee_id: Uuid,
        skill: &str,
        level: SkillLevel,
    ) -> Result<(), MatrixError> {
        if self.mode != MatrixMode::Edit {
            return Err(MatrixError::NotEditing);
        }
        if !self.skills.iter().any(|s| s == skill) {
            return Err(MatrixError::UnknownSkill(skill.to_string()));
        }
        let mapping = self
            .edited
            .get_mut(&employee_id)
            .ok_or(MatrixError::UnknownEmployee(employee_id))?;
        mapping.insert(skill.to_string(), level);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.edited.clear();
        self.mode = MatrixMode::Read;
    }

    /// 社員ごとの全置換リクエストを返して閲覧モードに戻る
    pub fn save(&mut self) -> Result<Vec<(Uuid, UpdateEmployeeSkillsRequest)>, MatrixError> {
        if self.mode != MatrixMode::Edit {
            return Err(MatrixError::NotEditing);
        }
        let edited = std::mem::take(&mut self.edited);
        let requests = self
            .employees
            .iter()
            .filter_map(|e| {
                edited.get(&e.id).map(|skills| {
                    (
                        e.id,
                        UpdateEmployeeSkillsRequest {
                            skills: skills.clone(),
                        },
                    )
                })
            })
            .collect();
        self.stored.extend(edited);
        self.mode = MatrixMode::Read;
        Ok(requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn employee(name: &str, code: &str) -> EmployeeDto {
        EmployeeDto {
            id: Uuid::new_v4(),
            name: name.to_string(),
            employee_code: code.to_string(),
            position: "Operator".to_string(),
            department_id: Uuid::new_v4(),
            department_name: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn skills() -> Vec<String> {
        vec!["Visual Inspection".into(), "Dial Reading".into(), "RC Check".into()]
    }

    #[test]
    fn test_unrated_skills_render_as_na() {
        let sato = employee("Sato", "1001");
        let view = SkillMatrixView::new(skills(), vec![sato.clone()]);

        let row = view.row(sato.id);
        assert_eq!(row.len(), 3);
        assert!(row.iter().all(|(_, level)| *level == SkillLevel::NA));
    }

    #[test]
    fn test_filters_apply_in_sequence() {
        let sato = employee("Hanako Sato", "1001");
        let suzuki = employee("Ichiro Suzuki", "2001");
        let mut view = SkillMatrixView::new(skills(), vec![sato.clone(), suzuki.clone()]);
        view.toggle_filters();
        assert!(view.show_filters());
        view.load_skills(
            sato.id,
            BTreeMap::from([("Dial Reading".to_string(), SkillLevel::L3)]),
        );

        view.filters.employee_name = "SATO".into();
        assert_eq!(view.visible_employees().len(), 1);

        view.filters.clear();
        view.filters.employee_code = "200".into();
        assert_eq!(view.visible_employees()[0].id, suzuki.id);

        view.filters.clear();
        view.filters.toggle_level(SkillLevel::L3);
        assert_eq!(view.visible_employees()[0].id, sato.id);
        // NA も選べる (未登録のスキルは NA 扱い)
        view.filters.toggle_level(SkillLevel::NA);
        assert_eq!(view.visible_employees().len(), 2);

        view.filters.clear();
        view.filters.toggle_skill("RC Check");
        assert_eq!(view.visible_skills(), vec!["RC Check"]);
        view.filters.toggle_skill("RC Check");
        assert!(!view.filters.is_active());
    }

    #[test]
    fn test_edit_and_save() {
        let sato = employee("Sato", "1001");
        let mut view = SkillMatrixView::new(skills(), vec![sato.clone()]);

        assert_eq!(
            view.set_level(sato.id, "RC Check", SkillLevel::L2),
            Err(MatrixError::NotEditing)
        );

        view.start_edit();
        view.set_level(sato.id, "RC Check", SkillLevel::L2).unwrap();
        assert!(matches!(
            view.set_level(sato.id, "Welding", SkillLevel::L1),
            Err(MatrixError::UnknownSkill(_))
        ));

        let requests = view.save().unwrap();
        assert_eq!(view.mode(), MatrixMode::Read);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].1.skills.get("RC Check"), Some(&SkillLevel::L2));
        assert_eq!(view.level(sato.id, "RC Check"), SkillLevel::L2);
    }

    #[test]
    fn test_cancel_discards_changes() {
        let sato = employee("Sato", "1001");
        let mut view = SkillMatrixView::new(skills(), vec![sato.clone()]);
        view.start_edit();
        view.set_level(sato.id, "RC Check", SkillLevel::L4).unwrap();
        view.cancel_edit();
        assert_eq!(view.level(sato.id, "RC Check"), SkillLevel::NA);
        assert_eq!(level_squares(SkillLevel::L4), 4);
    }
}

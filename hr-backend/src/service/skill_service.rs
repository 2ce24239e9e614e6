// src/service/skill_service.rs

use crate::api::dto::employee_dto::{EmployeeSkillsDto, SkillSummaryDto};
use crate::api::dto::skill_dto::{SeedSkillsResponse, SkillDto};
use crate::db::DbPool;
use crate::domain::skill_catalog::SkillCatalog;
use crate::domain::skill_level::SkillLevel;
use crate::error::{AppError, AppResult};
use crate::repository::department_repository::DepartmentRepository;
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::employee_skill_repository::EmployeeSkillRepository;
use crate::repository::skill_repository::SkillRepository;
use crate::with_transaction;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info};
use uuid::Uuid;

pub struct SkillService {
    db: DbPool,
}

/// 習熟度の集計と `L1 = 2, L3 = 1 out of 3 skills` 形式の要約
pub fn skill_summary(mapping: &BTreeMap<String, SkillLevel>) -> SkillSummaryDto {
    let mut counts: BTreeMap<String, usize> = SkillLevel::rated()
        .iter()
        .map(|level| (level.as_str().to_string(), 0))
        .collect();

    for level in mapping.values().filter(|level| level.is_rated()) {
        *counts.entry(level.as_str().to_string()).or_insert(0) += 1;
    }
    let total = counts.values().sum();

    let parts: Vec<String> = counts
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(level, count)| format!("{} = {}", level, count))
        .collect();
    let text = if parts.is_empty() {
        "No skills rated".to_string()
    } else {
        format!("{} out of {} skills", parts.join(", "), total)
    };

    SkillSummaryDto {
        counts,
        total,
        text,
    }
}

impl SkillService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// 部署のスキル一覧 (名前順)。この表がスキルマトリクスの列になる
    pub async fn list_skills_by_department(&self, department_id: Uuid) -> AppResult<Vec<SkillDto>> {
        DepartmentRepository::find_by_id(&self.db, department_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Department with id {} not found", department_id))
            })?;

        let skills = SkillRepository::find_by_department(&self.db, department_id).await?;
        Ok(skills.into_iter().map(Into::into).collect())
    }

    pub async fn create_skill(&self, department_id: Uuid, name: String) -> AppResult<SkillDto> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::ValidationError("Skill name is required".to_string()));
        }

        DepartmentRepository::find_by_id(&self.db, department_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Department with id {} not found", department_id))
            })?;

        if SkillRepository::find_by_department_and_name(&self.db, department_id, &name)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "Skill '{}' already exists in this department",
                name
            )));
        }

        let message = format!("Skill '{}' already exists in this department", name);
        let skill = SkillRepository::create(&self.db, department_id, name)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, message))?;

        info!(skill_id = %skill.id, department_id = %department_id, name = %skill.name, "Skill created");
        Ok(skill.into())
    }

    /// 社員の習熟度はカスケードで消える
    pub async fn delete_skill(&self, id: Uuid) -> AppResult<()> {
        let rows = SkillRepository::delete_by_id(&self.db, id).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!("Skill with id {} not found", id)));
        }
        info!(skill_id = %id, "Skill deleted");
        Ok(())
    }

    /// 組み込みカタログを登録する。登録済みの名前は飛ばす
    ///
    /// カタログ省略時は `SkillCatalog::Manufacturing`。
    pub async fn seed_default_catalog(
        &self,
        department_id: Uuid,
        catalog: Option<SkillCatalog>,
    ) -> AppResult<SeedSkillsResponse> {
        let (catalog, inserted, skipped) = with_transaction!(self.db, |txn| async move {
            DepartmentRepository::find_by_id(txn, department_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Department with id {} not found", department_id))
                })?;
            // 部署名には依存しない。省略時は製造ライン向け
            let catalog = catalog.unwrap_or_default();

            let existing: HashSet<String> = SkillRepository::find_by_department(txn, department_id)
                .await?
                .into_iter()
                .map(|s| s.name)
                .collect();

            let mut inserted = Vec::new();
            let mut skipped = 0;
            for name in catalog.skills() {
                if existing.contains(*name) {
                    skipped += 1;
                    continue;
                }
                let skill = SkillRepository::create(txn, department_id, name.to_string()).await?;
                inserted.push(SkillDto::from(skill));
            }
            Ok((catalog, inserted, skipped))
        })?;

        info!(
            department_id = %department_id,
            catalog = catalog.as_str(),
            inserted = inserted.len(),
            skipped,
            "Skill catalog seeded"
        );
        Ok(SeedSkillsResponse {
            catalog,
            inserted,
            skipped,
        })
    }

    /// スキル名 → レベル。登録がなければ空
    pub async fn get_employee_skills(&self, employee_id: Uuid) -> AppResult<EmployeeSkillsDto> {
        EmployeeRepository::find_by_id(&self.db, employee_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Employee with id {} not found", employee_id))
            })?;

        let rows = EmployeeSkillRepository::find_with_skill_by_employee(&self.db, employee_id).await?;
        let skills: BTreeMap<String, SkillLevel> = rows
            .into_iter()
            .filter_map(|(row, skill)| skill.map(|s| (s.name, row.level())))
            .collect();

        let summary = skill_summary(&skills);
        Ok(EmployeeSkillsDto {
            employee_id,
            skills,
            summary,
        })
    }

    /// 既存の習熟度を全て消してから書き直す (マージしない)
    ///
    /// 名前は社員の所属部署のスキルに対して解決し、見つからない名前は捨てる。
    pub async fn update_employee_skills(
        &self,
        employee_id: Uuid,
        mapping: BTreeMap<String, SkillLevel>,
    ) -> AppResult<EmployeeSkillsDto> {
        let (stored, dropped) = with_transaction!(self.db, |txn| async move {
            let employee = EmployeeRepository::find_by_id(txn, employee_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Employee with id {} not found", employee_id))
                })?;

            EmployeeSkillRepository::delete_by_employee(txn, employee_id).await?;

            let skill_ids: BTreeMap<String, Uuid> =
                SkillRepository::find_by_department(txn, employee.department_id)
                    .await?
                    .into_iter()
                    .map(|s| (s.name, s.id))
                    .collect();

            // 前後の空白違いで同じスキルを指すキーはまとめる (後勝ち)
            let mut resolved: BTreeMap<Uuid, (String, SkillLevel)> = BTreeMap::new();
            let mut dropped = 0usize;
            for (name, level) in mapping {
                let name = name.trim();
                match skill_ids.get(name) {
                    Some(skill_id) => {
                        resolved.insert(*skill_id, (name.to_string(), level));
                    }
                    None => dropped += 1,
                }
            }

            let levels: Vec<(Uuid, SkillLevel)> = resolved
                .iter()
                .map(|(skill_id, (_, level))| (*skill_id, *level))
                .collect();
            let stored: BTreeMap<String, SkillLevel> = resolved.into_values().collect();

            EmployeeSkillRepository::insert_levels(txn, employee_id, levels).await?;
            Ok((stored, dropped))
        })?;

        if dropped > 0 {
            debug!(employee_id = %employee_id, dropped, "Unknown skill names were ignored");
        }
        info!(employee_id = %employee_id, skills = stored.len(), "Employee skills replaced");

        let summary = skill_summary(&stored);
        Ok(EmployeeSkillsDto {
            employee_id,
            skills: stored,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, SkillLevel)]) -> BTreeMap<String, SkillLevel> {
        pairs
            .iter()
            .map(|(name, level)| (name.to_string(), *level))
            .collect()
    }

    #[test]
    fn test_summary_lists_only_present_levels() {
        let summary = skill_summary(&mapping(&[
            ("Visual Inspection", SkillLevel::L1),
            ("Packing", SkillLevel::L1),
            ("Safety", SkillLevel::L3),
            ("Forklift", SkillLevel::NA),
        ]));

        assert_eq!(summary.text, "L1 = 2, L3 = 1 out of 3 skills");
        assert_eq!(summary.total, 3);
        assert_eq!(summary.counts.get("L2"), Some(&0));
        assert_eq!(summary.counts.get("NA"), None);
    }

    #[test]
    fn test_summary_without_rated_skills() {
        let summary = skill_summary(&mapping(&[("Forklift", SkillLevel::NA)]));
        assert_eq!(summary.total, 0);
        assert_eq!(summary.text, "No skills rated");

        let empty = skill_summary(&BTreeMap::new());
        assert_eq!(empty.counts.len(), 4);
    }
}

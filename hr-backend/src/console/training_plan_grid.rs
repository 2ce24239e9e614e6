// src/console/training_plan_grid.rs

//! 年間研修計画の表 (年度の12か月 × トピック)

use crate::api::dto::training_plan_dto::{
    CreateTrainingPlanRequest, TrainingPlanDto, UpdateTrainingPlanRequest,
};
use crate::domain::month::PlanMonth;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthKind {
    Planned,
    Actual,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Training plan {0} is not on the grid")]
    UnknownPlan(Uuid),

    #[error("Month '{0}' is outside the fiscal year")]
    OutsideYear(String),

    #[error("Cannot mark '{0}' as actual: training is not planned for this month")]
    NotPlanned(String),

    #[error("{0} is required")]
    MissingField(&'static str),
}

/// 追加ダイアログの入力
#[derive(Debug, Clone, Default)]
pub struct PlanDraft {
    pub department_id: Option<Uuid>,
    pub training_topic: String,
    pub planned_months: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TrainingPlanGrid {
    start_year: i32,
    months: Vec<String>,
    plans: Vec<TrainingPlanDto>,
}

impl TrainingPlanGrid {
    /// `start_year` 年4月から翌年3月まで
    pub fn new(start_year: i32, plans: Vec<TrainingPlanDto>) -> Self {
        let months = PlanMonth::fiscal_year(start_year)
            .iter()
            .map(PlanMonth::label)
            .collect();
        Self {
            start_year,
            months,
            plans,
        }
    }

    /// 見出し用 (例: `2025-26`)
    pub fn title(&self) -> String {
        format!("{}-{:02}", self.start_year, (self.start_year + 1).rem_euclid(100))
    }

    pub fn months(&self) -> &[String] {
        &self.months
    }

    pub fn plans(&self) -> &[TrainingPlanDto] {
        &self.plans
    }

    fn plan_mut(&mut self, plan_id: Uuid) -> Result<&mut TrainingPlanDto, PlanError> {
        self.plans
            .iter_mut()
            .find(|p| p.id == plan_id)
            .ok_or(PlanError::UnknownPlan(plan_id))
    }

    fn column(&self, month: &str) -> Result<usize, PlanError> {
        self.months
            .iter()
            .position(|m| m == month)
            .ok_or_else(|| PlanError::OutsideYear(month.to_string()))
    }

    fn sort_by_column(months: &mut [String], columns: &[String]) {
        months.sort_by_key(|m| columns.iter().position(|c| c == m).unwrap_or(usize::MAX));
    }

    pub fn is_selected(&self, plan_id: Uuid, month: &str, kind: MonthKind) -> bool {
        self.plans
            .iter()
            .find(|p| p.id == plan_id)
            .is_some_and(|p| match kind {
                MonthKind::Planned => p.planned_months.iter().any(|m| m == month),
                MonthKind::Actual => p.actual_months.iter().any(|m| m == month),
            })
    }

    /// 計画月の切り替え。外した月に実施月があれば一緒に外す
    pub fn toggle_planned(&mut self, plan_id: Uuid, month: &str) -> Result<(), PlanError> {
        self.column(month)?;
        let columns = self.months.clone();
        let plan = self.plan_mut(plan_id)?;

        if plan.planned_months.iter().any(|m| m == month) {
            plan.planned_months.retain(|m| m != month);
            plan.actual_months.retain(|m| m != month);
        } else {
            plan.planned_months.push(month.to_string());
            Self::sort_by_column(&mut plan.planned_months, &columns);
        }
        Ok(())
    }

    /// 実施月の切り替え。計画されていない月は拒否する
    pub fn toggle_actual(&mut self, plan_id: Uuid, month: &str) -> Result<(), PlanError> {
        self.column(month)?;
        let columns = self.months.clone();
        let plan = self.plan_mut(plan_id)?;

        if !plan.planned_months.iter().any(|m| m == month) {
            return Err(PlanError::NotPlanned(month.to_string()));
        }
        if plan.actual_months.iter().any(|m| m == month) {
            plan.actual_months.retain(|m| m != month);
        } else {
            plan.actual_months.push(month.to_string());
            Self::sort_by_column(&mut plan.actual_months, &columns);
        }
        Ok(())
    }

    /// 行の現在の状態を保存するためのリクエスト
    pub fn update_request(&self, plan_id: Uuid) -> Result<UpdateTrainingPlanRequest, PlanError> {
        let plan = self
            .plans
            .iter()
            .find(|p| p.id == plan_id)
            .ok_or(PlanError::UnknownPlan(plan_id))?;
        Ok(UpdateTrainingPlanRequest {
            planned_months: Some(plan.planned_months.clone()),
            actual_months: Some(plan.actual_months.clone()),
            ..Default::default()
        })
    }

    /// 部署とトピックは必須。実施月は空で作る
    pub fn add_plan(&self, draft: PlanDraft) -> Result<CreateTrainingPlanRequest, PlanError> {
        let department_id = draft
            .department_id
            .ok_or(PlanError::MissingField("Department"))?;
        let topic = draft.training_topic.trim().to_string();
        if topic.is_empty() {
            return Err(PlanError::MissingField("Training topic"));
        }
        let mut planned_months = draft.planned_months;
        for month in &planned_months {
            self.column(month)?;
        }
        Self::sort_by_column(&mut planned_months, &self.months);
        planned_months.dedup();

        Ok(CreateTrainingPlanRequest {
            department_id,
            training_topic: topic,
            planned_months,
            actual_months: Vec::new(),
        })
    }

    /// 保存済みの計画を表に反映する
    pub fn upsert_plan(&mut self, plan: TrainingPlanDto) {
        match self.plans.iter_mut().find(|p| p.id == plan.id) {
            Some(existing) => *existing = plan,
            None => self.plans.push(plan),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn plan(planned: &[&str]) -> TrainingPlanDto {
        TrainingPlanDto {
            id: Uuid::new_v4(),
            department_id: Uuid::new_v4(),
            department_name: Some("Grinding".into()),
            training_topic: "Duplex Grinding".into(),
            planned_months: planned.iter().map(|s| s.to_string()).collect(),
            actual_months: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_columns_cover_fiscal_year() {
        let grid = TrainingPlanGrid::new(2025, Vec::new());
        assert_eq!(grid.months().first().map(String::as_str), Some("Apr-25"));
        assert_eq!(grid.months().last().map(String::as_str), Some("Mar-26"));
        assert_eq!(grid.title(), "2025-26");
    }

    #[test]
    fn test_actual_requires_planned() {
        let p = plan(&["Apr-25"]);
        let id = p.id;
        let mut grid = TrainingPlanGrid::new(2025, vec![p]);

        assert_eq!(
            grid.toggle_actual(id, "May-25"),
            Err(PlanError::NotPlanned("May-25".into()))
        );
        grid.toggle_planned(id, "May-25").unwrap();
        grid.toggle_actual(id, "May-25").unwrap();
        assert!(grid.is_selected(id, "May-25", MonthKind::Actual));
    }

    #[test]
    fn test_planned_months_stay_in_calendar_order() {
        let p = plan(&["Oct-25"]);
        let id = p.id;
        let mut grid = TrainingPlanGrid::new(2025, vec![p]);

        grid.toggle_planned(id, "Jan-26").unwrap();
        grid.toggle_planned(id, "Apr-25").unwrap();
        assert_eq!(grid.plans()[0].planned_months, vec!["Apr-25", "Oct-25", "Jan-26"]);
        assert_eq!(
            grid.toggle_planned(id, "Apr-24"),
            Err(PlanError::OutsideYear("Apr-24".into()))
        );
    }

    #[test]
    fn test_unplanning_drops_actual() {
        let p = plan(&["Apr-25"]);
        let id = p.id;
        let mut grid = TrainingPlanGrid::new(2025, vec![p]);

        grid.toggle_actual(id, "Apr-25").unwrap();
        grid.toggle_planned(id, "Apr-25").unwrap();
        assert!(grid.plans()[0].actual_months.is_empty());

        let request = grid.update_request(id).unwrap();
        assert_eq!(request.planned_months, Some(Vec::new()));
    }

    #[test]
    fn test_add_plan_requires_department_and_topic() {
        let grid = TrainingPlanGrid::new(2025, Vec::new());
        let draft = PlanDraft {
            department_id: None,
            training_topic: "Sorting".into(),
            planned_months: vec!["Dec-25".into(), "Sep-25".into()],
        };
        assert_eq!(
            grid.add_plan(draft.clone()).unwrap_err(),
            PlanError::MissingField("Department")
        );

        let request = grid
            .add_plan(PlanDraft {
                department_id: Some(Uuid::new_v4()),
                ..draft
            })
            .unwrap();
        assert_eq!(request.planned_months, vec!["Sep-25", "Dec-25"]);
        assert!(request.actual_months.is_empty());
    }

    #[test]
    fn test_upsert_replaces_saved_plan() {
        let mut saved = plan(&["Apr-25"]);
        let mut grid = TrainingPlanGrid::new(2025, vec![saved.clone()]);

        saved.actual_months = vec!["Apr-25".into()];
        grid.upsert_plan(saved.clone());
        grid.upsert_plan(plan(&["May-25"]));

        assert_eq!(grid.plans().len(), 2);
        assert!(grid.is_selected(saved.id, "Apr-25", MonthKind::Actual));
    }
}

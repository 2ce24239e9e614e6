// src/service/dashboard_service.rs

use crate::api::dto::dashboard_dto::DashboardOverviewDto;
use crate::db::DbPool;
use crate::domain::month::ShortMonth;
use crate::error::AppResult;
use crate::repository::department_repository::DepartmentRepository;
use crate::repository::training_data_repository::TrainingDataRepository;
use chrono::NaiveDate;

pub struct DashboardService {
    db: DbPool,
}

impl DashboardService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// 概要タブの統計。研修回数は `today` の月の planned
    pub async fn overview(&self, year: i32, today: NaiveDate) -> AppResult<DashboardOverviewDto> {
        let departments = DepartmentRepository::find_all(&self.db).await?;
        let total_employees = departments
            .iter()
            .map(|d| i64::from(d.employee_count))
            .sum();

        let rows = TrainingDataRepository::find_by_year(&self.db, year).await?;
        let current_month = ShortMonth::of_date(today);
        let training_sessions = rows
            .iter()
            .find(|row| row.month_index == current_month.index())
            .map(|row| row.planned)
            .unwrap_or(0);

        Ok(DashboardOverviewDto {
            year,
            department_count: departments.len() as u64,
            total_employees,
            training_sessions,
            current_month: current_month.to_string(),
            training_data: rows.into_iter().map(Into::into).collect(),
        })
    }
}

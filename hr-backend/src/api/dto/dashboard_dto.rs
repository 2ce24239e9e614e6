// src/api/dto/dashboard_dto.rs
use crate::api::dto::training_data_dto::TrainingDataDto;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    /// 省略時は今年
    pub year: Option<i32>,
}

/// ダッシュボード概要タブの統計
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardOverviewDto {
    pub year: i32,
    pub department_count: u64,
    /// 部署の employee_count の合計
    pub total_employees: i64,
    /// 今月の planned
    pub training_sessions: i32,
    pub current_month: String,
    pub training_data: Vec<TrainingDataDto>,
}

// src/service/department_service.rs

use crate::api::dto::department_dto::{
    CreateDepartmentRequest, DepartmentDto, UpdateDepartmentRequest,
};
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::repository::department_repository::DepartmentRepository;
use sea_orm::Set;
use tracing::info;
use uuid::Uuid;

pub struct DepartmentService {
    db: DbPool,
}

impl DepartmentService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// 名前順の全部署
    pub async fn list_all(&self) -> AppResult<Vec<DepartmentDto>> {
        let departments = DepartmentRepository::find_all(&self.db).await?;
        Ok(departments.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: Uuid) -> AppResult<DepartmentDto> {
        DepartmentRepository::find_by_id(&self.db, id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Department with id {} not found", id)))
    }

    pub async fn create(&self, payload: CreateDepartmentRequest) -> AppResult<DepartmentDto> {
        let name = payload.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "Department name is required".to_string(),
            ));
        }

        let department = DepartmentRepository::create(&self.db, name).await?;
        info!(department_id = %department.id, name = %department.name, "Department created");
        Ok(department.into())
    }

    /// 指定されたフィールドだけを更新し、updated_at を打刻する
    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateDepartmentRequest,
    ) -> AppResult<DepartmentDto> {
        let department = DepartmentRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Department with id {} not found", id)))?;

        let mut active_model: crate::domain::department_model::ActiveModel = department.into();
        if let Some(name) = payload.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::ValidationError(
                    "Department name is required".to_string(),
                ));
            }
            active_model.name = Set(name);
        }
        if let Some(count) = payload.employee_count {
            if count < 0 {
                return Err(AppError::ValidationError(
                    "Employee count must not be negative".to_string(),
                ));
            }
            active_model.employee_count = Set(count);
        }

        let updated = DepartmentRepository::update(&self.db, active_model).await?;
        info!(department_id = %id, "Department updated");
        Ok(updated.into())
    }

    /// 社員・スキル・研修計画は外部キーのカスケードで消える
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let rows = DepartmentRepository::delete_by_id(&self.db, id).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Department with id {} not found",
                id
            )));
        }
        info!(department_id = %id, "Department deleted");
        Ok(())
    }
}

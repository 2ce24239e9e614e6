// src/service/employee_service.rs

use crate::api::dto::employee_dto::{CreateEmployeeRequest, EmployeeDto, UpdateEmployeeRequest};
use crate::db::DbPool;
use crate::domain::employee_model;
use crate::error::{AppError, AppResult};
use crate::repository::department_repository::DepartmentRepository;
use crate::repository::employee_repository::EmployeeRepository;
use crate::with_transaction;
use sea_orm::{ActiveModelBehavior, ConnectionTrait, Set};
use tracing::{info, warn};
use uuid::Uuid;

pub struct EmployeeService {
    db: DbPool,
}

fn department_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Department with id {} not found", id))
}

fn employee_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Employee with id {} not found", id))
}

fn duplicate_code_message(code: &str) -> String {
    format!("Employee code '{}' is already in use", code)
}

fn duplicate_code(code: &str) -> AppError {
    AppError::Conflict(duplicate_code_message(code))
}

fn required(value: String, field: &str) -> AppResult<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(AppError::ValidationError(format!("{} is required", field)));
    }
    Ok(value)
}

/// 社員コードが他の社員に使われていないか確認する
async fn ensure_code_available<C: ConnectionTrait>(
    db: &C,
    code: &str,
    current_employee: Option<Uuid>,
) -> AppResult<()> {
    match EmployeeRepository::find_by_code(db, code).await? {
        Some(existing) if Some(existing.id) != current_employee => Err(duplicate_code(code)),
        _ => Ok(()),
    }
}

impl EmployeeService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// 部署の社員を名前順で取得 (部署名付き)
    pub async fn list_by_department(&self, department_id: Uuid) -> AppResult<Vec<EmployeeDto>> {
        DepartmentRepository::find_by_id(&self.db, department_id)
            .await?
            .ok_or_else(|| department_not_found(department_id))?;

        let rows =
            EmployeeRepository::find_by_department_with_department(&self.db, department_id).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: Uuid) -> AppResult<EmployeeDto> {
        EmployeeRepository::find_by_id_with_department(&self.db, id)
            .await?
            .map(Into::into)
            .ok_or_else(|| employee_not_found(id))
    }

    /// 社員を登録し、同じトランザクションで部署の人数を +1 する
    pub async fn create(
        &self,
        department_id: Uuid,
        payload: CreateEmployeeRequest,
    ) -> AppResult<EmployeeDto> {
        let name = required(payload.name, "Name")?;
        let code = required(payload.employee_code, "Employee code")?;
        let position = required(payload.position, "Position")?;

        let created = with_transaction!(self.db, |txn| async move {
            let department = DepartmentRepository::find_by_id(txn, department_id)
                .await?
                .ok_or_else(|| department_not_found(department_id))?;

            ensure_code_available(txn, &code, None).await?;

            let active_model = employee_model::ActiveModel {
                name: Set(name),
                employee_code: Set(code.clone()),
                position: Set(position),
                department_id: Set(department_id),
                ..employee_model::ActiveModel::new()
            };
            let employee = EmployeeRepository::create(txn, active_model)
                .await
                .map_err(|e| AppError::conflict_on_unique(e, duplicate_code_message(&code)))?;

            DepartmentRepository::increment_employee_count(txn, department_id).await?;
            Ok((employee, Some(department)))
        })?;

        info!(
            employee_id = %created.0.id,
            department_id = %department_id,
            "Employee created"
        );
        Ok(created.into())
    }

    /// 部分更新。部署を移る場合は旧部署 -1、新部署 +1 を同じトランザクションで行う
    pub async fn update(&self, id: Uuid, payload: UpdateEmployeeRequest) -> AppResult<EmployeeDto> {
        let name = payload.name.map(|v| required(v, "Name")).transpose()?;
        let code = payload
            .employee_code
            .map(|v| required(v, "Employee code"))
            .transpose()?;
        let position = payload
            .position
            .map(|v| required(v, "Position"))
            .transpose()?;
        let new_department_id = payload.department_id;

        let updated = with_transaction!(self.db, |txn| async move {
            let employee = EmployeeRepository::find_by_id(txn, id)
                .await?
                .ok_or_else(|| employee_not_found(id))?;
            let old_department_id = employee.department_id;

            let mut active_model: employee_model::ActiveModel = employee.into();
            if let Some(name) = name {
                active_model.name = Set(name);
            }
            if let Some(code) = code.as_ref() {
                ensure_code_available(txn, code, Some(id)).await?;
                active_model.employee_code = Set(code.clone());
            }
            if let Some(position) = position {
                active_model.position = Set(position);
            }

            let mut department = None;
            if let Some(target) = new_department_id {
                department = Some(
                    DepartmentRepository::find_by_id(txn, target)
                        .await?
                        .ok_or_else(|| department_not_found(target))?,
                );
                if target != old_department_id {
                    active_model.department_id = Set(target);
                    DepartmentRepository::decrement_employee_count(txn, old_department_id).await?;
                    DepartmentRepository::increment_employee_count(txn, target).await?;
                }
            }

            let employee = EmployeeRepository::update(txn, active_model)
                .await
                .map_err(|e| {
                    AppError::conflict_on_unique(e, "Employee code is already in use".to_string())
                })?;

            if department.is_none() {
                department = DepartmentRepository::find_by_id(txn, employee.department_id).await?;
            }
            Ok((employee, department))
        })?;

        info!(employee_id = %id, "Employee updated");
        Ok(updated.into())
    }

    /// 社員を削除し、同じトランザクションで部署の人数を -1 する
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let department_id = with_transaction!(self.db, |txn| async move {
            let employee = EmployeeRepository::find_by_id(txn, id)
                .await?
                .ok_or_else(|| employee_not_found(id))?;

            EmployeeRepository::delete_by_id(txn, id).await?;
            let decremented =
                DepartmentRepository::decrement_employee_count(txn, employee.department_id).await?;
            if decremented == 0 {
                warn!(
                    department_id = %employee.department_id,
                    "Employee count was already zero; counter left unchanged"
                );
            }
            Ok(employee.department_id)
        })?;

        info!(employee_id = %id, department_id = %department_id, "Employee deleted");
        Ok(())
    }
}

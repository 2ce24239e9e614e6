// src/repository/employee_repository.rs
use crate::domain::department_model::{self, Entity as Department};
use crate::domain::employee_model::{self, Entity as Employee};
use sea_orm::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, QueryOrder};

pub struct EmployeeRepository;

impl EmployeeRepository {
    /// 部署の社員を名前順で、部署情報と合わせて取得
    pub async fn find_by_department_with_department<C: ConnectionTrait>(
        db: &C,
        department_id: Uuid,
    ) -> Result<Vec<(employee_model::Model, Option<department_model::Model>)>, DbErr> {
        Employee::find()
            .filter(employee_model::Column::DepartmentId.eq(department_id))
            .find_also_related(Department)
            .order_by_asc(employee_model::Column::Name)
            .all(db)
            .await
    }

    pub async fn find_by_department<C: ConnectionTrait>(
        db: &C,
        department_id: Uuid,
    ) -> Result<Vec<employee_model::Model>, DbErr> {
        Employee::find()
            .filter(employee_model::Column::DepartmentId.eq(department_id))
            .order_by_asc(employee_model::Column::Name)
            .all(db)
            .await
    }

    pub async fn find_by_id<C: ConnectionTrait>(
        db: &C,
        id: Uuid,
    ) -> Result<Option<employee_model::Model>, DbErr> {
        Employee::find_by_id(id).one(db).await
    }

    pub async fn find_by_id_with_department<C: ConnectionTrait>(
        db: &C,
        id: Uuid,
    ) -> Result<Option<(employee_model::Model, Option<department_model::Model>)>, DbErr> {
        Employee::find_by_id(id)
            .find_also_related(Department)
            .one(db)
            .await
    }

    pub async fn find_by_code<C: ConnectionTrait>(
        db: &C,
        employee_code: &str,
    ) -> Result<Option<employee_model::Model>, DbErr> {
        Employee::find()
            .filter(employee_model::Column::EmployeeCode.eq(employee_code))
            .one(db)
            .await
    }

    pub async fn create<C: ConnectionTrait>(
        db: &C,
        active_model: employee_model::ActiveModel,
    ) -> Result<employee_model::Model, DbErr> {
        active_model.insert(db).await
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        active_model: employee_model::ActiveModel,
    ) -> Result<employee_model::Model, DbErr> {
        active_model.update(db).await
    }

    pub async fn delete_by_id<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<u64, DbErr> {
        let result = Employee::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected)
    }
}

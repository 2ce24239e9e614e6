// src/repository/department_repository.rs
use crate::domain::department_model::{self, Entity as Department};
use sea_orm::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ConnectionTrait, QueryOrder, Set};

pub struct DepartmentRepository;

impl DepartmentRepository {
    pub async fn find_all<C: ConnectionTrait>(
        db: &C,
    ) -> Result<Vec<department_model::Model>, DbErr> {
        Department::find()
            .order_by_asc(department_model::Column::Name)
            .all(db)
            .await
    }

    pub async fn find_by_id<C: ConnectionTrait>(
        db: &C,
        id: Uuid,
    ) -> Result<Option<department_model::Model>, DbErr> {
        Department::find_by_id(id).one(db).await
    }

    pub async fn create<C: ConnectionTrait>(
        db: &C,
        name: String,
    ) -> Result<department_model::Model, DbErr> {
        let active_model = department_model::ActiveModel {
            name: Set(name),
            ..department_model::ActiveModel::new()
        };
        active_model.insert(db).await
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        active_model: department_model::ActiveModel,
    ) -> Result<department_model::Model, DbErr> {
        active_model.update(db).await
    }

    /// 削除した行数を返す (0 なら存在しなかった)
    pub async fn delete_by_id<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<u64, DbErr> {
        let result = Department::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected)
    }

    /// `employee_count = employee_count + 1`
    pub async fn increment_employee_count<C: ConnectionTrait>(
        db: &C,
        id: Uuid,
    ) -> Result<u64, DbErr> {
        let result = Department::update_many()
            .col_expr(
                department_model::Column::EmployeeCount,
                Expr::col(department_model::Column::EmployeeCount).add(1),
            )
            .col_expr(
                department_model::Column::UpdatedAt,
                Expr::value(chrono::Utc::now()),
            )
            .filter(department_model::Column::Id.eq(id))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }

    /// `employee_count = employee_count - 1` (0 未満にはしない)
    pub async fn decrement_employee_count<C: ConnectionTrait>(
        db: &C,
        id: Uuid,
    ) -> Result<u64, DbErr> {
        let result = Department::update_many()
            .col_expr(
                department_model::Column::EmployeeCount,
                Expr::col(department_model::Column::EmployeeCount).sub(1),
            )
            .col_expr(
                department_model::Column::UpdatedAt,
                Expr::value(chrono::Utc::now()),
            )
            .filter(department_model::Column::Id.eq(id))
            .filter(department_model::Column::EmployeeCount.gt(0))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }
}

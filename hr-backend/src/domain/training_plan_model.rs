// src/domain/training_plan_model.rs
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, FromJsonQueryResult, Set};
use serde::{Deserialize, Serialize};

/// `Apr-25` 形式の月ラベル列 (JSON カラムに保存)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct MonthList(pub Vec<String>);

impl MonthList {
    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|m| m == label)
    }

    /// 自分の全ての月が `other` に含まれるか
    pub fn is_subset_of(&self, other: &MonthList) -> bool {
        self.0.iter().all(|m| other.contains(m))
    }
}

impl From<Vec<String>> for MonthList {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

/// 部署別の年間研修計画 (計画月と実施月)
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "training_plans")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub department_id: Uuid,
    pub training_topic: String,
    #[sea_orm(column_type = "Json")]
    pub planned_months: MonthList,
    /// planned_months の部分集合
    #[sea_orm(column_type = "Json")]
    pub actual_months: MonthList,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department_model::Entity",
        from = "Column::DepartmentId",
        to = "super::department_model::Column::Id",
        on_delete = "Cascade"
    )]
    Department,
}

impl Related<super::department_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            planned_months: Set(MonthList::default()),
            actual_months: Set(MonthList::default()),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
            ..ActiveModelTrait::default()
        }
    }

    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            self.updated_at = Set(Utc::now());
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_list_subset() {
        let planned = MonthList(vec!["Apr-25".into(), "Oct-25".into()]);
        let actual = MonthList(vec!["Apr-25".into()]);
        let stray = MonthList(vec!["May-25".into()]);

        assert!(actual.is_subset_of(&planned));
        assert!(MonthList::default().is_subset_of(&planned));
        assert!(!stray.is_subset_of(&planned));
    }
}

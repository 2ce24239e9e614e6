// src/repository/training_data_repository.rs
use crate::domain::month::ShortMonth;
use crate::domain::training_data_model::{self, Entity as TrainingData};
use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, QueryOrder, Set};

/// 1か月分の集計値
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthCounters {
    pub planned: i32,
    pub done: i32,
    pub pending: i32,
}

pub struct TrainingDataRepository;

impl TrainingDataRepository {
    /// 年の集計を暦順 (month_index) で取得
    pub async fn find_by_year<C: ConnectionTrait>(
        db: &C,
        year: i32,
    ) -> Result<Vec<training_data_model::Model>, DbErr> {
        TrainingData::find()
            .filter(training_data_model::Column::Year.eq(year))
            .order_by_asc(training_data_model::Column::MonthIndex)
            .all(db)
            .await
    }

    pub async fn find_by_month_year<C: ConnectionTrait>(
        db: &C,
        month: ShortMonth,
        year: i32,
    ) -> Result<Option<training_data_model::Model>, DbErr> {
        TrainingData::find()
            .filter(training_data_model::Column::Month.eq(month.as_str()))
            .filter(training_data_model::Column::Year.eq(year))
            .one(db)
            .await
    }

    /// (month, year) をキーに挿入または更新し、保存後の行を返す
    pub async fn upsert<C: ConnectionTrait>(
        db: &C,
        month: ShortMonth,
        year: i32,
        counters: MonthCounters,
    ) -> Result<training_data_model::Model, DbErr> {
        let active_model = training_data_model::ActiveModel {
            month: Set(month.as_str().to_string()),
            month_index: Set(month.index()),
            year: Set(year),
            planned: Set(counters.planned),
            done: Set(counters.done),
            pending: Set(counters.pending),
            updated_at: Set(Utc::now()),
            ..training_data_model::ActiveModel::new()
        };

        TrainingData::insert(active_model)
            .on_conflict(
                OnConflict::columns([
                    training_data_model::Column::Month,
                    training_data_model::Column::Year,
                ])
                .update_columns([
                    training_data_model::Column::Planned,
                    training_data_model::Column::Done,
                    training_data_model::Column::Pending,
                    training_data_model::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_without_returning(db)
            .await?;

        Self::find_by_month_year(db, month, year)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("training_data".to_string()))
    }
}

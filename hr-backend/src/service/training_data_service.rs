// src/service/training_data_service.rs

use crate::api::dto::training_data_dto::{
    MonthRowRequest, TrainingDataDto, UpdateMonthRequest,
};
use crate::db::DbPool;
use crate::domain::month::ShortMonth;
use crate::error::{AppError, AppResult};
use crate::repository::training_data_repository::{MonthCounters, TrainingDataRepository};
use crate::with_transaction;
use sea_orm::ConnectionTrait;
use tracing::info;

pub struct TrainingDataService {
    db: DbPool,
}

fn parse_month(raw: &str) -> AppResult<ShortMonth> {
    ShortMonth::from_str(raw).ok_or_else(|| {
        AppError::ValidationError(format!("Invalid month '{}'. Expected Jan..Dec", raw))
    })
}

fn ensure_non_negative(counters: &MonthCounters) -> AppResult<()> {
    if counters.planned < 0 || counters.done < 0 || counters.pending < 0 {
        return Err(AppError::ValidationError(
            "Training counters must not be negative".to_string(),
        ));
    }
    Ok(())
}

/// 指定されたカウンタだけを既存値に重ねる (既存行がなければ 0 から)
pub fn merge_counters(existing: Option<MonthCounters>, update: &UpdateMonthRequest) -> MonthCounters {
    let base = existing.unwrap_or_default();
    MonthCounters {
        planned: update.planned.unwrap_or(base.planned),
        done: update.done.unwrap_or(base.done),
        pending: update.pending.unwrap_or(base.pending),
    }
}

async fn upsert_month<C: ConnectionTrait>(
    db: &C,
    month: ShortMonth,
    year: i32,
    update: UpdateMonthRequest,
) -> AppResult<TrainingDataDto> {
    let existing = TrainingDataRepository::find_by_month_year(db, month, year)
        .await?
        .map(|row| MonthCounters {
            planned: row.planned,
            done: row.done,
            pending: row.pending,
        });
    let counters = merge_counters(existing, &update);
    ensure_non_negative(&counters)?;

    let row = TrainingDataRepository::upsert(db, month, year, counters).await?;
    Ok(row.into())
}

impl TrainingDataService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// 暦順 (Jan→Dec)
    pub async fn get_by_year(&self, year: i32) -> AppResult<Vec<TrainingDataDto>> {
        let rows = TrainingDataRepository::find_by_year(&self.db, year).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// (month, year) の行を upsert する
    pub async fn update_month(
        &self,
        month: &str,
        year: i32,
        update: UpdateMonthRequest,
    ) -> AppResult<TrainingDataDto> {
        let month = parse_month(month)?;
        let row = upsert_month(&self.db, month, year, update).await?;
        info!(
            month = %month,
            year,
            planned = row.planned,
            done = row.done,
            pending = row.pending,
            "Training data updated"
        );
        Ok(row)
    }

    /// グラフ編集ダイアログの全月を一括保存
    pub async fn update_year(
        &self,
        year: i32,
        rows: Vec<MonthRowRequest>,
    ) -> AppResult<Vec<TrainingDataDto>> {
        let parsed = rows
            .into_iter()
            .map(|row| {
                parse_month(&row.month).map(|month| {
                    (
                        month,
                        UpdateMonthRequest {
                            planned: Some(row.planned),
                            done: Some(row.done),
                            pending: Some(row.pending),
                        },
                    )
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        let saved = with_transaction!(self.db, |txn| async move {
            let mut saved = Vec::with_capacity(parsed.len());
            for (month, update) in parsed {
                saved.push(upsert_month(txn, month, year, update).await?);
            }
            Ok(saved)
        })?;

        info!(year, months = saved.len(), "Training data saved for year");
        self.get_by_year(year).await
    }
}

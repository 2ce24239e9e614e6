// src/service/training_service.rs

use crate::api::dto::common::trimmed;
use crate::api::dto::training_dto::{
    CreateTrainingRequest, TrainingDto, TrainingWithParticipantsDto,
};
use crate::db::DbPool;
use crate::domain::training_model;
use crate::error::{AppError, AppResult};
use crate::repository::training_repository::TrainingRepository;
use crate::with_transaction;
use sea_orm::{ActiveModelBehavior, Set};
use tracing::info;
use uuid::Uuid;

/// 所要時間の既定値 (分)
pub const DEFAULT_DURATION_MINUTES: i32 = 60;

pub struct TrainingService {
    db: DbPool,
}

/// 前後の空白を除き、空の名前を捨てる
pub fn clean_participants(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}

impl TrainingService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// 日付の新しい順
    pub async fn list_all(&self) -> AppResult<Vec<TrainingDto>> {
        let trainings = TrainingRepository::find_all(&self.db).await?;
        Ok(trainings.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: Uuid) -> AppResult<TrainingWithParticipantsDto> {
        let training = TrainingRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Training with id {} not found", id)))?;
        let participants = TrainingRepository::find_participant_names(&self.db, id).await?;

        Ok(TrainingWithParticipantsDto {
            training: training.into(),
            participants,
        })
    }

    /// 研修と参加者を一つのトランザクションで登録する
    ///
    /// 主催者が空のときは `default_organizer` (サインイン中のユーザー名) を使う。
    pub async fn create(
        &self,
        payload: CreateTrainingRequest,
        default_organizer: String,
    ) -> AppResult<TrainingWithParticipantsDto> {
        let title = payload.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::ValidationError("Title is required".to_string()));
        }
        let duration = payload.duration.unwrap_or(DEFAULT_DURATION_MINUTES);
        if duration <= 0 {
            return Err(AppError::ValidationError(
                "Duration must be a positive number of minutes".to_string(),
            ));
        }

        let active_model = training_model::ActiveModel {
            title: Set(title),
            description: Set(trimmed(payload.description).unwrap_or_default()),
            training_date: Set(payload.training_date),
            training_time: Set(payload.training_time),
            duration: Set(duration),
            location: Set(trimmed(payload.location).unwrap_or_default()),
            organizer: Set(trimmed(payload.organizer).unwrap_or(default_organizer)),
            training_type: Set(payload.training_type.unwrap_or_default().to_string()),
            ..training_model::ActiveModel::new()
        };
        let participants = clean_participants(payload.participants);

        let (training, participants) = with_transaction!(self.db, |txn| async move {
            let training = TrainingRepository::create(txn, active_model).await?;
            TrainingRepository::insert_participants(txn, training.id, participants.clone()).await?;
            Ok((training, participants))
        })?;

        info!(
            training_id = %training.id,
            date = %training.training_date,
            participants = participants.len(),
            "Training scheduled"
        );

        let mut participants = participants;
        participants.sort();
        Ok(TrainingWithParticipantsDto {
            training: training.into(),
            participants,
        })
    }

    /// 参加者名 (名前順)。研修がなければ 404
    pub async fn get_participants(&self, training_id: Uuid) -> AppResult<Vec<String>> {
        TrainingRepository::find_by_id(&self.db, training_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Training with id {} not found", training_id))
            })?;
        Ok(TrainingRepository::find_participant_names(&self.db, training_id).await?)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let rows = TrainingRepository::delete_by_id(&self.db, id).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!("Training with id {} not found", id)));
        }
        info!(training_id = %id, "Training deleted");
        Ok(())
    }
}

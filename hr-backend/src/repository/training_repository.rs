// src/repository/training_repository.rs
use crate::domain::training_model::{self, Entity as Training};
use crate::domain::training_participant_model::{self, Entity as TrainingParticipant};
use sea_orm::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, QueryOrder, Set};

pub struct TrainingRepository;

impl TrainingRepository {
    /// 日付の新しい順、同日なら時刻の遅い順
    pub async fn find_all<C: ConnectionTrait>(
        db: &C,
    ) -> Result<Vec<training_model::Model>, DbErr> {
        Training::find()
            .order_by_desc(training_model::Column::TrainingDate)
            .order_by_desc(training_model::Column::TrainingTime)
            .all(db)
            .await
    }

    pub async fn find_by_id<C: ConnectionTrait>(
        db: &C,
        id: Uuid,
    ) -> Result<Option<training_model::Model>, DbErr> {
        Training::find_by_id(id).one(db).await
    }

    pub async fn create<C: ConnectionTrait>(
        db: &C,
        active_model: training_model::ActiveModel,
    ) -> Result<training_model::Model, DbErr> {
        active_model.insert(db).await
    }

    pub async fn delete_by_id<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<u64, DbErr> {
        let result = Training::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected)
    }

    pub async fn insert_participants<C: ConnectionTrait>(
        db: &C,
        training_id: Uuid,
        names: Vec<String>,
    ) -> Result<usize, DbErr> {
        if names.is_empty() {
            return Ok(0);
        }
        let count = names.len();
        let models = names
            .into_iter()
            .map(|name| training_participant_model::ActiveModel {
                training_id: Set(training_id),
                participant_name: Set(name),
                ..training_participant_model::ActiveModel::new()
            });
        TrainingParticipant::insert_many(models).exec(db).await?;
        Ok(count)
    }

    /// 参加者名 (名前順)
    pub async fn find_participant_names<C: ConnectionTrait>(
        db: &C,
        training_id: Uuid,
    ) -> Result<Vec<String>, DbErr> {
        let rows = TrainingParticipant::find()
            .filter(training_participant_model::Column::TrainingId.eq(training_id))
            .order_by_asc(training_participant_model::Column::ParticipantName)
            .all(db)
            .await?;
        Ok(rows.into_iter().map(|p| p.participant_name).collect())
    }
}

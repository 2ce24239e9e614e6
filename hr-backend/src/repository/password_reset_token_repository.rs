// src/repository/password_reset_token_repository.rs
use crate::domain::password_reset_token_model::{self, Entity as PasswordResetToken};
use chrono::{DateTime, Utc};
use sea_orm::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};

pub struct PasswordResetTokenRepository;

impl PasswordResetTokenRepository {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        user_id: Uuid,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<password_reset_token_model::Model, DbErr> {
        let active_model = password_reset_token_model::ActiveModel {
            user_id: Set(user_id),
            token_hash: Set(token_hash),
            expires_at: Set(expires_at),
            ..password_reset_token_model::ActiveModel::new()
        };
        active_model.insert(db).await
    }

    pub async fn find_by_token_hash<C: ConnectionTrait>(
        db: &C,
        token_hash: &str,
    ) -> Result<Option<password_reset_token_model::Model>, DbErr> {
        PasswordResetToken::find()
            .filter(password_reset_token_model::Column::TokenHash.eq(token_hash))
            .one(db)
            .await
    }

    /// 未使用のトークンを使用済みにする。既に使われていれば 0 を返す
    pub async fn mark_used<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<u64, DbErr> {
        let result = PasswordResetToken::update_many()
            .col_expr(password_reset_token_model::Column::IsUsed, Expr::value(true))
            .filter(password_reset_token_model::Column::Id.eq(id))
            .filter(password_reset_token_model::Column::IsUsed.eq(false))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }
}

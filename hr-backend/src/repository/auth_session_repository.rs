// src/repository/auth_session_repository.rs
use crate::domain::auth_session_model::{self, Entity as AuthSession};
use chrono::{DateTime, Utc};
use sea_orm::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};

pub struct AuthSessionRepository;

impl AuthSessionRepository {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        user_id: Uuid,
        refresh_token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<auth_session_model::Model, DbErr> {
        let active_model = auth_session_model::ActiveModel {
            user_id: Set(user_id),
            refresh_token_hash: Set(refresh_token_hash),
            expires_at: Set(expires_at),
            revoked_at: Set(None),
            ..auth_session_model::ActiveModel::new()
        };
        active_model.insert(db).await
    }

    pub async fn find_by_id<C: ConnectionTrait>(
        db: &C,
        id: Uuid,
    ) -> Result<Option<auth_session_model::Model>, DbErr> {
        AuthSession::find_by_id(id).one(db).await
    }

    pub async fn find_by_token_hash<C: ConnectionTrait>(
        db: &C,
        refresh_token_hash: &str,
    ) -> Result<Option<auth_session_model::Model>, DbErr> {
        AuthSession::find()
            .filter(auth_session_model::Column::RefreshTokenHash.eq(refresh_token_hash))
            .one(db)
            .await
    }

    /// 未失効のセッションだけを失効させる
    pub async fn revoke<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<u64, DbErr> {
        let result = AuthSession::update_many()
            .col_expr(auth_session_model::Column::RevokedAt, Expr::value(Some(Utc::now())))
            .filter(auth_session_model::Column::Id.eq(id))
            .filter(auth_session_model::Column::RevokedAt.is_null())
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn revoke_all_for_user<C: ConnectionTrait>(
        db: &C,
        user_id: Uuid,
    ) -> Result<u64, DbErr> {
        let result = AuthSession::update_many()
            .col_expr(auth_session_model::Column::RevokedAt, Expr::value(Some(Utc::now())))
            .filter(auth_session_model::Column::UserId.eq(user_id))
            .filter(auth_session_model::Column::RevokedAt.is_null())
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }

    /// リフレッシュトークンの付け替え (同じセッションIDのまま)
    pub async fn rotate<C: ConnectionTrait>(
        db: &C,
        session: auth_session_model::Model,
        refresh_token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<auth_session_model::Model, DbErr> {
        let mut active_model: auth_session_model::ActiveModel = session.into();
        active_model.refresh_token_hash = Set(refresh_token_hash);
        active_model.expires_at = Set(expires_at);
        active_model.update(db).await
    }
}

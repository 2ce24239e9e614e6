// src/repository/user_repository.rs
use crate::domain::user_model::{self, Entity as User};
use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};

pub struct UserRepository;

impl UserRepository {
    pub async fn find_by_id<C: ConnectionTrait>(
        db: &C,
        id: Uuid,
    ) -> Result<Option<user_model::Model>, DbErr> {
        User::find_by_id(id).one(db).await
    }

    /// メールアドレスは小文字で保存しているため、呼び出し側で正規化済みであること
    pub async fn find_by_email<C: ConnectionTrait>(
        db: &C,
        email: &str,
    ) -> Result<Option<user_model::Model>, DbErr> {
        User::find()
            .filter(user_model::Column::Email.eq(email))
            .one(db)
            .await
    }

    pub async fn create<C: ConnectionTrait>(
        db: &C,
        email: String,
        password_hash: String,
    ) -> Result<user_model::Model, DbErr> {
        let active_model = user_model::ActiveModel {
            email: Set(email),
            password_hash: Set(password_hash),
            last_sign_in_at: Set(None),
            ..user_model::ActiveModel::new()
        };
        active_model.insert(db).await
    }

    pub async fn update_password_hash<C: ConnectionTrait>(
        db: &C,
        id: Uuid,
        password_hash: String,
    ) -> Result<u64, DbErr> {
        let result = User::update_many()
            .col_expr(user_model::Column::PasswordHash, Expr::value(password_hash))
            .col_expr(user_model::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(user_model::Column::Id.eq(id))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn touch_last_sign_in<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<(), DbErr> {
        User::update_many()
            .col_expr(user_model::Column::LastSignInAt, Expr::value(Some(Utc::now())))
            .filter(user_model::Column::Id.eq(id))
            .exec(db)
            .await?;
        Ok(())
    }
}

// src/console/mod.rs

//! 管理画面の状態遷移
//!
//! 描画は持たず、各画面の状態と入力の解釈だけを扱う。永続化が必要な操作は
//! サービス層に渡すリクエスト DTO を返す。

pub mod app_shell;
pub mod dashboard_tabs;
pub mod department_view;
pub mod meeting_board;
pub mod skill_matrix;
pub mod training_chart;
pub mod training_plan_grid;

use thiserror::Error;

/// フォーム入力の検証エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Invalid {field}: '{value}'")]
    Invalid { field: &'static str, value: String },
}

/// 空白を除いて空なら `Required`
pub(crate) fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(value.to_string())
}

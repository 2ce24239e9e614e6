// src/utils/validation/common.rs

//! DTO 間で共有するバリデーション定数とカスタム検証関数

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::domain::month::PlanMonth;

/// 部署の制約
pub mod department {
    pub const NAME_MIN_LENGTH: u64 = 1;
    pub const NAME_MAX_LENGTH: u64 = 100;
}

/// 社員の制約
pub mod employee {
    pub const NAME_MAX_LENGTH: u64 = 100;
    pub const CODE_MAX_LENGTH: u64 = 50;
    pub const POSITION_MAX_LENGTH: u64 = 100;
}

/// スキルの制約
pub mod skill {
    pub const NAME_MAX_LENGTH: u64 = 200;
}

/// 研修の制約
pub mod training {
    pub const TITLE_MAX_LENGTH: u64 = 200;
    pub const DESCRIPTION_MAX_LENGTH: u64 = 2000;
    pub const LOCATION_MAX_LENGTH: u64 = 200;
    pub const ORGANIZER_MAX_LENGTH: u64 = 100;
    pub const DURATION_MIN_MINUTES: i32 = 1;
    pub const DURATION_MAX_MINUTES: i32 = 24 * 60;
    pub const TOPIC_MAX_LENGTH: u64 = 200;
}

/// パスワードの制約 (サインアップ画面と同じ6文字以上)
pub mod password {
    pub const MIN_LENGTH: u64 = 6;
    pub const MAX_LENGTH: u64 = 128;
}

/// 必須フィールドの制約
pub mod required {
    pub const MIN_LENGTH: u64 = 1;
}

/// 簡易的なメールアドレス形式
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid email regex")
});

/// 空白だけの入力を拒否する
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Must not be blank".into());
        return Err(error);
    }
    Ok(())
}

pub fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_REGEX.is_match(email.trim()) {
        let mut error = ValidationError::new("invalid_email");
        error.message = Some("Invalid email format".into());
        return Err(error);
    }
    Ok(())
}

/// `Apr-25` 形式の月ラベル列
pub fn validate_plan_month_labels(labels: &[String]) -> Result<(), ValidationError> {
    if let Some(bad) = labels.iter().find(|l| PlanMonth::parse(l).is_none()) {
        let mut error = ValidationError::new("invalid_month_label");
        error.message = Some(format!("Invalid month label '{}', expected Mon-YY", bad).into());
        return Err(error);
    }
    Ok(())
}

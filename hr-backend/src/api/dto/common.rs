// src/api/dto/common.rs

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize};

/// 削除などの結果だけを返す操作のレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult {
    pub id: uuid::Uuid,
    pub message: String,
}

impl OperationResult {
    pub fn deleted(id: uuid::Uuid, what: &str) -> Self {
        Self {
            id,
            message: format!("{} deleted successfully", what),
        }
    }
}

/// `HH:MM` と `HH:MM:SS` のどちらも受け付ける (time 入力欄は秒を送らない)
pub fn deserialize_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_time(&raw).ok_or_else(|| serde::de::Error::custom(format!("Invalid time '{}'", raw)))
}

pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

/// 前後の空白を除いた文字列 (空なら None)
pub fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// src/console/meeting_board.rs

use super::{required, FormError};
use crate::api::dto::common::parse_time;
use crate::api::dto::training_dto::{CreateTrainingRequest, TrainingDto};
use crate::domain::training_type::TrainingType;
use crate::service::training_service::DEFAULT_DURATION_MINUTES;
use chrono::{Duration, NaiveDate, NaiveTime};

/// 直近の予定として表示する件数
pub const UPCOMING_LIMIT: usize = 5;

/// 指定日の研修
pub fn trainings_on(trainings: &[TrainingDto], date: NaiveDate) -> Vec<&TrainingDto> {
    trainings
        .iter()
        .filter(|t| t.training_date == date)
        .collect()
}

/// 今日以降の研修を日時順に最大5件
pub fn upcoming(trainings: &[TrainingDto], today: NaiveDate) -> Vec<&TrainingDto> {
    let mut upcoming: Vec<&TrainingDto> = trainings
        .iter()
        .filter(|t| t.training_date >= today)
        .collect();
    upcoming.sort_by_key(|t| (t.training_date, t.training_time));
    upcoming.truncate(UPCOMING_LIMIT);
    upcoming
}

/// `09:00 - 09:30` 形式の時間帯
pub fn time_range(start: NaiveTime, duration_minutes: i32) -> String {
    let end = start + Duration::minutes(i64::from(duration_minutes));
    format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"))
}

/// 研修登録フォーム (入力欄の文字列のまま保持する)
#[derive(Debug, Clone, Default)]
pub struct ScheduleForm {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub duration: String,
    /// カンマ区切り
    pub participants: String,
    pub location: String,
    pub training_type: TrainingType,
}

impl ScheduleForm {
    /// タイトル・日付・時刻は必須。所要時間は読めなければ60分
    pub fn to_request(&self, organizer: &str) -> Result<CreateTrainingRequest, FormError> {
        let title = required(&self.title, "Title")?;
        let date = required(&self.date, "Date")?;
        let time = required(&self.time, "Time")?;

        let training_date =
            NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|_| FormError::Invalid {
                field: "date",
                value: date.clone(),
            })?;
        let training_time = parse_time(&time).ok_or_else(|| FormError::Invalid {
            field: "time",
            value: time.clone(),
        })?;
        let duration = self
            .duration
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|d| *d > 0)
            .unwrap_or(DEFAULT_DURATION_MINUTES);

        let participants = self
            .participants
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        Ok(CreateTrainingRequest {
            title,
            description: Some(self.description.trim().to_string()),
            training_date,
            training_time,
            duration: Some(duration),
            location: Some(self.location.trim().to_string()),
            organizer: Some(organizer.to_string()),
            training_type: Some(self.training_type),
            participants,
        })
    }
}

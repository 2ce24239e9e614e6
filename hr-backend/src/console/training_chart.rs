// src/console/training_chart.rs

use crate::api::dto::training_data_dto::{MonthRowRequest, SaveYearRequest, TrainingDataDto};
use crate::domain::month::ShortMonth;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartRow {
    pub month: ShortMonth,
    pub planned: i32,
    pub done: i32,
    pub pending: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Planned,
    Done,
    Pending,
}

/// データがないときに表示する既定値
const DEFAULT_ROWS: [(i32, i32, i32); 12] = [
    (12, 8, 4),
    (15, 12, 3),
    (18, 15, 3),
    (22, 18, 4),
    (25, 20, 5),
    (20, 18, 2),
    (28, 22, 6),
    (30, 25, 5),
    (24, 20, 4),
    (26, 22, 4),
    (32, 28, 4),
    (28, 24, 4),
];

pub fn default_rows() -> Vec<ChartRow> {
    ShortMonth::ALL
        .iter()
        .zip(DEFAULT_ROWS)
        .map(|(month, (planned, done, pending))| ChartRow {
            month: *month,
            planned,
            done,
            pending,
        })
        .collect()
}

/// 入力欄の文字列を件数として読む
///
/// 先頭の数字だけを使い、読めない値と負の値は 0 とする。
pub fn parse_count(raw: &str) -> i32 {
    let digits: String = raw
        .trim()
        .trim_start_matches('+')
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

#[derive(Debug, Clone)]
pub struct TrainingChart {
    year: i32,
    rows: Vec<ChartRow>,
    editing: Option<Vec<ChartRow>>,
}

impl TrainingChart {
    /// 保存済みデータがなければ既定値を表示する
    pub fn new(year: i32, data: &[TrainingDataDto]) -> Self {
        let rows: Vec<ChartRow> = data
            .iter()
            .filter_map(|d| {
                ShortMonth::from_str(&d.month).map(|month| ChartRow {
                    month,
                    planned: d.planned,
                    done: d.done,
                    pending: d.pending,
                })
            })
            .collect();
        Self {
            year,
            rows: if rows.is_empty() { default_rows() } else { rows },
            editing: None,
        }
    }

    pub fn rows(&self) -> &[ChartRow] {
        &self.rows
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// ツールチップの見出し (例: `Mar 2025`)
    pub fn tooltip_label(&self, month: ShortMonth) -> String {
        format!("{} {}", month, self.year)
    }

    pub fn start_edit(&mut self) {
        self.editing = Some(self.rows.clone());
    }

    pub fn edited_rows(&self) -> Option<&[ChartRow]> {
        self.editing.as_deref()
    }

    /// 編集中でなければ何もしない
    pub fn set_value(&mut self, index: usize, counter: Counter, raw: &str) {
        let Some(row) = self.editing.as_mut().and_then(|rows| rows.get_mut(index)) else {
            return;
        };
        let value = parse_count(raw);
        match counter {
            Counter::Planned => row.planned = value,
            Counter::Done => row.done = value,
            Counter::Pending => row.pending = value,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// 編集内容を確定し、一括保存のリクエストを返す
    pub fn save(&mut self) -> Option<SaveYearRequest> {
        let rows = self.editing.take()?;
        let request = SaveYearRequest {
            months: rows
                .iter()
                .map(|row| MonthRowRequest {
                    month: row.month.to_string(),
                    planned: row.planned,
                    done: row.done,
                    pending: row.pending,
                })
                .collect(),
        };
        self.rows = rows;
        Some(request)
    }
}

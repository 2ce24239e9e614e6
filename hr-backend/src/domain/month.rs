// src/domain/month.rs

//! 月の表現
//!
//! 月次集計は `Jan`〜`Dec` の短縮名、研修計画は `Apr-25` 形式のラベルを使う。
//! 並び順はどちらも文字列ではなく暦順で決める。

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShortMonth {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl ShortMonth {
    pub const ALL: [ShortMonth; 12] = [
        Self::Jan,
        Self::Feb,
        Self::Mar,
        Self::Apr,
        Self::May,
        Self::Jun,
        Self::Jul,
        Self::Aug,
        Self::Sep,
        Self::Oct,
        Self::Nov,
        Self::Dec,
    ];

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jan => "Jan",
            Self::Feb => "Feb",
            Self::Mar => "Mar",
            Self::Apr => "Apr",
            Self::May => "May",
            Self::Jun => "Jun",
            Self::Jul => "Jul",
            Self::Aug => "Aug",
            Self::Sep => "Sep",
            Self::Oct => "Oct",
            Self::Nov => "Nov",
            Self::Dec => "Dec",
        }
    }

    /// 1始まりの月番号
    pub fn index(&self) -> i16 {
        *self as i16 + 1
    }

    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            1..=12 => Some(Self::ALL[(index - 1) as usize]),
            _ => None,
        }
    }

    pub fn of_date(date: NaiveDate) -> Self {
        // month0() は常に 0..=11
        Self::ALL[date.month0() as usize]
    }
}

impl fmt::Display for ShortMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ShortMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid month: '{}'. Expected Jan..Dec", s))
    }
}

/// 研修計画の月ラベル (`Apr-25`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanMonth {
    pub month: ShortMonth,
    /// 西暦 (4桁)
    pub year: i32,
}

impl PlanMonth {
    pub fn new(month: ShortMonth, year: i32) -> Self {
        Self { month, year }
    }

    /// `Mon-YY` を解釈する。年は 2000 年代とみなす
    pub fn parse(label: &str) -> Option<Self> {
        let (month, year) = label.trim().split_once('-')?;
        let month = ShortMonth::from_str(month)?;
        if year.len() != 2 || !year.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let yy: i32 = year.parse().ok()?;
        Some(Self::new(month, 2000 + yy))
    }

    pub fn label(&self) -> String {
        format!("{}-{:02}", self.month.as_str(), self.year.rem_euclid(100))
    }

    /// 年度 (4月始まり) の12か月を暦順で返す
    pub fn fiscal_year(start_year: i32) -> Vec<Self> {
        (0..12)
            .map(|offset| {
                let month = ShortMonth::ALL[(3 + offset) % 12];
                let year = if month >= ShortMonth::Apr {
                    start_year
                } else {
                    start_year + 1
                };
                Self::new(month, year)
            })
            .collect()
    }

    /// 日付が属する年度の開始年
    pub fn fiscal_start_year(date: NaiveDate) -> i32 {
        if date.month() >= 4 {
            date.year()
        } else {
            date.year() - 1
        }
    }
}

impl PartialOrd for PlanMonth {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PlanMonth {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl fmt::Display for PlanMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// ラベル列を検証し、重複を除いて暦順に並べ直す
///
/// 解釈できないラベルがあれば、そのラベルを `Err` で返す。
pub fn normalize_plan_months(labels: &[String]) -> Result<Vec<String>, String> {
    let mut months = labels
        .iter()
        .map(|label| PlanMonth::parse(label).ok_or_else(|| label.clone()))
        .collect::<Result<Vec<_>, _>>()?;
    months.sort();
    months.dedup();
    Ok(months.iter().map(PlanMonth::label).collect())
}

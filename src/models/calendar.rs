use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::weekday::Weekday;

/// Resolved working status of a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Listed as an extra working day, overrides everything else.
    SpecialWorking,
    /// Listed as a company-wide holiday.
    SpecialHoliday,
    /// Falls on a recurring weekly holiday.
    WeeklyHoliday,
    /// Ordinary business day.
    NormalWorking,
}

impl DayStatus {
    pub fn label_ja(self) -> &'static str {
        match self {
            DayStatus::SpecialWorking => "特別出勤",
            DayStatus::SpecialHoliday => "特別休業",
            DayStatus::WeeklyHoliday => "定休日",
            DayStatus::NormalWorking => "営業日",
        }
    }

    pub fn is_working(self) -> bool {
        matches!(self, DayStatus::SpecialWorking | DayStatus::NormalWorking)
    }
}

/// Company calendar: recurring weekly holidays plus date-level exceptions.
/// An absent or unreadable calendar file acts as this type's default, every
/// day a normal working day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CompanyCalendar {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub weekly_holidays: BTreeSet<Weekday>,
    #[serde(default)]
    pub special_holidays: BTreeSet<NaiveDate>,
    #[serde(default)]
    pub working_days: BTreeSet<NaiveDate>,
}

impl CompanyCalendar {
    /// Consistency warnings for the editor. A date in both exception lists
    /// is legal and resolves as special working, but usually means a typo.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for date in self.working_days.intersection(&self.special_holidays) {
            warnings.push(format!(
                "{} は特別出勤日と特別休業日の両方に指定されています（特別出勤が優先されます）",
                date.format("%Y-%m-%d")
            ));
        }
        warnings
    }
}

/// Simplified fixed-date national holiday table, used by calendar tooling to
/// suggest special holidays. Movable holidays are approximated.
pub fn japanese_holidays(year: i32) -> Vec<(NaiveDate, &'static str)> {
    const FIXED: [(u32, u32, &str); 16] = [
        (1, 1, "元日"),
        (1, 8, "成人の日"),
        (2, 11, "建国記念の日"),
        (2, 23, "天皇誕生日"),
        (3, 20, "春分の日"),
        (4, 29, "昭和の日"),
        (5, 3, "憲法記念日"),
        (5, 4, "みどりの日"),
        (5, 5, "こどもの日"),
        (7, 15, "海の日"),
        (8, 11, "山の日"),
        (9, 16, "敬老の日"),
        (9, 23, "秋分の日"),
        (10, 14, "スポーツの日"),
        (11, 3, "文化の日"),
        (11, 23, "勤労感謝の日"),
    ];

    FIXED
        .iter()
        .filter_map(|&(month, day, name)| {
            NaiveDate::from_ymd_opt(year, month, day).map(|date| (date, name))
        })
        .collect()
}

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::calendar::{CompanyCalendar, DayStatus};
use crate::models::weekday::Weekday;

/// Resolve the working status of one date.
///
/// Precedence is fixed: an extra working day beats a special holiday, which
/// beats the recurring weekly holiday, and anything unlisted is a normal
/// working day. A date listed as both exception kinds therefore counts as
/// special working.
pub fn day_status(date: NaiveDate, calendar: &CompanyCalendar) -> DayStatus {
    if calendar.working_days.contains(&date) {
        return DayStatus::SpecialWorking;
    }
    if calendar.special_holidays.contains(&date) {
        return DayStatus::SpecialHoliday;
    }
    if calendar.weekly_holidays.contains(&Weekday::from_date(date)) {
        return DayStatus::WeeklyHoliday;
    }
    DayStatus::NormalWorking
}

/// Status for seven consecutive days starting at `start`. The caller picks
/// the start; no snapping happens here.
pub fn week_status(start: NaiveDate, calendar: &CompanyCalendar) -> Vec<(NaiveDate, DayStatus)> {
    (0..7)
        .map(|offset| {
            let date = start + Days::new(offset);
            (date, day_status(date, calendar))
        })
        .collect()
}

/// One row of the week header shown above a generated schedule.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayOverview {
    pub date: NaiveDate,
    /// "6月9日" style, no zero padding.
    pub display: String,
    /// Single-character weekday label, 月 through 日.
    pub day_label: String,
    pub weekday: Weekday,
    pub status: DayStatus,
    pub status_label: String,
    pub is_working: bool,
}

/// Display rows for seven consecutive days starting at `start`.
pub fn week_overview(start: NaiveDate, calendar: &CompanyCalendar) -> Vec<DayOverview> {
    week_status(start, calendar)
        .into_iter()
        .map(|(date, status)| DayOverview {
            date,
            display: date.format("%-m月%-d日").to_string(),
            day_label: Weekday::from_date(date).label_ja().to_string(),
            weekday: Weekday::from_date(date),
            status,
            status_label: status.label_ja().to_string(),
            is_working: status.is_working(),
        })
        .collect()
}

/// Parse a newline-separated date list as entered in the calendar editor.
/// Lines are trimmed, blank lines skipped, and any line that is not a
/// `YYYY-MM-DD` date rejects the whole input.
pub fn parse_date_list(text: &str) -> AppResult<BTreeSet<NaiveDate>> {
    let mut dates = BTreeSet::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let date = NaiveDate::parse_from_str(line, "%Y-%m-%d")
            .map_err(|_| AppError::invalid_input(format!("日付の形式が正しくありません: {}", line)))?;
        dates.insert(date);
    }
    Ok(dates)
}

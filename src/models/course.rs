use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::weekday::Weekday;

/// Course catalog entry as stored per weekday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogCourse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub vehicle_id: Option<String>,
}

/// Full catalog: lowercase weekday key, courses offered on that day.
pub type CourseCatalog = BTreeMap<Weekday, Vec<CatalogCourse>>;

/// Classified course value. The persisted form stays a plain string; this
/// enum exists so the generator branches on meaning instead of comparing
/// magic strings, and converts back to the display string at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseLabel {
    /// "-": no assignment for the day.
    NoAssignment,
    /// "公休": scheduled day off.
    PublicHoliday,
    /// "有給": paid leave.
    PaidLeave,
    /// "同乗": riding along on another driver's route.
    RideAlong,
    /// "その他": unspecified duty.
    Other,
    /// Any real course name, including the empty string for unset values.
    Named(String),
}

impl CourseLabel {
    pub fn from_name(name: &str) -> Self {
        match name {
            "-" => CourseLabel::NoAssignment,
            "公休" => CourseLabel::PublicHoliday,
            "有給" => CourseLabel::PaidLeave,
            "同乗" => CourseLabel::RideAlong,
            "その他" => CourseLabel::Other,
            other => CourseLabel::Named(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CourseLabel::NoAssignment => "-",
            CourseLabel::PublicHoliday => "公休",
            CourseLabel::PaidLeave => "有給",
            CourseLabel::RideAlong => "同乗",
            CourseLabel::Other => "その他",
            CourseLabel::Named(name) => name,
        }
    }

    /// Values the normalizer passes through untouched: every status marker
    /// plus the empty string.
    pub fn is_sentinel(&self) -> bool {
        match self {
            CourseLabel::Named(name) => name.is_empty(),
            _ => true,
        }
    }

    /// Whether a course name may enter the vehicle binding table. Only the
    /// explicit no-assignment marker and the empty string are skipped.
    pub fn is_bindable(&self) -> bool {
        match self {
            CourseLabel::NoAssignment => false,
            CourseLabel::Named(name) => !name.is_empty(),
            _ => true,
        }
    }

    /// Whether an assignment with this course competes for a vehicle.
    /// Days off, paid leave and blank assignments never conflict; ride-along
    /// and "other" duties do, since they still occupy the vehicle.
    pub fn counts_for_conflicts(&self) -> bool {
        match self {
            CourseLabel::NoAssignment | CourseLabel::PublicHoliday | CourseLabel::PaidLeave => {
                false
            }
            CourseLabel::RideAlong | CourseLabel::Other => true,
            CourseLabel::Named(name) => !name.is_empty(),
        }
    }
}

impl fmt::Display for CourseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

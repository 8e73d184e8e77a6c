use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::weekday::Weekday;

/// One cell of a driver's weekly template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CourseAssignment {
    #[serde(default)]
    pub course: Option<String>,
}

/// A driver's default course per weekday. Missing days fall back to the
/// no-assignment marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WeeklyCourses {
    #[serde(default)]
    pub monday: CourseAssignment,
    #[serde(default)]
    pub tuesday: CourseAssignment,
    #[serde(default)]
    pub wednesday: CourseAssignment,
    #[serde(default)]
    pub thursday: CourseAssignment,
    #[serde(default)]
    pub friday: CourseAssignment,
    #[serde(default)]
    pub saturday: CourseAssignment,
    #[serde(default)]
    pub sunday: CourseAssignment,
}

impl WeeklyCourses {
    pub fn get(&self, day: Weekday) -> &CourseAssignment {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    /// Template course for the day, `-` when nothing is set.
    pub fn course_for(&self, day: Weekday) -> &str {
        self.get(day).course.as_deref().unwrap_or("-")
    }
}

/// Roster entry. Flags tolerate the legacy integer form (`1`/`0`) alongside
/// booleans, an explicit `is_active: null` counts as active like the missing
/// field, and `personal_id` tolerates a bare number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DriverRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "de_string_or_number")]
    pub personal_id: String,
    #[serde(default = "default_true", deserialize_with = "de_active_flag")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "de_flag")]
    pub is_deleted: bool,
    #[serde(default)]
    pub courses: WeeklyCourses,
}

impl DriverRecord {
    /// Drivers the generator considers: not deleted and marked active.
    pub fn is_schedulable(&self) -> bool {
        self.is_active && !self.is_deleted
    }

    /// Numeric sort key; non-numeric ids sort as zero.
    pub fn personal_id_value(&self) -> f64 {
        self.personal_id.trim().parse::<f64>().unwrap_or(0.0)
    }

    /// Name for conflict rows and listings; records saved without one get a
    /// placeholder instead of an empty cell.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "名前未設定"
        } else {
            &self.name
        }
    }
}

/// Roster keyed by driver id.
pub type DriverRoster = BTreeMap<String, DriverRecord>;

/// Schedulable drivers in ascending numeric `personal_id` order, ties broken
/// by driver id. This is the iteration order of every weekly generation.
pub fn ordered_active(roster: &DriverRoster) -> Vec<&DriverRecord> {
    let mut drivers: Vec<&DriverRecord> = roster
        .values()
        .filter(|driver| driver.is_schedulable())
        .collect();
    drivers.sort_by(|a, b| {
        a.personal_id_value()
            .total_cmp(&b.personal_id_value())
            .then_with(|| a.id.cmp(&b.id))
    });
    drivers
}

fn default_true() -> bool {
    true
}

fn de_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_flag(deserializer, false)
}

/// Like `de_flag`, but an explicit null keeps the record active, the same as
/// leaving the field out entirely.
fn de_active_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_flag(deserializer, true)
}

fn deserialize_flag<'de, D>(deserializer: D, null_value: bool) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlagVisitor {
        null_value: bool,
    }

    impl<'de> Visitor<'de> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean or 0/1 flag")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<bool, E> {
            Ok(value != 0)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<bool, E> {
            Ok(value != 0)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<bool, E> {
            Ok(!matches!(value, "" | "0"))
        }

        fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
            Ok(self.null_value)
        }
    }

    deserializer.deserialize_any(FlagVisitor { null_value })
}

fn de_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrNumberVisitor;

    impl<'de> Visitor<'de> for StringOrNumberVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(StringOrNumberVisitor)
}

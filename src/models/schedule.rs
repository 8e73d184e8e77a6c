use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// One generated cell: what a driver does on a date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ScheduleEntry {
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub vehicle: String,
    #[serde(default)]
    pub note: String,
}

/// Seven dated entries for one driver.
pub type DriverWeek = BTreeMap<NaiveDate, ScheduleEntry>;

/// Full schedule keyed by driver id, then date.
pub type Schedule = BTreeMap<String, DriverWeek>;

/// One driver's claim on a contested vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConflictEntry {
    pub driver_name: String,
    pub course: String,
    pub vehicle: String,
}

/// All drivers assigned the same plate on the same date.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictGroup {
    pub date: NaiveDate,
    pub plate: String,
    pub entries: Vec<ConflictEntry>,
}

impl ConflictGroup {
    /// Wire key, `<date>_<plate>`.
    pub fn key(&self) -> String {
        format!("{}_{}", self.date.format("%Y-%m-%d"), self.plate)
    }
}

/// Conflict groups in detection order. Serializes as an object keyed by
/// `<date>_<plate>`, preserving the order groups were recorded in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConflictSet {
    groups: Vec<ConflictGroup>,
}

impl ConflictSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, group: ConflictGroup) {
        self.groups.push(group);
    }

    /// Append one claim to the group for `(date, plate)`, creating the group
    /// at the end of the set on first sight. Group order is first-claim order.
    pub fn record(&mut self, date: NaiveDate, plate: &str, entry: ConflictEntry) {
        if let Some(group) = self
            .groups
            .iter_mut()
            .find(|group| group.date == date && group.plate == plate)
        {
            group.entries.push(entry);
            return;
        }
        self.groups.push(ConflictGroup {
            date,
            plate: plate.to_string(),
            entries: vec![entry],
        });
    }

    pub fn get(&self, date: NaiveDate, plate: &str) -> Option<&ConflictGroup> {
        self.groups
            .iter()
            .find(|group| group.date == date && group.plate == plate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConflictGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Drop every group that is not an actual collision, keeping only plates
    /// claimed by two or more drivers on the same date.
    pub fn retain_collisions(&mut self) {
        self.groups.retain(|group| group.entries.len() > 1);
    }
}

impl IntoIterator for ConflictSet {
    type Item = ConflictGroup;
    type IntoIter = std::vec::IntoIter<ConflictGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl Serialize for ConflictSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.key(), &group.entries)?;
        }
        map.end()
    }
}

struct ConflictSetVisitor;

impl<'de> Visitor<'de> for ConflictSetVisitor {
    type Value = ConflictSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object keyed by \"<date>_<plate>\"")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut set = ConflictSet::new();
        while let Some((key, entries)) = map.next_entry::<String, Vec<ConflictEntry>>()? {
            let (date, plate) = parse_conflict_key(&key)
                .ok_or_else(|| de::Error::custom(format!("invalid conflict key: {key}")))?;
            set.push(ConflictGroup {
                date,
                plate,
                entries,
            });
        }
        Ok(set)
    }
}

impl<'de> Deserialize<'de> for ConflictSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ConflictSetVisitor)
    }
}

// The date part is always 10 ASCII characters, so the first underscore after
// it splits date from plate even when the plate itself contains underscores.
fn parse_conflict_key(key: &str) -> Option<(NaiveDate, String)> {
    if key.len() < 11 || !key.is_char_boundary(10) {
        return None;
    }
    let (date_part, rest) = key.split_at(10);
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
    let plate = rest.strip_prefix('_')?;
    Some((date, plate.to_string()))
}

/// Output of one weekly generation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GenerationResult {
    pub schedule: Schedule,
    pub conflicts: ConflictSet,
}

/// Fold a generated week into an existing schedule. Only the dates present
/// in `generated` are touched; entries for other weeks survive.
pub fn merge_week(stored: &mut Schedule, generated: &Schedule) {
    for (driver_id, week) in generated {
        let target = stored.entry(driver_id.clone()).or_default();
        for (date, entry) in week {
            target.insert(*date, entry.clone());
        }
    }
}

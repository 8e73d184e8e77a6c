use tracing::info;

use crate::error::AppResult;
use crate::models::schedule::{merge_week, Schedule};
use crate::store::JsonStore;

pub const SCHEDULE_FILE: &str = "schedule.json";

pub struct ScheduleStore;

impl ScheduleStore {
    pub fn load(store: &JsonStore) -> Schedule {
        store.read_or_default(SCHEDULE_FILE)
    }

    /// Replace the stored schedule wholesale with `schedule`.
    pub fn save(store: &JsonStore, schedule: &Schedule) -> AppResult<()> {
        store.write_atomic(SCHEDULE_FILE, schedule)
    }

    /// Commit one generated week: merge it over the stored schedule and
    /// persist the result. Entries outside the generated dates survive.
    pub fn commit_week(store: &JsonStore, generated: &Schedule) -> AppResult<Schedule> {
        let mut stored = Self::load(store);
        merge_week(&mut stored, generated);
        Self::save(store, &stored)?;
        info!(
            target: "app::store",
            drivers = generated.len(),
            "generated week committed to schedule"
        );
        Ok(stored)
    }
}

use tracing::info;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::driver::DriverRoster;
use crate::store::JsonStore;

pub const DRIVERS_FILE: &str = "drivers.json";

pub struct DriverStore;

impl DriverStore {
    /// Load the roster, repairing identity as needed: a record under an
    /// empty key gets a fresh generated id, and a record whose `id` field
    /// disagrees with its key is re-stamped with the key. Repairs are
    /// written back immediately so the next load is clean.
    pub fn load(store: &JsonStore) -> AppResult<DriverRoster> {
        let raw: DriverRoster = store.read_or_default(DRIVERS_FILE);

        let mut roster = DriverRoster::new();
        let mut repairs = 0usize;
        for (key, mut record) in raw {
            if key.is_empty() {
                let new_id = format!("driver_repair_{}", Uuid::new_v4().simple());
                record.id = new_id.clone();
                roster.insert(new_id, record);
                repairs += 1;
            } else {
                if record.id != key {
                    record.id = key.clone();
                    repairs += 1;
                }
                roster.insert(key, record);
            }
        }

        if repairs > 0 {
            info!(target: "app::store", repairs, "driver ids repaired, writing roster back");
            Self::save(store, &roster)?;
        }
        Ok(roster)
    }

    pub fn save(store: &JsonStore, roster: &DriverRoster) -> AppResult<()> {
        store.write_atomic(DRIVERS_FILE, roster)
    }
}

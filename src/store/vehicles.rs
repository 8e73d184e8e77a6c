use crate::error::AppResult;
use crate::models::vehicle::VehicleTable;
use crate::store::JsonStore;

pub const VEHICLES_FILE: &str = "vehicles.json";

pub struct VehicleStore;

impl VehicleStore {
    pub fn load(store: &JsonStore) -> VehicleTable {
        store.read_or_default(VEHICLES_FILE)
    }

    pub fn save(store: &JsonStore, vehicles: &VehicleTable) -> AppResult<()> {
        store.write_atomic(VEHICLES_FILE, vehicles)
    }
}

use crate::error::AppResult;
use crate::models::course::CourseCatalog;
use crate::store::JsonStore;

pub const COURSES_FILE: &str = "courses.json";

pub struct CourseStore;

impl CourseStore {
    /// Missing or unreadable catalog loads as empty: no courses, no
    /// bindings, every template name resolves to no vehicle.
    pub fn load(store: &JsonStore) -> CourseCatalog {
        store.read_or_default(COURSES_FILE)
    }

    pub fn save(store: &JsonStore, catalog: &CourseCatalog) -> AppResult<()> {
        store.write_atomic(COURSES_FILE, catalog)
    }
}

use tracing::warn;

use crate::error::AppResult;
use crate::models::calendar::CompanyCalendar;
use crate::store::JsonStore;

pub const CALENDAR_FILE: &str = "company_calendar.json";

pub struct CalendarStore;

impl CalendarStore {
    /// An unset calendar is every day a working day.
    pub fn load(store: &JsonStore) -> CompanyCalendar {
        store.read_or_default(CALENDAR_FILE)
    }

    /// Saves even an inconsistent calendar; overlaps resolve by precedence
    /// at generation time, but each one is logged so the editor can be fixed.
    pub fn save(store: &JsonStore, calendar: &CompanyCalendar) -> AppResult<()> {
        for warning in calendar.validate() {
            warn!(target: "app::calendar", %warning, "calendar inconsistency");
        }
        store.write_atomic(CALENDAR_FILE, calendar)
    }
}

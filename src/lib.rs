pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::AppResult;
use crate::services::shift_service;
use crate::store::calendar::CalendarStore;
use crate::store::courses::CourseStore;
use crate::store::drivers::DriverStore;
use crate::store::vehicles::VehicleStore;
use crate::store::JsonStore;

/// Load every aggregate from the data directory, generate the week around
/// `target_date` (today when absent) and print the result as JSON.
pub fn run(target_date: Option<&str>) -> AppResult<()> {
    let config = Config::from_env();
    utils::logger::init_logging(&config.log_dir)?;

    let store = JsonStore::new(&config.data_dir)?;
    let roster = DriverStore::load(&store)?;
    let catalog = CourseStore::load(&store);
    let vehicles = VehicleStore::load(&store);
    let calendar = CalendarStore::load(&store);

    let target = match target_date {
        Some(value) => shift_service::parse_target_date(value)?,
        None => chrono::Local::now().date_naive(),
    };

    let result =
        shift_service::generate_weekly_shift(target, &roster, &catalog, &vehicles, &calendar)?;

    if result.conflicts.is_empty() {
        info!(target: "app::shift", "generated week has no vehicle conflicts");
    } else {
        for group in result.conflicts.iter() {
            warn!(
                target: "app::shift",
                key = %group.key(),
                drivers = group.entries.len(),
                "vehicle assigned to multiple drivers"
            );
        }
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

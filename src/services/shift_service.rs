use chrono::{Days, Duration, NaiveDate};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::models::calendar::{CompanyCalendar, DayStatus};
use crate::models::course::{CourseCatalog, CourseLabel};
use crate::models::driver::{ordered_active, DriverRoster};
use crate::models::schedule::{ConflictEntry, ConflictSet, GenerationResult, Schedule, ScheduleEntry};
use crate::models::vehicle::VehicleTable;
use crate::models::weekday::Weekday;
use crate::services::calendar_service;
use crate::services::course_name;
use crate::services::vehicle_binding::BindingTable;

/// Parse a user-supplied target date. This is the one input the engine
/// refuses instead of substituting a default: a guessed week start would
/// silently generate the wrong week.
pub fn parse_target_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        AppError::invalid_input(format!("対象日付の形式が正しくありません ({}): {}", value, e))
    })
}

/// Monday of the week containing `date`. A Monday maps to itself. `None`
/// when that Monday would fall before the first representable date.
pub fn snap_to_monday(date: NaiveDate) -> Option<NaiveDate> {
    let days_since_monday = match Weekday::from_date(date) {
        Weekday::Monday => 0,
        Weekday::Tuesday => 1,
        Weekday::Wednesday => 2,
        Weekday::Thursday => 3,
        Weekday::Friday => 4,
        Weekday::Saturday => 5,
        Weekday::Sunday => 6,
    };
    date.checked_sub_days(Days::new(days_since_monday))
}

/// Generate the weekly schedule for the week containing `target`.
///
/// Every schedulable driver gets exactly seven dated entries starting at the
/// snapped Monday. Company holidays override the driver's template with a
/// 公休 entry carrying the holiday label as its note. On working days the
/// template course is normalized, resolved to a plate, and recorded as a
/// conflict candidate when it stands for real work on a real vehicle.
///
/// The result is a pure function of the five inputs; generating twice yields
/// identical output, byte for byte once serialized. The only rejected target
/// is one whose Monday-to-Sunday week does not fit the representable date
/// range, which surfaces as an invalid-input error instead of overflowing.
pub fn generate_weekly_shift(
    target: NaiveDate,
    roster: &DriverRoster,
    catalog: &CourseCatalog,
    vehicles: &VehicleTable,
    calendar: &CompanyCalendar,
) -> AppResult<GenerationResult> {
    let week_start = snap_to_monday(target)
        .filter(|start| start.checked_add_days(Days::new(6)).is_some())
        .ok_or_else(|| AppError::invalid_input(format!("対象日付が範囲外です: {}", target)))?;
    let bindings = BindingTable::build(catalog, vehicles);
    let drivers = ordered_active(roster);

    info!(
        target: "app::shift",
        week_start = %week_start,
        drivers = drivers.len(),
        bound_courses = bindings.len(),
        "generating weekly shift"
    );

    let mut schedule = Schedule::new();
    for driver in &drivers {
        schedule.insert(driver.id.clone(), Default::default());
    }

    let mut conflicts = ConflictSet::new();

    for offset in 0..7 {
        let date = week_start + Duration::days(offset);
        let day = Weekday::from_date(date);
        let status = calendar_service::day_status(date, calendar);

        for driver in &drivers {
            let entry = if !status.is_working() {
                // Company holiday wins over whatever the template says.
                ScheduleEntry {
                    course: CourseLabel::PublicHoliday.to_string(),
                    vehicle: String::new(),
                    note: status.label_ja().to_string(),
                }
            } else {
                let course = course_name::normalize(driver.courses.course_for(day));
                let plate = bindings.plate_for(&course).to_string();
                let note = if status == DayStatus::SpecialWorking {
                    status.label_ja().to_string()
                } else {
                    String::new()
                };

                if CourseLabel::from_name(&course).counts_for_conflicts() && !plate.is_empty() {
                    conflicts.record(
                        date,
                        &plate,
                        ConflictEntry {
                            driver_name: driver.display_name().to_string(),
                            course: course.clone(),
                            vehicle: plate.clone(),
                        },
                    );
                }

                ScheduleEntry {
                    course,
                    vehicle: plate,
                    note,
                }
            };

            if let Some(week) = schedule.get_mut(&driver.id) {
                week.insert(date, entry);
            }
        }
    }

    conflicts.retain_collisions();
    if !conflicts.is_empty() {
        warn!(
            target: "app::shift",
            conflicts = conflicts.len(),
            week_start = %week_start,
            "vehicle double assignments detected"
        );
    }

    Ok(GenerationResult {
        schedule,
        conflicts,
    })
}

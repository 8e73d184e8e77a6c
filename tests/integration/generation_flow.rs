// End-to-end weekly generation over store-backed fixtures

use chrono::NaiveDate;
use haisou_shift::models::schedule::GenerationResult;
use haisou_shift::services::shift_service::{generate_weekly_shift, parse_target_date};
use haisou_shift::store::calendar::{CalendarStore, CALENDAR_FILE};
use haisou_shift::store::courses::{CourseStore, COURSES_FILE};
use haisou_shift::store::drivers::{DriverStore, DRIVERS_FILE};
use haisou_shift::store::schedule::ScheduleStore;
use haisou_shift::store::vehicles::{VehicleStore, VEHICLES_FILE};
use haisou_shift::store::JsonStore;
use tempfile::tempdir;

fn date(s: &str) -> NaiveDate {
    s.parse().expect("test date")
}

/// Week of 2025-06-09 (Monday) .. 2025-06-15 (Sunday).
/// Sunday is the weekly holiday but this one is worked; Tuesday is a
/// special holiday; two drivers share the Monday vehicle.
fn setup_fixture_store() -> (tempfile::TempDir, JsonStore) {
    let dir = tempdir().expect("temp dir");
    let store = JsonStore::new(dir.path()).expect("store");

    std::fs::write(
        store.path_for(DRIVERS_FILE),
        r#"{
            "driver_001": {
                "id": "driver_001",
                "name": "佐藤",
                "personal_id": "1",
                "is_active": true,
                "is_deleted": false,
                "courses": {
                    "monday": {"course": "KT1002群馬"},
                    "sunday": {"course": "KT1002 群馬"}
                }
            },
            "driver_002": {
                "id": "driver_002",
                "name": "鈴木",
                "personal_id": "2",
                "is_active": 1,
                "is_deleted": 0,
                "courses": {
                    "monday": {"course": "KT1002 群馬"}
                }
            },
            "driver_003": {
                "id": "driver_003",
                "name": "田中",
                "personal_id": "3",
                "is_active": false,
                "courses": {
                    "monday": {"course": "KT1002 群馬"}
                }
            }
        }"#,
    )
    .expect("drivers fixture");

    std::fs::write(
        store.path_for(COURSES_FILE),
        r#"{
            "monday": [
                {"id": "course_001", "name": "KT1002 群馬", "vehicle_id": "vehicle_001"}
            ],
            "sunday": [
                {"id": "course_002", "name": "KT1002 群馬", "vehicle_id": "vehicle_001"}
            ]
        }"#,
    )
    .expect("courses fixture");

    std::fs::write(
        store.path_for(VEHICLES_FILE),
        r#"{"vehicle_001": {"plate": "品川 300 あ 12-34"}}"#,
    )
    .expect("vehicles fixture");

    std::fs::write(
        store.path_for(CALENDAR_FILE),
        r#"{
            "company_name": "テスト配送株式会社",
            "weekly_holidays": ["sunday"],
            "special_holidays": ["2025-06-10"],
            "working_days": ["2025-06-15"]
        }"#,
    )
    .expect("calendar fixture");

    (dir, store)
}

fn generate_for(store: &JsonStore, target: &str) -> GenerationResult {
    let roster = DriverStore::load(store).expect("roster");
    let catalog = CourseStore::load(store);
    let vehicles = VehicleStore::load(store);
    let calendar = CalendarStore::load(store);
    generate_weekly_shift(
        parse_target_date(target).expect("target date"),
        &roster,
        &catalog,
        &vehicles,
        &calendar,
    )
    .expect("generate")
}

#[test]
fn test_full_week_from_fixture_files() {
    let (_dir, store) = setup_fixture_store();
    let result = generate_for(&store, "2025-06-09");

    // Inactive driver is absent, the others have a full week.
    assert_eq!(result.schedule.len(), 2);
    assert!(!result.schedule.contains_key("driver_003"));
    assert_eq!(result.schedule["driver_001"].len(), 7);
    assert_eq!(result.schedule["driver_002"].len(), 7);

    // Monday: both drivers on the same plate, template spellings unified.
    let sato_monday = &result.schedule["driver_001"][&date("2025-06-09")];
    assert_eq!(sato_monday.course, "KT1002 群馬");
    assert_eq!(sato_monday.vehicle, "品川 300 あ 12-34");
    assert_eq!(sato_monday.note, "");

    // Tuesday: special holiday overrides everything.
    let sato_tuesday = &result.schedule["driver_001"][&date("2025-06-10")];
    assert_eq!(sato_tuesday.course, "公休");
    assert_eq!(sato_tuesday.vehicle, "");
    assert_eq!(sato_tuesday.note, "特別休業");

    // Sunday: weekly holiday turned into a worked day, noted as such.
    let sato_sunday = &result.schedule["driver_001"][&date("2025-06-15")];
    assert_eq!(sato_sunday.course, "KT1002 群馬");
    assert_eq!(sato_sunday.vehicle, "品川 300 あ 12-34");
    assert_eq!(sato_sunday.note, "特別出勤");

    // Suzuki has no sunday template, so the worked Sunday is unassigned.
    let suzuki_sunday = &result.schedule["driver_002"][&date("2025-06-15")];
    assert_eq!(suzuki_sunday.course, "-");
    assert_eq!(suzuki_sunday.note, "特別出勤");
}

#[test]
fn test_monday_conflict_is_reported_once() {
    let (_dir, store) = setup_fixture_store();
    let result = generate_for(&store, "2025-06-09");

    assert_eq!(result.conflicts.len(), 1);
    let group = result
        .conflicts
        .get(date("2025-06-09"), "品川 300 あ 12-34")
        .expect("monday conflict");
    assert_eq!(group.entries.len(), 2);
    assert_eq!(group.entries[0].driver_name, "佐藤");
    assert_eq!(group.entries[1].driver_name, "鈴木");
    // Sunday's single claim never becomes a conflict.
    assert!(result
        .conflicts
        .get(date("2025-06-15"), "品川 300 あ 12-34")
        .is_none());
}

#[test]
fn test_mid_week_target_yields_the_same_week() {
    let (_dir, store) = setup_fixture_store();
    let from_monday = generate_for(&store, "2025-06-09");
    let from_thursday = generate_for(&store, "2025-06-12");
    let from_sunday = generate_for(&store, "2025-06-15");

    assert_eq!(from_monday, from_thursday);
    assert_eq!(from_monday, from_sunday);
}

#[test]
fn test_generation_is_reproducible_byte_for_byte() {
    let (_dir, store) = setup_fixture_store();
    let first = serde_json::to_string(&generate_for(&store, "2025-06-11")).expect("json");
    let second = serde_json::to_string(&generate_for(&store, "2025-06-11")).expect("json");
    assert_eq!(first, second);
}

#[test]
fn test_result_round_trips_through_json() {
    let (_dir, store) = setup_fixture_store();
    let result = generate_for(&store, "2025-06-09");

    let json = serde_json::to_string_pretty(&result).expect("serialize");
    let back: GenerationResult = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, result);

    // Wire shape: conflicts keyed by "<date>_<plate>".
    let value: serde_json::Value = serde_json::from_str(&json).expect("value");
    assert!(value["conflicts"]
        .get("2025-06-09_品川 300 あ 12-34")
        .is_some());
    assert_eq!(
        value["schedule"]["driver_001"]["2025-06-10"]["course"],
        "公休"
    );
}

#[test]
fn test_commit_week_keeps_previous_weeks() {
    let (_dir, store) = setup_fixture_store();

    let previous = generate_for(&store, "2025-06-02");
    ScheduleStore::commit_week(&store, &previous.schedule).expect("commit previous week");

    let current = generate_for(&store, "2025-06-09");
    let merged = ScheduleStore::commit_week(&store, &current.schedule).expect("commit this week");

    // 14 dates per driver now: two committed weeks.
    assert_eq!(merged["driver_001"].len(), 14);
    let reloaded = ScheduleStore::load(&store);
    assert_eq!(reloaded, merged);
    assert_eq!(
        reloaded["driver_001"][&date("2025-06-02")].course,
        "KT1002 群馬"
    );
}

#[test]
fn test_empty_store_generates_empty_result() {
    let dir = tempdir().expect("temp dir");
    let store = JsonStore::new(dir.path()).expect("store");

    let result = generate_for(&store, "2025-06-09");
    assert!(result.schedule.is_empty());
    assert!(result.conflicts.is_empty());
}

// Error paths and degraded-data behavior

use haisou_shift::error::AppError;
use haisou_shift::models::calendar::CompanyCalendar;
use haisou_shift::services::shift_service::{generate_weekly_shift, parse_target_date};
use haisou_shift::store::calendar::{CalendarStore, CALENDAR_FILE};
use haisou_shift::store::courses::{CourseStore, COURSES_FILE};
use haisou_shift::store::drivers::{DriverStore, DRIVERS_FILE};
use haisou_shift::store::vehicles::{VehicleStore, VEHICLES_FILE};
use haisou_shift::store::JsonStore;
use tempfile::tempdir;

#[test]
fn test_invalid_target_date_is_rejected() {
    for bad in ["2025/06/12", "06-12-2025", "来週", "2025-13-01", "2025-02-29", ""] {
        let error = parse_target_date(bad).expect_err("must reject");
        assert!(
            matches!(error, AppError::InvalidInput { .. }),
            "{bad:?} should be invalid input"
        );
    }
}

#[test]
fn test_rejection_message_names_the_value() {
    let error = parse_target_date("2025/06/12").expect_err("must reject");
    let message = error.to_string();
    assert!(message.contains("入力が不正です"));
    assert!(message.contains("対象日付の形式が正しくありません"));
    assert!(message.contains("2025/06/12"));
}

#[test]
fn test_valid_target_dates_are_accepted() {
    assert!(parse_target_date("2024-02-29").is_ok(), "leap day");
    assert!(parse_target_date("2025-12-31").is_ok());
    assert!(parse_target_date("  2025-06-12\n").is_ok(), "whitespace trimmed");
}

#[test]
fn test_edge_of_calendar_dates_error_instead_of_crashing() {
    // %Y accepts signed wide years, so both ends of the supported calendar
    // parse fine. Neither leaves room for a full Monday-to-Sunday week.
    for extreme in ["+262142-12-31", "-262143-01-01"] {
        let target = parse_target_date(extreme).expect("parses syntactically");
        let error = generate_weekly_shift(
            target,
            &Default::default(),
            &Default::default(),
            &Default::default(),
            &Default::default(),
        )
        .expect_err("week out of range");
        assert!(matches!(error, AppError::InvalidInput { .. }), "{extreme}");
        assert!(error.to_string().contains("範囲外"));
    }
}

#[test]
fn test_json_errors_convert_to_app_errors() {
    let parse_error = serde_json::from_str::<CompanyCalendar>("{broken").expect_err("bad json");
    let error: AppError = parse_error.into();
    assert!(matches!(error, AppError::Serialization(_)));
    assert!(error.to_string().contains("シリアライズに失敗しました"));
}

#[test]
fn test_store_refuses_directory_blocked_by_a_file() {
    let dir = tempdir().expect("temp dir");
    let blocked = dir.path().join("data");
    std::fs::write(&blocked, "not a directory").expect("blocking file");

    let error = JsonStore::new(&blocked).expect_err("must fail");
    assert!(matches!(error, AppError::Io(_)));
}

#[test]
fn test_generation_survives_fully_corrupt_store() {
    let dir = tempdir().expect("temp dir");
    let store = JsonStore::new(dir.path()).expect("store");
    for file in [DRIVERS_FILE, COURSES_FILE, VEHICLES_FILE, CALENDAR_FILE] {
        std::fs::write(store.path_for(file), "{{{ not json at all").expect("corrupt file");
    }

    let roster = DriverStore::load(&store).expect("degrades, not errors");
    let catalog = CourseStore::load(&store);
    let vehicles = VehicleStore::load(&store);
    let calendar = CalendarStore::load(&store);

    let result = generate_weekly_shift(
        parse_target_date("2025-06-12").expect("target"),
        &roster,
        &catalog,
        &vehicles,
        &calendar,
    )
    .expect("generate");
    assert!(result.schedule.is_empty());
    assert!(result.conflicts.is_empty());
}

#[test]
fn test_partial_corruption_only_degrades_the_bad_file() {
    let dir = tempdir().expect("temp dir");
    let store = JsonStore::new(dir.path()).expect("store");
    std::fs::write(
        store.path_for(DRIVERS_FILE),
        r#"{"d1": {"id": "d1", "name": "佐藤", "personal_id": "1"}}"#,
    )
    .expect("good roster");
    std::fs::write(store.path_for(COURSES_FILE), "oops").expect("bad catalog");

    let roster = DriverStore::load(&store).expect("roster");
    let catalog = CourseStore::load(&store);
    let result = generate_weekly_shift(
        parse_target_date("2025-06-09").expect("target"),
        &roster,
        &catalog,
        &VehicleStore::load(&store),
        &CalendarStore::load(&store),
    )
    .expect("generate");

    // The driver still gets a full week, just with no vehicle bindings.
    assert_eq!(result.schedule["d1"].len(), 7);
    assert!(result.schedule["d1"]
        .values()
        .all(|entry| entry.vehicle.is_empty()));
}

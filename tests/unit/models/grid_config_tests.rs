// Unit tests for grid configuration built from settings
// Parameterized over the slot notations the calendar accepts

use calendar_grid::models::grid::OutOfRangePolicy;
use calendar_grid::models::settings::GridSettings;
use calendar_grid::LayoutError;
use chrono::{Duration, NaiveDate};
use test_case::test_case;

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
}

fn settings(day_start: &str, day_end: &str, slot: &str) -> GridSettings {
    GridSettings {
        day_start: day_start.to_string(),
        day_end: day_end.to_string(),
        slot_duration: slot.to_string(),
        ..Default::default()
    }
}

#[test_case("9:00", "18:00", "00:30", 18; "working day in half hours")]
#[test_case("9:00", "18:00", "1:00", 9; "working day in hours")]
#[test_case("0:00", "23:45", "00:15", 95; "almost whole day in quarters")]
#[test_case("8:30", "12:30", "00:20", 12; "morning in twenty minutes")]
fn test_slot_rows(day_start: &str, day_end: &str, slot: &str, expected_rows: u32) {
    let config = settings(day_start, day_end, slot).to_config(monday()).unwrap();
    assert_eq!(config.slot_rows(), expected_rows);
}

#[test_case("18:00", "9:00", "00:30"; "inverted day")]
#[test_case("9:00", "9:00", "00:30"; "empty day")]
#[test_case("9:00", "18:00", "0:00"; "zero slot")]
#[test_case("9", "18:00", "00:30"; "malformed start")]
fn test_invalid_settings(day_start: &str, day_end: &str, slot: &str) {
    let result = settings(day_start, day_end, slot).to_config(monday());
    assert!(matches!(result, Err(LayoutError::InvalidConfig(_))));
}

#[test]
fn test_default_occurrence_duration_notation() {
    let config = GridSettings {
        default_occurrence_duration: "00:45".to_string(),
        ..Default::default()
    }
    .to_config(monday())
    .unwrap();
    assert_eq!(config.default_occurrence_duration, Duration::minutes(45));
}

#[test]
fn test_zero_days_rejected() {
    let result = GridSettings {
        days: 0,
        ..Default::default()
    }
    .to_config(monday());
    assert!(result.is_err());
}

#[test]
fn test_default_policy_is_clamp() {
    let config = GridSettings::default().to_config(monday()).unwrap();
    assert_eq!(config.out_of_range, OutOfRangePolicy::Clamp);
}

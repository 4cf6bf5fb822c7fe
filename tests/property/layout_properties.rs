// Property-based tests for the time-grid layout
// Round trip, resize floor and drag duration hold for random in-bounds inputs

use calendar_grid::layout::TimeGridLayout;
use calendar_grid::models::grid::GridConfig;
use calendar_grid::models::occurrence::{Occurrence, TimeRange};
use chrono::{Duration, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use proptest::prelude::*;

const ZONES: [Tz; 4] = [
    chrono_tz::UTC,
    chrono_tz::Europe::London,
    chrono_tz::America::New_York,
    chrono_tz::Asia::Kolkata,
];

fn config(date: NaiveDate, zone: Tz, slot_minutes: i64) -> GridConfig {
    GridConfig::new(
        date,
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        Duration::minutes(slot_minutes),
        zone,
    )
    .unwrap()
}

/// Occurrence starting `start_minute` minutes after 9:00 local on `date`.
fn occurrence(config: &GridConfig, start_minute: i64, length_minutes: i64) -> Occurrence {
    let start = TimeGridLayout::from_grid_position(
        &calendar_grid::models::grid::GridPosition::new(0, 0.0, 1.0),
        config,
        config.reference_date,
    )
    .unwrap()
    .start()
        + Duration::minutes(start_minute);

    Occurrence::new(
        "Property",
        TimeRange::starting_at(start, Duration::minutes(length_minutes)).unwrap(),
        config.time_zone,
    )
    .unwrap()
}

fn grid_date() -> impl Strategy<Value = NaiveDate> {
    (2020..2030i32, 1..=12u32, 1..=28u32)
        .prop_map(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

proptest! {
    /// Property: in-bounds occurrences survive to_grid_position → from_grid_position
    #[test]
    fn prop_round_trip(
        date in grid_date(),
        zone_index in 0..ZONES.len(),
        slot_minutes in prop::sample::select(vec![10i64, 15, 20, 30, 60]),
        start_minute in 0..480i64,
        length in 1..60i64,
    ) {
        let config = config(date, ZONES[zone_index], slot_minutes);
        let original = occurrence(&config, start_minute, length);

        let position = TimeGridLayout::to_grid_position(&original, &config).unwrap();
        prop_assert_eq!(position.day_index, 0);

        let range = TimeGridLayout::from_grid_position(&position, &config, date).unwrap();
        prop_assert_eq!(range, original.range);
    }

    /// Property: resizing never leaves less than one slot
    #[test]
    fn prop_resize_keeps_one_slot(
        date in grid_date(),
        slot_minutes in prop::sample::select(vec![15i64, 30, 60]),
        length in 1..240i64,
        delta in -20..20i64,
    ) {
        let config = config(date, chrono_tz::UTC, slot_minutes);
        let original = occurrence(&config, 0, length);

        let range = TimeGridLayout::resize(&original, &config, delta).unwrap();
        prop_assert_eq!(range.start(), original.start());
        prop_assert!(range.duration() >= config.slot_duration);
    }

    /// Property: dragging preserves end - start exactly
    #[test]
    fn prop_drag_preserves_duration(
        date in grid_date(),
        zone_index in 0..ZONES.len(),
        start_minute in 0..480i64,
        length in 1..600i64,
        days in -10..10i64,
        slots in -20..20i64,
    ) {
        let config = config(date, ZONES[zone_index], 30);
        let original = occurrence(&config, start_minute, length);

        let range = TimeGridLayout::drag(&original, &config, days, slots).unwrap();
        prop_assert_eq!(range.duration(), original.duration());
    }

    /// Property: changing the display zone never moves the instants
    #[test]
    fn prop_zone_change_keeps_instants(
        date in grid_date(),
        from in 0..ZONES.len(),
        to in 0..ZONES.len(),
    ) {
        let config = config(date, ZONES[from], 30);
        let original = occurrence(&config, 60, 30);

        let converted = TimeGridLayout::convert_time_zone(
            &original,
            ZONES[from].name(),
            ZONES[to].name(),
            &calendar_grid::services::timezone::TzDatabase,
        )
        .unwrap();
        prop_assert_eq!(converted.range, original.range);
        prop_assert_eq!(converted.time_zone, ZONES[to]);
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    #[test]
    fn test_documented_example_position() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let config = config(date, chrono_tz::UTC, 30);
        let position =
            TimeGridLayout::to_grid_position(&occurrence(&config, 0, 30), &config).unwrap();

        assert_eq!(position.day_index, 0);
        assert_eq!(position.slot_offset, 0.0);
        assert_eq!(position.slot_span, 1.0);
    }

    #[test]
    fn test_two_hours_ahead_is_four_slots() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let utc = config(date, chrono_tz::UTC, 30);
        let original = occurrence(&utc, 0, 60);

        let before = TimeGridLayout::to_grid_position(&original, &utc).unwrap();
        let ahead = utc.clone().with_time_zone(chrono_tz::Etc::GMTMinus2);
        let after = TimeGridLayout::to_grid_position(&original, &ahead).unwrap();

        assert_eq!(after.slot_offset - before.slot_offset, 4.0);
    }
}

// Test fixtures - reusable test data
// Grid configs and occurrences shared by the integration tests

#![allow(dead_code)]

use calendar_grid::layout::geometry::GridMetrics;
use calendar_grid::models::grid::GridConfig;
use calendar_grid::models::occurrence::{Occurrence, TimeRange};
use calendar_grid::models::settings::GridSettings;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, Mar 3 2025 (London on GMT)
    pub fn winter_monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    /// Monday, Jun 16 2025 (London on BST)
    pub fn summer_monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()
    }

    /// UTC instant on `date` at `hour:minute`
    pub fn utc_at(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.from_utc_datetime(&date.and_hms_opt(hour, minute, 0).unwrap())
    }
}

/// The demo grid: 9:00–18:00, 30-minute slots, UTC.
pub fn demo_config(reference_date: NaiveDate) -> GridConfig {
    GridSettings::default().to_config(reference_date).unwrap()
}

/// Pixel size used by the demo timetable.
pub fn demo_metrics() -> GridMetrics {
    GridMetrics::new(120.0, 20.0).unwrap()
}

/// Sample occurrences for testing
pub mod occurrences {
    use super::*;

    pub fn example(start: DateTime<Utc>, length: Duration) -> Occurrence {
        Occurrence::new(
            "Example Occurrence",
            TimeRange::starting_at(start, length).unwrap(),
            chrono_tz::UTC,
        )
        .unwrap()
    }
}

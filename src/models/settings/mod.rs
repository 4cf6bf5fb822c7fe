// Settings module
// Persisted form of the grid configuration

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::LayoutResult;
use crate::layout::geometry::GridMetrics;
use crate::models::grid::{GridConfig, OutOfRangePolicy, DEFAULT_DAYS};
use crate::services::timezone::{TzDatabase, ZoneDatabase};
use crate::utils::date::{parse_clock_duration, parse_time_of_day};

/// User-facing grid settings, stored as TOML.
///
/// Times use the `H:MM` notation of the calendar component ("9:00",
/// "00:30"); the zone may be an IANA name or a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub day_start: String,
    pub day_end: String,
    pub slot_duration: String,
    pub default_occurrence_duration: String,
    pub time_zone: String,
    pub days: u32,
    pub out_of_range: OutOfRangePolicy,
    pub day_column_width: f32,
    pub slot_row_height: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            day_start: "9:00".to_string(),
            day_end: "18:00".to_string(),
            slot_duration: "00:30".to_string(),
            default_occurrence_duration: "1:00".to_string(),
            time_zone: "UTC".to_string(),
            days: DEFAULT_DAYS,
            out_of_range: OutOfRangePolicy::Clamp,
            day_column_width: 120.0,
            slot_row_height: 20.0,
        }
    }
}

impl GridSettings {
    /// Validate the settings
    pub fn validate(&self) -> LayoutResult<()> {
        self.metrics()?;
        self.to_config(NaiveDate::default()).map(|_| ())
    }

    /// Build the grid config for a pass starting on `reference_date`.
    pub fn to_config(&self, reference_date: NaiveDate) -> LayoutResult<GridConfig> {
        let time_zone = TzDatabase.resolve(&self.time_zone)?;

        GridConfig::new(
            reference_date,
            parse_time_of_day(&self.day_start)?,
            parse_time_of_day(&self.day_end)?,
            parse_clock_duration(&self.slot_duration)?,
            time_zone,
        )?
        .with_days(self.days)?
        .with_default_occurrence_duration(parse_clock_duration(&self.default_occurrence_duration)?)
        .map(|config| config.with_policy(self.out_of_range))
    }

    pub fn metrics(&self) -> LayoutResult<GridMetrics> {
        GridMetrics::new(self.day_column_width, self.slot_row_height)
    }
}

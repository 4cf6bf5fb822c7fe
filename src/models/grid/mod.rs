// Grid module
// Configuration and coordinates of the day × time-slot grid

use chrono::{Duration, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};
use crate::utils::date::ratio;

/// Smallest slot span a position may carry.
pub const MIN_SLOT_SPAN: f64 = 1e-6;

/// Number of day columns in a week grid.
pub const DEFAULT_DAYS: u32 = 7;

/// What to do with an interval that sticks out of its day window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfRangePolicy {
    /// Clip to the window. Lossy: the position no longer round-trips.
    #[default]
    Clamp,
    /// Fail with `LayoutError::OutOfRange`.
    Reject,
}

/// Immutable description of the grid for one rendering pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Date of day column 0.
    pub reference_date: NaiveDate,
    pub day_start: NaiveTime,
    pub day_end: NaiveTime,
    pub slot_duration: Duration,
    pub time_zone: Tz,
    /// Number of day columns.
    pub days: u32,
    /// Length of an occurrence created by selecting a cell.
    pub default_occurrence_duration: Duration,
    pub out_of_range: OutOfRangePolicy,
}

impl GridConfig {
    /// Create a validated config with a week of columns, one-hour default
    /// occurrences and the clamping policy.
    pub fn new(
        reference_date: NaiveDate,
        day_start: NaiveTime,
        day_end: NaiveTime,
        slot_duration: Duration,
        time_zone: Tz,
    ) -> LayoutResult<Self> {
        let config = Self {
            reference_date,
            day_start,
            day_end,
            slot_duration,
            time_zone,
            days: DEFAULT_DAYS,
            default_occurrence_duration: Duration::hours(1),
            out_of_range: OutOfRangePolicy::Clamp,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants. Uneven slot division is allowed but logged.
    pub fn validate(&self) -> LayoutResult<()> {
        if self.day_start >= self.day_end {
            return Err(LayoutError::InvalidConfig(format!(
                "day start {} must be before day end {}",
                self.day_start, self.day_end
            )));
        }
        if self.slot_duration <= Duration::zero() {
            return Err(LayoutError::InvalidConfig(
                "slot duration must be positive".into(),
            ));
        }
        if self.days == 0 {
            return Err(LayoutError::InvalidConfig(
                "grid must show at least one day".into(),
            ));
        }
        if self.default_occurrence_duration <= Duration::zero() {
            return Err(LayoutError::InvalidConfig(
                "default occurrence duration must be positive".into(),
            ));
        }

        let window_ms = self.day_window().num_milliseconds();
        if window_ms % self.slot_duration.num_milliseconds() != 0 {
            log::warn!(
                "Slot duration {}min does not divide the {}–{} window evenly; last slot is partial",
                self.slot_duration.num_minutes(),
                self.day_start,
                self.day_end
            );
        }
        Ok(())
    }

    pub fn with_days(mut self, days: u32) -> LayoutResult<Self> {
        self.days = days;
        self.validate()?;
        Ok(self)
    }

    pub fn with_default_occurrence_duration(mut self, duration: Duration) -> LayoutResult<Self> {
        self.default_occurrence_duration = duration;
        self.validate()?;
        Ok(self)
    }

    pub fn with_policy(mut self, policy: OutOfRangePolicy) -> Self {
        self.out_of_range = policy;
        self
    }

    pub fn with_time_zone(mut self, time_zone: Tz) -> Self {
        self.time_zone = time_zone;
        self
    }

    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = reference_date;
        self
    }

    /// Wall-clock length of one day column.
    pub fn day_window(&self) -> Duration {
        self.day_end - self.day_start
    }

    /// Slots per day column, counting a trailing partial slot as a fraction.
    pub fn slots_per_day(&self) -> f64 {
        ratio(self.day_window(), self.slot_duration)
    }

    /// Whole rows drawn per day column (a trailing partial slot gets a row).
    pub fn slot_rows(&self) -> u32 {
        self.slots_per_day().ceil() as u32
    }

    /// Date shown in column `day_index`.
    pub fn date_of(&self, day_index: u32) -> NaiveDate {
        self.reference_date + Duration::days(i64::from(day_index))
    }
}

/// Day/offset/span coordinates of an interval on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridPosition {
    pub day_index: u32,
    /// Slots from day start; fractional while dragging.
    pub slot_offset: f64,
    /// Slots covered, at least `MIN_SLOT_SPAN`.
    pub slot_span: f64,
}

impl GridPosition {
    pub fn new(day_index: u32, slot_offset: f64, slot_span: f64) -> Self {
        Self {
            day_index,
            slot_offset,
            slot_span: slot_span.max(MIN_SLOT_SPAN),
        }
    }

    pub fn slot_end(&self) -> f64 {
        self.slot_offset + self.slot_span
    }
}

/// A whole cell of the grid, as selected by a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub day_index: u32,
    pub slot_index: u32,
}

impl GridCell {
    pub fn new(day_index: u32, slot_index: u32) -> Self {
        Self {
            day_index,
            slot_index,
        }
    }
}

impl From<GridCell> for GridPosition {
    fn from(cell: GridCell) -> Self {
        GridPosition::new(cell.day_index, f64::from(cell.slot_index), 1.0)
    }
}

/// One row of the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub index: u32,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Row label, e.g. "09:30"
    pub fn label(&self) -> String {
        self.start.format("%H:%M").to_string()
    }
}

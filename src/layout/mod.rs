//! Time-grid layout.
//!
//! Converts occurrences into day-column / time-slot coordinates and back,
//! and applies drag and resize gestures. Every operation is a pure function
//! of its inputs; pixel concerns live in `geometry`.

pub mod drag;
pub mod geometry;
pub mod resize;

use chrono::{Days, Duration, NaiveDate};

use crate::error::{LayoutError, LayoutResult};
use crate::models::grid::{GridCell, GridConfig, GridPosition, OutOfRangePolicy, TimeSlot};
use crate::models::occurrence::{Occurrence, TimeRange};
use crate::services::timezone::ZoneDatabase;
use crate::utils::date::{
    at_time_on, local_date, localize, multiply_duration, offset_instant, ratio, scale_duration,
};

pub struct TimeGridLayout;

impl TimeGridLayout {
    /// Place an occurrence on the grid, reading its instants on the wall
    /// clock of `config.time_zone`.
    ///
    /// An occurrence that starts before the day start or ends after the day
    /// end of its start date is clipped under `OutOfRangePolicy::Clamp` and
    /// rejected under `Reject`. Occurrences with nothing inside the grid
    /// (wrong day, or entirely outside the day window) are always rejected.
    pub fn to_grid_position(
        occurrence: &Occurrence,
        config: &GridConfig,
    ) -> LayoutResult<GridPosition> {
        let zone = &config.time_zone;
        let date = local_date(zone, occurrence.start());

        let day_index = (date - config.reference_date).num_days();
        if day_index < 0 || day_index >= i64::from(config.days) {
            return Err(LayoutError::OutOfRange(format!(
                "'{}' starts on {}, outside the {} days from {}",
                occurrence.title, date, config.days, config.reference_date
            )));
        }

        let window_start = at_time_on(zone, date, config.day_start)?;
        let window_end = at_time_on(zone, date, config.day_end)?;
        let (start, end) = (occurrence.start(), occurrence.end());

        if end <= window_start || start >= window_end {
            return Err(LayoutError::OutOfRange(format!(
                "'{}' does not overlap {}–{} on {}",
                occurrence.title, config.day_start, config.day_end, date
            )));
        }

        let clipped_start = start.max(window_start);
        let clipped_end = end.min(window_end);

        if clipped_start != start || clipped_end != end {
            match config.out_of_range {
                OutOfRangePolicy::Reject => {
                    return Err(LayoutError::OutOfRange(format!(
                        "'{}' extends past {}–{} on {}",
                        occurrence.title, config.day_start, config.day_end, date
                    )));
                }
                OutOfRangePolicy::Clamp => {
                    log::debug!(
                        "Clamping '{}' to {}–{} on {}",
                        occurrence.title,
                        config.day_start,
                        config.day_end,
                        date
                    );
                }
            }
        }

        Ok(GridPosition::new(
            day_index as u32,
            ratio(clipped_start - window_start, config.slot_duration),
            ratio(clipped_end - clipped_start, config.slot_duration),
        ))
    }

    /// Inverse of `to_grid_position`: offset 0 is the day start of
    /// `reference_date + day_index`, each slot unit is one slot duration.
    /// Positions that land past the supported calendar are `OutOfRange`.
    pub fn from_grid_position(
        position: &GridPosition,
        config: &GridConfig,
        reference_date: NaiveDate,
    ) -> LayoutResult<TimeRange> {
        let date = reference_date
            .checked_add_days(Days::new(u64::from(position.day_index)))
            .ok_or_else(|| {
                LayoutError::OutOfRange(format!(
                    "day {} after {} is past the supported dates",
                    position.day_index, reference_date
                ))
            })?;
        let origin = at_time_on(&config.time_zone, date, config.day_start)?;

        let start = offset_instant(
            origin,
            scale_duration(config.slot_duration, position.slot_offset)?,
        )?;
        let end = offset_instant(start, scale_duration(config.slot_duration, position.slot_span)?)?;
        TimeRange::new(start, end)
    }

    /// Move the end by `delta_slots` slots. The span never drops below one slot.
    pub fn resize(
        occurrence: &Occurrence,
        config: &GridConfig,
        delta_slots: i64,
    ) -> LayoutResult<TimeRange> {
        let start = occurrence.start();
        let proposed = offset_instant(
            occurrence.end(),
            multiply_duration(config.slot_duration, delta_slots)?,
        )?;
        let end = proposed.max(offset_instant(start, config.slot_duration)?);
        TimeRange::new(start, end)
    }

    /// Move by whole calendar days (on the grid's wall clock) and slots,
    /// keeping the duration.
    pub fn drag(
        occurrence: &Occurrence,
        config: &GridConfig,
        delta_days: i64,
        delta_slots: i64,
    ) -> LayoutResult<TimeRange> {
        let zone = &config.time_zone;
        let wall_clock = Duration::try_days(delta_days)
            .and_then(|days| {
                occurrence
                    .start()
                    .with_timezone(zone)
                    .naive_local()
                    .checked_add_signed(days)
            })
            .ok_or_else(|| {
                LayoutError::OutOfRange(format!(
                    "moving '{}' by {} days is past the supported dates",
                    occurrence.title, delta_days
                ))
            })?;
        let start = offset_instant(
            localize(zone, wall_clock)?,
            multiply_duration(config.slot_duration, delta_slots)?,
        )?;
        TimeRange::starting_at(start, occurrence.duration())
    }

    /// Show the occurrence in another zone. The instants are untouched; only
    /// the wall clock it is read against changes.
    pub fn convert_time_zone(
        occurrence: &Occurrence,
        from_zone: &str,
        to_zone: &str,
        zones: &impl ZoneDatabase,
    ) -> LayoutResult<Occurrence> {
        let from = zones.resolve(from_zone)?;
        let to = zones.resolve(to_zone)?;

        if from != occurrence.time_zone {
            log::warn!(
                "'{}' is displayed in {}, converting as if from {}",
                occurrence.title,
                occurrence.time_zone,
                from
            );
        }

        log::debug!("Displaying '{}' in {} instead of {}", occurrence.title, to, from);

        Ok(Occurrence {
            time_zone: to,
            ..occurrence.clone()
        })
    }

    /// A new occurrence starting at `cell`, lasting the default duration.
    pub fn occurrence_at(
        cell: GridCell,
        config: &GridConfig,
        title: impl Into<String>,
    ) -> LayoutResult<Occurrence> {
        if cell.day_index >= config.days || cell.slot_index >= config.slot_rows() {
            return Err(LayoutError::OutOfRange(format!(
                "cell (day {}, slot {}) is outside a {}×{} grid",
                cell.day_index,
                cell.slot_index,
                config.days,
                config.slot_rows()
            )));
        }

        let slot = Self::from_grid_position(&cell.into(), config, config.reference_date)?;
        let range = TimeRange::starting_at(slot.start(), config.default_occurrence_duration)?;
        Occurrence::new(title, range, config.time_zone)
    }

    /// The config re-targeted at the zone the occurrence is displayed in.
    pub fn config_for(occurrence: &Occurrence, config: &GridConfig) -> GridConfig {
        config.clone().with_time_zone(occurrence.time_zone)
    }

    /// Rows of the time axis. A trailing partial slot ends at the day end.
    pub fn time_slots(config: &GridConfig) -> Vec<TimeSlot> {
        let mut start = config.day_start;
        (0..config.slot_rows())
            .map(|index| {
                let end = (start + config.slot_duration).min(config.day_end);
                let slot = TimeSlot { index, start, end };
                start = end;
                slot
            })
            .collect()
    }

    /// Dates of the day columns.
    pub fn day_columns(config: &GridConfig) -> Vec<NaiveDate> {
        (0..config.days).map(|day| config.date_of(day)).collect()
    }
}

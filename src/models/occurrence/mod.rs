// Occurrence module
// Titled time intervals placed on the calendar grid

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

use crate::error::{LayoutError, LayoutResult};
use crate::utils::date::offset_instant;

/// Absolute time interval. `start` is always strictly before `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    /// Create a range, rejecting empty or inverted intervals.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> LayoutResult<Self> {
        if end <= start {
            return Err(LayoutError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create a range from a start instant and a positive length.
    pub fn starting_at(start: DateTime<Utc>, length: Duration) -> LayoutResult<Self> {
        Self::new(start, offset_instant(start, length)?)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Shift both ends by the same amount.
    pub fn shifted(&self, by: Duration) -> LayoutResult<Self> {
        Ok(Self {
            start: offset_instant(self.start, by)?,
            end: offset_instant(self.end, by)?,
        })
    }
}

/// A titled interval displayed in a time zone.
///
/// The instants are absolute; `time_zone` only decides which wall clock the
/// occurrence is shown against.
#[derive(Debug, Clone, PartialEq)]
pub struct Occurrence {
    pub id: Option<i64>,
    pub title: String,
    pub range: TimeRange,
    pub time_zone: Tz,
}

impl Occurrence {
    /// Create a new occurrence with required fields
    ///
    /// # Examples
    /// ```
    /// use calendar_grid::models::occurrence::{Occurrence, TimeRange};
    /// use chrono::{Duration, TimeZone, Utc};
    ///
    /// let start = Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap();
    /// let range = TimeRange::starting_at(start, Duration::minutes(30)).unwrap();
    /// let occurrence = Occurrence::new("Standup", range, chrono_tz::UTC).unwrap();
    /// assert_eq!(occurrence.duration(), Duration::minutes(30));
    /// ```
    pub fn new(title: impl Into<String>, range: TimeRange, time_zone: Tz) -> LayoutResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(LayoutError::EmptyTitle);
        }

        Ok(Self {
            id: None,
            title,
            range,
            time_zone,
        })
    }

    /// Create a builder for constructing occurrences
    pub fn builder() -> OccurrenceBuilder {
        OccurrenceBuilder::new()
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.range.start()
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.range.end()
    }

    pub fn duration(&self) -> Duration {
        self.range.duration()
    }

    /// Same occurrence over a different interval.
    pub fn with_range(&self, range: TimeRange) -> Self {
        Self {
            range,
            ..self.clone()
        }
    }

    /// Start instant on the wall clock of the display zone.
    pub fn local_start(&self) -> DateTime<Tz> {
        self.range.start().with_timezone(&self.time_zone)
    }

    /// End instant on the wall clock of the display zone.
    pub fn local_end(&self) -> DateTime<Tz> {
        self.range.end().with_timezone(&self.time_zone)
    }
}

/// Builder for creating occurrences
pub struct OccurrenceBuilder {
    title: Option<String>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    time_zone: Tz,
}

impl OccurrenceBuilder {
    pub fn new() -> Self {
        Self {
            title: None,
            start: None,
            end: None,
            time_zone: chrono_tz::UTC,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    /// Zone the occurrence is displayed in (UTC when unset)
    pub fn time_zone(mut self, time_zone: Tz) -> Self {
        self.time_zone = time_zone;
        self
    }

    pub fn build(self) -> LayoutResult<Occurrence> {
        let title = self.title.ok_or(LayoutError::EmptyTitle)?;
        let start = self
            .start
            .ok_or_else(|| LayoutError::InvalidConfig("occurrence start is required".into()))?;
        let end = self
            .end
            .ok_or_else(|| LayoutError::InvalidConfig("occurrence end is required".into()))?;

        Occurrence::new(title, TimeRange::new(start, end)?, self.time_zone)
    }
}

impl Default for OccurrenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

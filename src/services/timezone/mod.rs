//! Time-zone lookup.
//!
//! The layout core only needs two things from a zone database: turning a
//! user-supplied name into a zone, and the UTC offset of that zone at an
//! instant. `TzDatabase` answers both from the IANA data bundled with
//! chrono-tz.

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};

use crate::error::{LayoutError, LayoutResult};

#[cfg_attr(test, mockall::automock)]
pub trait ZoneDatabase {
    /// Resolve a zone identifier.
    fn resolve(&self, name: &str) -> LayoutResult<Tz>;

    /// UTC offset in effect in `zone` at `instant`.
    fn offset_at(&self, zone: &Tz, instant: DateTime<Utc>) -> FixedOffset;
}

/// IANA database bundled with chrono-tz.
#[derive(Debug, Clone, Copy, Default)]
pub struct TzDatabase;

impl TzDatabase {
    /// Zone names containing `query`, ignoring case. Spaces match underscores
    /// so "new york" finds `America/New_York`.
    pub fn search(&self, query: &str) -> Vec<&'static str> {
        let needle = normalize(query);
        TZ_VARIANTS
            .iter()
            .map(|tz| tz.name())
            .filter(|name| name.to_ascii_lowercase().contains(&needle))
            .collect()
    }
}

impl ZoneDatabase for TzDatabase {
    /// Accepts a full IANA name in any case, or a bare city ("London").
    /// When several zones end in the same city the shortest name wins.
    fn resolve(&self, name: &str) -> LayoutResult<Tz> {
        let needle = name.trim().replace(' ', "_");
        if needle.is_empty() {
            return Err(LayoutError::UnknownTimeZone(name.to_string()));
        }

        if let Ok(tz) = Tz::from_str_insensitive(&needle) {
            return Ok(tz);
        }

        TZ_VARIANTS
            .iter()
            .filter(|tz| {
                tz.name()
                    .rsplit('/')
                    .next()
                    .is_some_and(|city| city.eq_ignore_ascii_case(&needle))
            })
            .min_by_key(|tz| tz.name().len())
            .copied()
            .ok_or_else(|| LayoutError::UnknownTimeZone(name.to_string()))
    }

    fn offset_at(&self, zone: &Tz, instant: DateTime<Utc>) -> FixedOffset {
        zone.offset_from_utc_datetime(&instant.naive_utc()).fix()
    }
}

fn normalize(name: &str) -> String {
    name.trim().replace(' ', "_").to_ascii_lowercase()
}

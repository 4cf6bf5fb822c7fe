//! Caller-side occurrence collection.
//!
//! The layout functions never own occurrences. `Timetable` is the mutable
//! session state a host keeps between interactions: it hands out ids, applies
//! add/remove/update callbacks, and lays out everything it holds for a pass.

use serde::Serialize;

use crate::error::{LayoutError, LayoutResult};
use crate::layout::TimeGridLayout;
use crate::models::grid::{GridCell, GridConfig, GridPosition};
use crate::models::occurrence::{Occurrence, TimeRange};
use crate::services::timezone::ZoneDatabase;

/// An occurrence id paired with where it lands on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedOccurrence {
    pub id: i64,
    pub position: GridPosition,
}

#[derive(Debug)]
pub struct Timetable {
    occurrences: Vec<Occurrence>,
    next_id: i64,
}

impl Timetable {
    pub fn new() -> Self {
        Self {
            occurrences: Vec::new(),
            next_id: 1,
        }
    }

    /// Store an occurrence and return its id.
    pub fn add(&mut self, mut occurrence: Occurrence) -> i64 {
        let id = self.next_id;
        self.next_id += 1;

        occurrence.id = Some(id);
        log::debug!("Added '{}' as #{}", occurrence.title, id);
        self.occurrences.push(occurrence);
        id
    }

    /// Add a default-length occurrence at a selected cell.
    pub fn select_time(
        &mut self,
        cell: GridCell,
        config: &GridConfig,
        title: impl Into<String>,
    ) -> LayoutResult<i64> {
        let occurrence = TimeGridLayout::occurrence_at(cell, config, title)?;
        Ok(self.add(occurrence))
    }

    pub fn remove(&mut self, id: i64) -> Option<Occurrence> {
        let index = self.occurrences.iter().position(|o| o.id == Some(id))?;
        let removed = self.occurrences.remove(index);
        log::debug!("Removed '{}' (#{})", removed.title, id);
        Some(removed)
    }

    /// Replace the interval of a stored occurrence.
    pub fn update(&mut self, id: i64, range: TimeRange) -> LayoutResult<()> {
        let occurrence = self
            .occurrences
            .iter_mut()
            .find(|o| o.id == Some(id))
            .ok_or(LayoutError::UnknownOccurrence(id))?;
        occurrence.range = range;
        Ok(())
    }

    pub fn get(&self, id: i64) -> Option<&Occurrence> {
        self.occurrences.iter().find(|o| o.id == Some(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Occurrence> {
        self.occurrences.iter()
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    /// Positions of every occurrence that lands on the grid, each read on the
    /// wall clock of its own display zone. An occurrence that cannot be
    /// placed is logged and skipped without affecting the others.
    pub fn layout(&self, config: &GridConfig) -> Vec<PlacedOccurrence> {
        let mut placed = Vec::with_capacity(self.occurrences.len());

        for occurrence in &self.occurrences {
            let Some(id) = occurrence.id else {
                continue;
            };
            let zoned = TimeGridLayout::config_for(occurrence, config);
            match TimeGridLayout::to_grid_position(occurrence, &zoned) {
                Ok(position) => placed.push(PlacedOccurrence { id, position }),
                Err(LayoutError::OutOfRange(reason)) => {
                    log::debug!("Skipping #{}: {}", id, reason);
                }
                Err(e) => {
                    log::warn!("Cannot place #{} '{}': {}", id, occurrence.title, e);
                }
            }
        }

        placed
    }

    /// Display every stored occurrence in `zone`.
    pub fn display_in(&mut self, zone: &str, zones: &impl ZoneDatabase) -> LayoutResult<()> {
        let converted = self
            .occurrences
            .iter()
            .map(|o| TimeGridLayout::convert_time_zone(o, o.time_zone.name(), zone, zones))
            .collect::<LayoutResult<Vec<_>>>()?;
        self.occurrences = converted;
        Ok(())
    }
}

impl Default for Timetable {
    fn default() -> Self {
        Self::new()
    }
}

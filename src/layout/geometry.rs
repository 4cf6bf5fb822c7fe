//! Pixel geometry of the time grid.
//!
//! A linear map between grid coordinates and pixels, relative to the top-left
//! corner of the timetable content area:
//! x = day_index × day_column_width, y = slot_offset × slot_row_height.

use serde::Serialize;

use crate::error::{LayoutError, LayoutResult};
use crate::models::grid::{GridCell, GridConfig, GridPosition};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelRect {
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

/// Size of one grid cell on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub day_column_width: f32,
    pub slot_row_height: f32,
}

impl GridMetrics {
    /// Both sizes must be finite and positive.
    pub fn new(day_column_width: f32, slot_row_height: f32) -> LayoutResult<Self> {
        let valid = |size: f32| size.is_finite() && size > 0.0;
        if !(valid(day_column_width) && valid(slot_row_height)) {
            return Err(LayoutError::InvalidConfig(format!(
                "cell size {}×{} must be positive",
                day_column_width, slot_row_height
            )));
        }
        Ok(Self {
            day_column_width,
            slot_row_height,
        })
    }

    /// Rectangle painted for a position.
    pub fn rect_for(&self, position: &GridPosition) -> PixelRect {
        PixelRect {
            x: position.day_index as f32 * self.day_column_width,
            y: position.slot_offset as f32 * self.slot_row_height,
            width: self.day_column_width,
            height: position.slot_span as f32 * self.slot_row_height,
        }
    }

    /// Whole cell under a point, if the point is inside the grid.
    pub fn cell_at(&self, point: Point, config: &GridConfig) -> Option<GridCell> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }

        let day_index = (point.x / self.day_column_width).floor() as u32;
        let slot_index = (point.y / self.slot_row_height).floor() as u32;

        (day_index < config.days && slot_index < config.slot_rows())
            .then(|| GridCell::new(day_index, slot_index))
    }

    /// Pointer travel along y, snapped to whole slots.
    pub fn slot_delta(&self, dy: f32) -> i64 {
        (dy / self.slot_row_height).round() as i64
    }

    /// Pointer travel along x, snapped to whole days.
    pub fn day_delta(&self, dx: f32) -> i64 {
        (dx / self.day_column_width).round() as i64
    }

    /// Total size of the grid content area.
    pub fn content_size(&self, config: &GridConfig) -> (f32, f32) {
        (
            config.days as f32 * self.day_column_width,
            config.slots_per_day() as f32 * self.slot_row_height,
        )
    }
}

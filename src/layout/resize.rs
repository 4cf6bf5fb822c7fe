// Occurrence resizing
//
// Dragging the bottom edge of a painted occurrence moves its end in whole
// slots; the start never moves.

use crate::error::LayoutResult;
use crate::layout::geometry::{GridMetrics, PixelRect, Point};
use crate::layout::TimeGridLayout;
use crate::models::grid::GridConfig;
use crate::models::occurrence::{Occurrence, TimeRange};

/// Height of the bottom-edge hit zone on tall occurrences.
pub const HANDLE_HEIGHT: f32 = 8.0;

/// Hit zone of the resize handle of one painted occurrence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeHandle {
    pub rect: PixelRect,
}

impl ResizeHandle {
    /// Handle for an occurrence painted at `rect`. Short occurrences give
    /// their lower half to the handle so the body stays draggable.
    pub fn for_rect(rect: PixelRect) -> Self {
        let zone_height = if rect.height < HANDLE_HEIGHT * 2.0 {
            rect.height / 2.0
        } else {
            HANDLE_HEIGHT
        };

        Self {
            rect: PixelRect {
                x: rect.x,
                y: rect.bottom() - zone_height,
                width: rect.width,
                height: zone_height,
            },
        }
    }

    pub fn hit_test(&self, point: Point) -> bool {
        self.rect.contains(point)
    }
}

/// An in-progress resize of one occurrence.
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeSession {
    pub occurrence: Occurrence,
    pub origin: Point,
    pub pointer: Point,
}

impl ResizeSession {
    pub fn begin(occurrence: Occurrence, origin: Point) -> Self {
        Self {
            occurrence,
            origin,
            pointer: origin,
        }
    }

    pub fn moved_to(&self, pointer: Point) -> Self {
        Self {
            pointer,
            ..self.clone()
        }
    }

    /// Slots the end has travelled so far.
    pub fn delta_slots(&self, metrics: &GridMetrics) -> i64 {
        metrics.slot_delta(self.pointer.y - self.origin.y)
    }

    pub fn preview(&self, config: &GridConfig, metrics: &GridMetrics) -> LayoutResult<TimeRange> {
        TimeGridLayout::resize(&self.occurrence, config, self.delta_slots(metrics))
    }

    pub fn finish(self, config: &GridConfig, metrics: &GridMetrics) -> LayoutResult<Occurrence> {
        let range = self.preview(config, metrics)?;
        Ok(self.occurrence.with_range(range))
    }
}

use crate::error::LayoutResult;
use crate::layout::geometry::{GridMetrics, Point};
use crate::layout::TimeGridLayout;
use crate::models::grid::GridConfig;
use crate::models::occurrence::{Occurrence, TimeRange};

/// An in-progress drag of one occurrence.
///
/// Created on pointer-down and replaced by `moved_to` on every pointer move;
/// the host keeps the current value and drops it when the drag ends.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub occurrence: Occurrence,
    pub origin: Point,
    pub pointer: Point,
}

impl DragSession {
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

    /// Whole days and slots travelled so far.
    pub fn deltas(&self, metrics: &GridMetrics) -> (i64, i64) {
        (
            metrics.day_delta(self.pointer.x - self.origin.x),
            metrics.slot_delta(self.pointer.y - self.origin.y),
        )
    }

    /// Interval the occurrence would get if dropped now.
    pub fn preview(&self, config: &GridConfig, metrics: &GridMetrics) -> LayoutResult<TimeRange> {
        let (days, slots) = self.deltas(metrics);
        TimeGridLayout::drag(&self.occurrence, config, days, slots)
    }

    /// Finish the drag, returning the moved occurrence.
    pub fn finish(self, config: &GridConfig, metrics: &GridMetrics) -> LayoutResult<Occurrence> {
        let range = self.preview(config, metrics)?;
        Ok(self.occurrence.with_range(range))
    }
}

//! Depth and iteration arithmetic
//!
//! Derives every unit of a run from one requested maximum depth:
//! - clamp: max = max(requested, MIN_DEPTH + 2)
//! - batch depths: MIN_DEPTH, MIN_DEPTH + 2, ..., max
//! - iterations(depth) = 2^(max - depth + MIN_DEPTH)
//! - buffer size = 3 + (max - MIN_DEPTH) / 2

use super::{UnitKind, WorkUnit};

/// Shallowest batch depth (fixed, not configurable)
pub const MIN_DEPTH: u32 = 4;

/// Deepest requested depth the run is sized for
///
/// Precondition, not checked at runtime. At this depth the largest iteration
/// count is 2^30 and the stretch tree holds 2^32 - 1 nodes, both well inside
/// `u64`; memory runs out long before the counters do.
pub const MAX_SUPPORTED_DEPTH: u32 = 30;

/// Clamped depth parameters for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthPlan {
    /// Depth as requested by the caller (may be negative)
    requested: i32,

    /// Clamped maximum depth
    max_depth: u32,
}

impl DepthPlan {
    /// Clamp a requested depth into a valid plan
    ///
    /// Out-of-range input is normalised, never rejected.
    pub fn new(requested: i32) -> Self {
        let floor = (MIN_DEPTH + 2) as i32;
        let max_depth = requested.max(floor) as u32;

        Self {
            requested,
            max_depth,
        }
    }

    /// Depth the caller asked for
    pub fn requested(&self) -> i32 {
        self.requested
    }

    /// Whether clamping raised the requested depth
    pub fn was_clamped(&self) -> bool {
        self.requested != self.max_depth as i32
    }

    /// Clamped maximum depth (also the long-lived tree depth)
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Shallowest batch depth
    pub fn min_depth(&self) -> u32 {
        MIN_DEPTH
    }

    /// Stretch tree depth: one level past the maximum
    pub fn stretch_depth(&self) -> u32 {
        self.max_depth + 1
    }

    /// Batch depths in ascending order, stepping by 2
    pub fn batch_depths(&self) -> impl Iterator<Item = u32> {
        (MIN_DEPTH..=self.max_depth).step_by(2)
    }

    /// Number of batch units
    pub fn batch_count(&self) -> usize {
        ((self.max_depth - MIN_DEPTH) / 2 + 1) as usize
    }

    /// Slots in the result buffer: stretch, one per batch, long-lived
    pub fn buffer_size(&self) -> usize {
        3 + ((self.max_depth - MIN_DEPTH) / 2) as usize
    }

    /// Trees built by the batch at `depth`: 2^(max - depth + MIN_DEPTH)
    pub fn iterations(&self, depth: u32) -> u64 {
        debug_assert!((MIN_DEPTH..=self.max_depth).contains(&depth));
        1u64 << (self.max_depth - depth + MIN_DEPTH)
    }

    /// All units of the run, ordered by result slot
    ///
    /// Slot 0 is the stretch unit, the last slot the long-lived unit, and the
    /// batches fill the slots between in ascending depth.
    pub fn units(&self) -> Vec<WorkUnit> {
        let mut units = Vec::with_capacity(self.buffer_size());
        units.push(WorkUnit::new(UnitKind::Stretch, self.stretch_depth(), 1, 0));

        for (offset, depth) in self.batch_depths().enumerate() {
            units.push(WorkUnit::new(
                UnitKind::Batch,
                depth,
                self.iterations(depth),
                offset + 1,
            ));
        }

        units.push(WorkUnit::new(
            UnitKind::LongLived,
            self.max_depth,
            1,
            self.buffer_size() - 1,
        ));

        debug_assert_eq!(units.len(), self.buffer_size());
        units
    }
}

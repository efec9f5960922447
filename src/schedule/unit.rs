//! Work unit descriptors

use std::fmt;

use crate::tree::TreeStrategy;

/// Role of a unit within a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// One tree one level past the maximum depth
    Stretch,

    /// Many short-lived trees of one depth
    Batch,

    /// One tree at the maximum depth, held until the join
    LongLived,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKind::Stretch => write!(f, "stretch"),
            UnitKind::Batch => write!(f, "batch"),
            UnitKind::LongLived => write!(f, "long-lived"),
        }
    }
}

/// Immutable description of one unit of work
///
/// Created by [`DepthPlan::units`](super::DepthPlan::units); the slot index is
/// fixed at creation and never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkUnit {
    kind: UnitKind,
    depth: u32,
    iterations: u64,
    slot: usize,
}

impl WorkUnit {
    pub(crate) fn new(kind: UnitKind, depth: u32, iterations: u64, slot: usize) -> Self {
        Self {
            kind,
            depth,
            iterations,
            slot,
        }
    }

    /// Unit role
    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Depth of every tree this unit builds
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Trees built (1 for stretch and long-lived)
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Result slot owned by this unit
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Build and count this unit's trees, returning the summed check
    ///
    /// The accumulator is local to the call. Each tree is dropped before the
    /// next is built.
    pub fn execute<S: TreeStrategy>(&self, strategy: &S) -> u64 {
        let mut acc = 0u64;
        for _ in 0..self.iterations {
            let tree = strategy.build(self.depth);
            acc += strategy.count(&tree);
        }
        acc
    }

    /// Render the report line for a finished unit
    pub fn format_check(&self, check: u64) -> String {
        match self.kind {
            UnitKind::Stretch => {
                format!("stretch tree of depth {}\t check: {}", self.depth, check)
            }
            UnitKind::Batch => format!(
                "{}\t trees of depth {}\t check: {}",
                self.iterations, self.depth, check
            ),
            UnitKind::LongLived => {
                format!("long lived tree of depth {}\t check: {}", self.depth, check)
            }
        }
    }
}

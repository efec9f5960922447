//! Work partitioning and concurrent scheduling
//!
//! A run is split into independent units, each owning one result slot:
//! - slot 0: stretch tree (depth max + 1)
//! - slots 1..n-1: one batch per depth MIN_DEPTH, MIN_DEPTH + 2, ..., max
//! - slot n-1: long-lived tree (depth max), counted after the join

mod plan;
mod scheduler;
mod unit;

pub use plan::{DepthPlan, MAX_SUPPORTED_DEPTH, MIN_DEPTH};
pub use scheduler::WorkScheduler;
pub use unit::{UnitKind, WorkUnit};

//! # Binary-tree allocation stress workload
//!
//! Repeatedly builds and discards complete binary trees of varying depth while
//! one tree stays alive for the whole run, putting sustained and transient
//! pressure on the allocator.
//!
//! ## Workload
//!
//! 1. **Stretch tree**: one tree at depth max + 1, counted and dropped
//! 2. **Long-lived tree**: one tree at depth max, held until every other unit joins
//! 3. **Batches**: for depth = 4, 6, ..., max, build 2^(max - depth + 4) trees
//!    and sum their node counts
//!
//! All units run concurrently; the report is always printed in slot order.
//!
//! ## Usage Example
//!
//! ```no_run
//! use treestress::{run, BenchConfig};
//!
//! let report = run(&BenchConfig::new(10))?;
//! for line in &report.lines {
//!     println!("{}", line);
//! }
//! # Ok::<(), treestress::BenchError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod config; // Run configuration
pub mod report; // Result buffer and ordered output
pub mod schedule; // Depth plan and concurrent scheduler
pub mod tree; // Tree construction and counting

// Re-exports for convenience
pub use config::BenchConfig;
pub use report::{Report, ResultAggregator, ResultBuffer};
pub use schedule::{DepthPlan, UnitKind, WorkScheduler, WorkUnit, MAX_SUPPORTED_DEPTH, MIN_DEPTH};
pub use tree::{Arena, ArenaTree, Boxed, StrategyKind, Tree, TreeStrategy};

use thiserror::Error;

/// Errors surfaced around a run
///
/// The workload itself has no failure path; these cover the thread pool, the
/// output sink and internal invariant breaches.
#[derive(Error, Debug)]
pub enum BenchError {
    /// Worker pool could not be created
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// A result slot was never written before aggregation
    #[error("result slot {index} was not filled before the join completed")]
    UnfilledSlot {
        /// Slot index left empty
        index: usize,
    },

    /// Tree strategy name not recognised
    #[error("unknown tree strategy '{0}' (expected 'boxed' or 'arena')")]
    UnknownStrategy(String),

    /// Writing the report failed
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the workload described by `config`
pub fn run(config: &BenchConfig) -> Result<Report, BenchError> {
    match config.strategy {
        StrategyKind::Boxed => WorkScheduler::new(Boxed, config.threads)?.run(config.max_depth),
        StrategyKind::Arena => WorkScheduler::new(Arena, config.threads)?.run(config.max_depth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_strategies_match() {
        let boxed = run(&BenchConfig::new(8).with_threads(2)).unwrap();
        let arena = run(
            &BenchConfig::new(8)
                .with_threads(2)
                .with_strategy(StrategyKind::Arena),
        )
        .unwrap();

        assert_eq!(boxed.lines, arena.lines);
    }

    #[test]
    fn test_error_messages() {
        let err = BenchError::UnfilledSlot { index: 3 };
        assert_eq!(
            err.to_string(),
            "result slot 3 was not filled before the join completed"
        );
    }
}

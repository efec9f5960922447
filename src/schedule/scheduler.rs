//! Concurrent execution of a depth plan
//!
//! Every unit runs as its own task on a rayon pool. Each task owns the write
//! handle for its slot; the scope is the join barrier. The long-lived tree is
//! built inside the scope and counted only after it closes.

use std::time::Instant;

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use super::{DepthPlan, UnitKind};
use crate::report::{Report, ResultBuffer};
use crate::tree::TreeStrategy;
use crate::BenchError;

/// Runs depth plans on a dedicated thread pool
#[derive(Debug)]
pub struct WorkScheduler<S: TreeStrategy> {
    strategy: S,
    pool: ThreadPool,
}

impl<S: TreeStrategy> WorkScheduler<S> {
    /// Create a scheduler with `threads` workers (`None`: one per CPU)
    pub fn new(strategy: S, threads: Option<usize>) -> Result<Self, BenchError> {
        let mut builder = ThreadPoolBuilder::new().thread_name(|i| format!("treestress-{}", i));
        if let Some(threads) = threads {
            builder = builder.num_threads(threads);
        }

        Ok(Self {
            strategy,
            pool: builder.build()?,
        })
    }

    /// Tree strategy used by every unit
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Worker threads in the pool
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run the full workload for a requested maximum depth
    ///
    /// Lines come back in slot order (stretch, batches by ascending depth,
    /// long-lived) whatever order the tasks finish in.
    pub fn run(&self, requested: i32) -> Result<Report, BenchError> {
        let start = Instant::now();
        let plan = DepthPlan::new(requested);

        info!(
            requested,
            max_depth = plan.max_depth(),
            min_depth = plan.min_depth(),
            slots = plan.buffer_size(),
            strategy = self.strategy.name(),
            threads = self.threads(),
            "starting run"
        );

        let mut buffer = ResultBuffer::new(plan.buffer_size());
        let mut long_lived = None;
        let mut concurrent = Vec::with_capacity(plan.buffer_size());

        for (unit, slot) in plan.units().into_iter().zip(buffer.slots_mut()) {
            debug_assert_eq!(unit.slot(), slot.index());
            match unit.kind() {
                UnitKind::LongLived => long_lived = Some((unit, slot)),
                UnitKind::Stretch | UnitKind::Batch => concurrent.push((unit, slot)),
            }
        }

        let long_lived_depth = long_lived.as_ref().map(|(unit, _)| unit.depth());
        let mut retained: Option<S::Tree> = None;
        let strategy = &self.strategy;

        self.pool.scope(|scope| {
            if let Some(depth) = long_lived_depth {
                let retained = &mut retained;
                scope.spawn(move |_| {
                    debug!(depth, "building long-lived tree");
                    *retained = Some(strategy.build(depth));
                });
            }

            for (unit, slot) in concurrent {
                scope.spawn(move |_| {
                    debug!(
                        kind = %unit.kind(),
                        depth = unit.depth(),
                        iterations = unit.iterations(),
                        slot = slot.index(),
                        "unit started"
                    );
                    let check = unit.execute(strategy);
                    debug!(kind = %unit.kind(), slot = slot.index(), check, "unit finished");
                    slot.fill(unit.format_check(check));
                });
            }
        });
        debug!("all units joined");

        // The tree stays alive until this count, after every other unit
        if let (Some((unit, slot)), Some(tree)) = (long_lived, retained.as_ref()) {
            let check = self.strategy.count(tree);
            slot.fill(unit.format_check(check));
        }

        let lines = buffer.into_lines()?;
        drop(retained);

        let elapsed = start.elapsed();
        info!(?elapsed, "run complete");

        Ok(Report {
            plan,
            lines,
            elapsed,
        })
    }
}

//! Test helpers: closed-form expectations and instrumented strategies

#![allow(dead_code)]
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use treestress::{TreeStrategy, MIN_DEPTH};

/// Node count of a complete tree of `depth`: 2^(depth+1) - 1
pub fn nodes_at(depth: u32) -> u64 {
    (1u64 << (depth + 1)) - 1
}

/// Clamped maximum depth for a requested depth
pub fn clamped(requested: i32) -> u32 {
    requested.max(MIN_DEPTH as i32 + 2) as u32
}

/// Expected report lines for a requested depth, computed without building trees
pub fn expected_lines(requested: i32) -> Vec<String> {
    let max = clamped(requested);
    let mut lines = vec![format!(
        "stretch tree of depth {}\t check: {}",
        max + 1,
        nodes_at(max + 1)
    )];

    for depth in (MIN_DEPTH..=max).step_by(2) {
        let iterations = 1u64 << (max - depth + MIN_DEPTH);
        lines.push(format!(
            "{}\t trees of depth {}\t check: {}",
            iterations,
            depth,
            iterations * nodes_at(depth)
        ));
    }

    lines.push(format!(
        "long lived tree of depth {}\t check: {}",
        max,
        nodes_at(max)
    ));
    lines
}

/// Wraps a strategy and stalls the first build at one depth
///
/// Used to force a unit to finish last without changing its result.
#[derive(Debug)]
pub struct DelayedStrategy<S> {
    inner: S,
    depth: u32,
    delay: Duration,
    fired: AtomicBool,
}

impl<S> DelayedStrategy<S> {
    pub fn new(inner: S, depth: u32, delay: Duration) -> Self {
        Self {
            inner,
            depth,
            delay,
            fired: AtomicBool::new(false),
        }
    }

    /// Whether the delay was applied during the run
    pub fn fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }
}

impl<S: TreeStrategy> TreeStrategy for DelayedStrategy<S> {
    type Tree = S::Tree;

    fn name(&self) -> &'static str {
        "delayed"
    }

    fn build(&self, depth: u32) -> S::Tree {
        if depth == self.depth && !self.fired.swap(true, Ordering::SeqCst) {
            thread::sleep(self.delay);
        }
        self.inner.build(depth)
    }

    fn count(&self, tree: &S::Tree) -> u64 {
        self.inner.count(tree)
    }
}

//! Run configuration

use crate::schedule::DepthPlan;
use crate::tree::StrategyKind;

/// Configuration parameters for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Requested maximum depth (clamped by [`DepthPlan`])
    pub max_depth: i32,

    /// Worker threads; `None` uses one per logical CPU
    pub threads: Option<usize>,

    /// Tree representation
    pub strategy: StrategyKind,
}

impl BenchConfig {
    /// Default configuration for a requested depth
    pub fn new(max_depth: i32) -> Self {
        Self {
            max_depth,
            threads: None,
            strategy: StrategyKind::default(),
        }
    }

    /// Fix the worker count
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Select the tree representation
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Plan this configuration will execute
    pub fn plan(&self) -> DepthPlan {
        DepthPlan::new(self.max_depth)
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let config = BenchConfig::new(12)
            .with_threads(3)
            .with_strategy(StrategyKind::Arena);

        assert_eq!(config.max_depth, 12);
        assert_eq!(config.threads, Some(3));
        assert_eq!(config.strategy, StrategyKind::Arena);
        assert_eq!(config.plan().max_depth(), 12);
    }

    #[test]
    fn test_default_is_clamped_minimum() {
        let config = BenchConfig::default();
        assert_eq!(config.threads, None);
        assert_eq!(config.strategy, StrategyKind::Boxed);
        assert_eq!(config.plan().max_depth(), 6);
    }
}

//! Complete binary trees: construction and node counting
//!
//! Two representations share one contract:
//! - [`Tree`]: one heap allocation per node, recursive build and count
//! - [`ArenaTree`]: one allocation per tree, index edges, explicit stacks
//!
//! The scheduler is generic over [`TreeStrategy`] so either can drive a run.

mod arena;
mod node;

pub use arena::ArenaTree;
pub use node::Tree;

use std::fmt;
use std::str::FromStr;

/// Builds and counts complete binary trees
///
/// Implementations are stateless with respect to the trees they produce, so a
/// single strategy value is shared by every concurrent unit.
pub trait TreeStrategy: Send + Sync {
    /// Tree representation produced by this strategy
    type Tree: Send;

    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Allocate a complete tree of `depth`
    fn build(&self, depth: u32) -> Self::Tree;

    /// Node count of a tree produced by [`TreeStrategy::build`]
    fn count(&self, tree: &Self::Tree) -> u64;
}

/// Pointer-per-node trees ([`Tree`])
#[derive(Debug, Clone, Copy, Default)]
pub struct Boxed;

impl TreeStrategy for Boxed {
    type Tree = Tree;

    fn name(&self) -> &'static str {
        "boxed"
    }

    fn build(&self, depth: u32) -> Tree {
        Tree::build(depth)
    }

    fn count(&self, tree: &Tree) -> u64 {
        tree.count()
    }
}

/// Single-allocation trees ([`ArenaTree`])
#[derive(Debug, Clone, Copy, Default)]
pub struct Arena;

impl TreeStrategy for Arena {
    type Tree = ArenaTree;

    fn name(&self) -> &'static str {
        "arena"
    }

    fn build(&self, depth: u32) -> ArenaTree {
        ArenaTree::build(depth)
    }

    fn count(&self, tree: &ArenaTree) -> u64 {
        tree.count()
    }
}

/// Runtime selector for the built-in strategies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// [`Boxed`]
    #[default]
    Boxed,

    /// [`Arena`]
    Arena,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Boxed => write!(f, "boxed"),
            StrategyKind::Arena => write!(f, "arena"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = crate::BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "boxed" => Ok(StrategyKind::Boxed),
            "arena" => Ok(StrategyKind::Arena),
            other => Err(crate::BenchError::UnknownStrategy(other.to_string())),
        }
    }
}

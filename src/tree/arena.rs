//! Arena-backed complete binary tree
//!
//! One contiguous node vector per tree, children referenced by index.
//! Build and count both run over an explicit stack, so depth is bounded by
//! memory rather than by the thread's call stack.

/// Index of a node inside its arena
type NodeIndex = u32;

/// Arena slot: children are present together or not at all
///
/// Pairing both edges in one `Option` is how the arena encodes completeness:
/// the leaf test is a single check, like the left-edge check of [`Tree`].
///
/// [`Tree`]: crate::tree::Tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ArenaNode {
    children: Option<(NodeIndex, NodeIndex)>,
}

/// Complete binary tree stored in a single allocation
#[derive(Debug, PartialEq, Eq)]
pub struct ArenaTree {
    /// Node storage, root at index 0
    nodes: Vec<ArenaNode>,
}

impl ArenaTree {
    /// Allocate a complete tree of `depth`
    ///
    /// Children are appended as a sibling pair when their parent is expanded,
    /// and the left sibling is expanded first. The pending stack holds at most
    /// `depth + 1` entries at a time.
    pub fn build(depth: u32) -> Self {
        let mut nodes = Vec::with_capacity(Self::node_count_for(depth));
        nodes.push(ArenaNode::default());

        let mut pending: Vec<(NodeIndex, u32)> = Vec::with_capacity(depth as usize + 1);
        pending.push((0, depth));

        while let Some((index, remaining)) = pending.pop() {
            if remaining == 0 {
                continue;
            }

            let left = nodes.len() as NodeIndex;
            nodes.push(ArenaNode::default());
            let right = nodes.len() as NodeIndex;
            nodes.push(ArenaNode::default());
            nodes[index as usize].children = Some((left, right));

            // Right pushed first so the left subtree is expanded next
            pending.push((right, remaining - 1));
            pending.push((left, remaining - 1));
        }

        Self { nodes }
    }

    /// Count nodes by walking the edges from the root
    ///
    /// Visits every node rather than returning the arena length, so the
    /// traversal cost matches the pointer-based tree.
    pub fn count(&self) -> u64 {
        let mut stack: Vec<NodeIndex> = vec![0];
        let mut count = 0u64;

        while let Some(index) = stack.pop() {
            count += 1;
            if let Some((left, right)) = self.nodes[index as usize].children {
                stack.push(right);
                stack.push(left);
            }
        }

        count
    }

    /// Number of slots allocated in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Arena always holds at least the root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 2^(depth+1) - 1, saturating for depths past the address space
    fn node_count_for(depth: u32) -> usize {
        1usize
            .checked_shl(depth + 1)
            .map_or(usize::MAX, |n| n - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tree;

    #[test]
    fn test_arena_matches_boxed() {
        for depth in 0..14 {
            let arena = ArenaTree::build(depth);
            assert_eq!(arena.count(), Tree::build(depth).count());
            assert_eq!(arena.len() as u64, arena.count());
        }
    }

    #[test]
    fn test_sibling_pair_layout() {
        // Depth 2: root, L, R, LL, LR, RL, RR
        let arena = ArenaTree::build(2);
        assert_eq!(arena.nodes[0].children, Some((1, 2)));
        assert_eq!(arena.nodes[1].children, Some((3, 4)));
        assert_eq!(arena.nodes[2].children, Some((5, 6)));
        assert!(arena.nodes[3..].iter().all(|n| n.children.is_none()));
        assert_eq!(arena.len(), 7);
    }

    #[test]
    fn test_siblings_are_adjacent() {
        let arena = ArenaTree::build(5);
        for node in &arena.nodes {
            if let Some((left, right)) = node.children {
                assert_eq!(right, left + 1);
            }
        }
    }

    #[test]
    fn test_leaf_arena() {
        let arena = ArenaTree::build(0);
        assert_eq!(arena.len(), 1);
        assert!(!arena.is_empty());
        assert_eq!(arena.count(), 1);
    }
}

//! Pointer-based complete binary tree
//!
//! Every internal node owns two heap-allocated children.
//! Leaves own nothing. No payload is stored: the node count is the checksum.

/// Binary tree node with two exclusively owned edges
///
/// Trees produced by [`Tree::build`] are complete: every node above the
/// requested depth has both children, every node at that depth has none.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Tree {
    /// Left edge (absent for leaves)
    left: Option<Box<Tree>>,

    /// Right edge (absent for leaves)
    right: Option<Box<Tree>>,
}

impl Tree {
    /// Single leaf node
    pub fn leaf() -> Self {
        Self {
            left: None,
            right: None,
        }
    }

    /// Allocate a complete tree of `depth`
    ///
    /// Depth 0 is a single leaf. Recursion depth equals `depth`.
    pub fn build(depth: u32) -> Self {
        if depth == 0 {
            return Self::leaf();
        }

        Self {
            left: Some(Box::new(Self::build(depth - 1))),
            right: Some(Box::new(Self::build(depth - 1))),
        }
    }

    /// Count the nodes of a complete tree
    ///
    /// Only the left edge decides the leaf case. An incomplete tree (left
    /// present, right absent) is not supported and undercounts.
    pub fn count(&self) -> u64 {
        let Some(left) = self.left.as_deref() else {
            return 1;
        };
        debug_assert!(self.right.is_some(), "tree is not complete");

        1 + left.count() + self.right.as_deref().map_or(0, Tree::count)
    }

    /// Check if leaf (left edge absent)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none()
    }

    /// Borrow both children, if present
    pub fn children(&self) -> Option<(&Tree, &Tree)> {
        match (self.left.as_deref(), self.right.as_deref()) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => None,
        }
    }

    /// Depth measured along the left spine
    pub fn depth(&self) -> u32 {
        let mut node = self;
        let mut depth = 0;

        while let Some(left) = node.left.as_deref() {
            node = left;
            depth += 1;
        }

        depth
    }
}

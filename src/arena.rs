use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// Fallback capacity for trees built by hand rather than by the generator.
pub const DEFAULT_NODE_CAPACITY: usize = 64;

/// Binary tree node stored in the arena.
#[derive(Debug)]
pub struct TreeNode {
    /// Integer payload, assigned once at creation
    pub value: u32,
    /// Distance from the root; root is 0, child is parent + 1
    pub depth: usize,
    /// Horizontal distance from the root (left −1, right +1 per edge).
    /// Only meaningful during a top-view pass.
    pub offset: i32,
    /// Index of the left child in the arena
    pub left: Option<Index>,
    /// Index of the right child in the arena
    pub right: Option<Index>,
}

impl TreeNode {
    fn new(value: u32, depth: usize) -> Self {
        Self {
            value,
            depth,
            offset: 0,
            left: None,
            right: None,
        }
    }
}

/// Arena-based binary tree.
///
/// The arena owns every node uniformly; child links are plain indices, so
/// temporary relations (like the Morris back-thread) are ordinary index
/// writes rather than ownership transfers. The arena is bounded: inserting
/// beyond the capacity chosen at construction fails with
/// [`TreeError::AllocationFailure`] instead of growing.
#[derive(Debug)]
pub struct TreeArena {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the root node, None for an empty tree
    root: Option<Index>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_NODE_CAPACITY)
    }
}

impl TreeArena {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    fn try_alloc(&mut self, node: TreeNode) -> TreeResult<Index> {
        self.arena
            .try_insert(node)
            .map_err(|_| TreeError::AllocationFailure {
                requested: self.arena.len() + 1,
                capacity: self.arena.capacity(),
            })
    }

    /// Creates the root node with depth 0.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_root(&mut self, value: u32) -> TreeResult<Index> {
        debug_assert!(self.root.is_none(), "root already present");
        let idx = self.try_alloc(TreeNode::new(value, 0))?;
        self.root = Some(idx);
        Ok(idx)
    }

    /// Attaches a left child to `parent`, depth = parent depth + 1.
    ///
    /// The node is allocated before the parent link is written, so a failed
    /// insert leaves the tree untouched.
    ///
    /// # Panics
    /// Panics if `parent` is not an index of this arena.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_left(&mut self, parent: Index, value: u32) -> TreeResult<Index> {
        let depth = self.arena[parent].depth + 1;
        let idx = self.try_alloc(TreeNode::new(value, depth))?;
        self.arena[parent].left = Some(idx);
        Ok(idx)
    }

    /// Attaches a right child to `parent`, depth = parent depth + 1.
    ///
    /// # Panics
    /// Panics if `parent` is not an index of this arena.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_right(&mut self, parent: Index, value: u32) -> TreeResult<Index> {
        let depth = self.arena[parent].depth + 1;
        let idx = self.try_alloc(TreeNode::new(value, depth))?;
        self.arena[parent].right = Some(idx);
        Ok(idx)
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode> {
        self.arena.get_mut(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Number of levels in the tree (max recorded depth + 1).
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        self.arena
            .iter()
            .map(|(_, node)| node.depth)
            .max()
            .map_or(0, |d| d + 1)
    }

    /// Post-order teardown: destroy left, destroy right, remove the node.
    ///
    /// Every node is removed from the arena exactly once; the post-order
    /// value sequence is returned so callers can observe the free order.
    /// A second call (or a call on an empty tree) is a no-op. Must not be
    /// called while a Morris pass holds a live thread; the traversals in
    /// this crate always restore threads before returning.
    #[instrument(level = "debug", skip(self))]
    pub fn teardown(&mut self) -> Vec<u32> {
        let mut freed = Vec::with_capacity(self.arena.len());
        let mut stack = Vec::new();
        if let Some(root) = self.root.take() {
            stack.push((root, false));
        }
        while let Some((idx, visited)) = stack.pop() {
            if visited {
                if let Some(node) = self.arena.remove(idx) {
                    freed.push(node.value);
                }
            } else if let Some(node) = self.arena.get(idx) {
                let (left, right) = (node.left, node.right);
                stack.push((idx, true));
                if let Some(r) = right {
                    stack.push((r, false));
                }
                if let Some(l) = left {
                    stack.push((l, false));
                }
            }
        }
        freed
    }
}

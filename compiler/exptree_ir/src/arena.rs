//! Arena storage for expression trees.

use crate::{BinaryOp, ExprId};

/// A single tree node.
///
/// An internal node always has both children. A node is a leaf iff it is a
/// `Literal`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Numeric literal text, exactly as the tokenizer produced it.
    Literal(String),
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
}

/// Contiguous node storage.
///
/// Nodes are only ever appended, and a binary node can only be allocated
/// after both of its children, so every child id is smaller than its
/// parent id.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct ExprArena {
    nodes: Vec<ExprKind>,
}

impl ExprArena {
    pub fn new() -> Self {
        ExprArena { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ExprArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Allocate a leaf.
    pub fn alloc_literal(&mut self, text: impl Into<String>) -> ExprId {
        self.alloc(ExprKind::Literal(text.into()))
    }

    /// Allocate an internal node over two existing nodes.
    ///
    /// Returns `None` if either child was not allocated in this arena.
    pub fn alloc_binary(
        &mut self,
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    ) -> Option<ExprId> {
        if !self.contains(left) || !self.contains(right) {
            return None;
        }
        Some(self.alloc(ExprKind::Binary { op, left, right }))
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "an expression with more than u32::MAX nodes cannot be tokenized in memory"
    )]
    fn alloc(&mut self, kind: ExprKind) -> ExprId {
        let id = ExprId::new(self.nodes.len() as u32);
        self.nodes.push(kind);
        id
    }

    #[inline]
    pub fn get(&self, id: ExprId) -> &ExprKind {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn contains(&self, id: ExprId) -> bool {
        id.index() < self.nodes.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Every allocated id in allocation order, so children come before parents.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "alloc never hands out an index above u32::MAX"
    )]
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = ExprId> + ExactSizeIterator {
        (0..self.nodes.len()).map(|index| ExprId::new(index as u32))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A complete expression tree: an arena plus the id of its root.
///
/// The tree is read-only once built. Dropping it releases every node in one
/// deallocation.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ExprTree {
    arena: ExprArena,
    root: ExprId,
}

impl ExprTree {
    /// Wrap an arena and its root, or `None` if `root` is not in `arena`.
    pub fn new(arena: ExprArena, root: ExprId) -> Option<Self> {
        arena.contains(root).then_some(ExprTree { arena, root })
    }

    #[inline]
    pub fn root(&self) -> ExprId {
        self.root
    }

    #[inline]
    pub fn get(&self, id: ExprId) -> &ExprKind {
        self.arena.get(id)
    }

    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    /// The node's value text: literal text for a leaf, operator symbol otherwise.
    pub fn value(&self, id: ExprId) -> &str {
        match self.get(id) {
            ExprKind::Literal(text) => text,
            ExprKind::Binary { op, .. } => op.symbol(),
        }
    }

    #[inline]
    pub fn is_leaf(&self, id: ExprId) -> bool {
        matches!(self.get(id), ExprKind::Literal(_))
    }

    /// `(left, right)` for an internal node, `None` for a leaf.
    pub fn children(&self, id: ExprId) -> Option<(ExprId, ExprId)> {
        match self.get(id) {
            ExprKind::Binary { left, right, .. } => Some((*left, *right)),
            ExprKind::Literal(_) => None,
        }
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of nodes on the longest root-to-leaf path.
    ///
    /// Computed in one forward pass: children precede parents in the arena.
    pub fn depth(&self) -> usize {
        let mut depths: Vec<usize> = Vec::with_capacity(self.arena.len());
        for node in &self.arena.nodes {
            let depth = match node {
                ExprKind::Literal(_) => 1,
                ExprKind::Binary { left, right, .. } => {
                    1 + depths[left.index()].max(depths[right.index()])
                }
            };
            depths.push(depth);
        }
        depths[self.root.index()]
    }
}

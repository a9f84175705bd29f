use common::Symbol;
use core::fmt;

/// Position of a node in the [`NodeStore`](crate::tree::NodeStore).
/// Handles stay valid for the lifetime of the store, nodes are never moved or removed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// a symbol, never has children
    Leaf(Symbol),
    /// merge of two subtrees, never has a symbol
    Internal { left: NodeId, right: NodeId },
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
    /// the number of occurences of all symbols below this node
    pub(crate) weight: u64,
    pub(crate) kind: NodeKind,
}

impl Node {
    #[inline]
    pub fn weight(&self) -> u64 {
        self.weight
    }
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }
    #[inline]
    pub fn symbol(&self) -> Option<Symbol> {
        match self.kind {
            NodeKind::Leaf(symbol) => Some(symbol),
            NodeKind::Internal { .. } => None,
        }
    }
    /// (left, right) for internal nodes
    #[inline]
    pub fn children(&self) -> Option<(NodeId, NodeId)> {
        match self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Internal { left, right } => Some((left, right)),
        }
    }
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NodeKind::Leaf(symbol) => f.write_fmt(format_args!(
                "Node{{ symbol:{:?} weight:{} }}",
                symbol, self.weight
            )),
            NodeKind::Internal { left, right } => f.write_fmt(format_args!(
                "Node{{ weight:{} left:{:?} right:{:?} }}",
                self.weight, left, right
            )),
        }
    }
}

use super::tree_node::{Node, NodeId, NodeKind};
use crate::error::{HuffError, Resource, Result};
use common::Symbol;

/// Append-only arena for the nodes of one tree, bounded by a fixed capacity.
///
/// Leaves are created first, internal nodes are appended by the builder. A node only ever
/// references nodes created before it, so the tree can't contain cycles.
#[derive(Debug, Clone)]
pub struct NodeStore {
    nodes: Vec<Node>,
    capacity: usize,
}

impl NodeStore {
    pub fn with_capacity(capacity: usize) -> Self {
        NodeStore {
            nodes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push_leaf(&mut self, symbol: Symbol, weight: u64) -> Result<NodeId> {
        self.push(Node {
            weight,
            kind: NodeKind::Leaf(symbol),
        })
    }

    /// Appends the parent of `left` and `right`, its weight is the sum of both children.
    pub fn push_internal(&mut self, left: NodeId, right: NodeId) -> Result<NodeId> {
        let weight = self.weight(left).saturating_add(self.weight(right));
        self.push(Node {
            weight,
            kind: NodeKind::Internal { left, right },
        })
    }

    fn push(&mut self, node: Node) -> Result<NodeId> {
        if self.nodes.len() >= self.capacity {
            return Err(HuffError::CapacityExceeded {
                resource: Resource::NodeStore,
                capacity: self.capacity,
            });
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        Ok(id)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
    #[inline]
    pub fn weight(&self, id: NodeId) -> u64 {
        self.nodes[id.index()].weight
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(pos, node)| (NodeId(pos as u32), node))
    }
}

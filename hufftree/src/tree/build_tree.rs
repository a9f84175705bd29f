use log::*;

use crate::error::Result;
use crate::heap::MinHeap;
use crate::tree::{NodeId, NodeStore, Tree};
use crate::{MAX_NODES, MAX_QUEUE};
use common::{CountsTable, Symbol};

/// Capacities of the node store and the priority queue used while building a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeLimits {
    pub max_nodes: usize,
    pub max_queue: usize,
}

impl Default for TreeLimits {
    /// enough for every letter of the alphabet
    fn default() -> Self {
        TreeLimits {
            max_nodes: MAX_NODES,
            max_queue: MAX_QUEUE,
        }
    }
}

impl TreeLimits {
    /// the exact capacities needed for `num_leaves` symbols
    pub fn for_leaves(num_leaves: usize) -> Self {
        TreeLimits {
            max_nodes: (2 * num_leaves).saturating_sub(1),
            max_queue: num_leaves,
        }
    }
}

/// creates a huffman tree from the counts of each letter
#[inline]
pub fn build_tree(counts: &CountsTable) -> Result<Tree> {
    build_tree_with_limits(counts, TreeLimits::default())
}

/// creates a huffman tree, failing with `CapacityExceeded` if `limits` are too small
pub fn build_tree_with_limits(counts: &CountsTable, limits: TreeLimits) -> Result<Tree> {
    let mut nodes = NodeStore::with_capacity(limits.max_nodes);
    let num_leaves = create_leaf_nodes(counts, &mut nodes)?;
    let root_node = build_encoding_tree(&mut nodes, limits.max_queue)?;
    debug!(
        "built tree with {} leaves and {} nodes, root {:?}",
        num_leaves,
        nodes.len(),
        root_node
    );
    Ok(Tree {
        nodes,
        root_node,
        num_leaves,
    })
}

/// Adds a leaf for every symbol with a count > 0, in alphabet order. Returns the number of leaves.
pub fn create_leaf_nodes(counts: &CountsTable, nodes: &mut NodeStore) -> Result<usize> {
    let mut num_leaves = 0;
    for (symbol, count) in Symbol::all().zip(counts.iter()) {
        if *count == 0 {
            continue;
        }
        nodes.push_leaf(symbol, *count)?;
        num_leaves += 1;
    }
    debug!("created {} leaf nodes", num_leaves);
    Ok(num_leaves)
}

/// Merges all nodes of `nodes`, which must all be leaves, into a single tree.
///
/// The two lightest nodes are popped from the queue, the first one becomes the left child and
/// the second one the right child of a new parent, which is pushed back, until one node is
/// left. That node is the root.
///
/// No leaves means no root. A single leaf is the root itself and no parent is created.
pub fn build_encoding_tree(nodes: &mut NodeStore, max_queue: usize) -> Result<Option<NodeId>> {
    let num_leaves = nodes.len();
    debug_assert!(nodes.iter().all(|(_, node)| node.is_leaf()));
    match num_leaves {
        0 => return Ok(None),
        1 => return Ok(Some(NodeId(0))),
        _ => {}
    }

    let mut heap = MinHeap::with_capacity(max_queue);
    for pos in 0..num_leaves {
        heap.push(NodeId(pos as u32), &*nodes)?;
    }

    while heap.len() > 1 {
        let node1_pos = heap.pop(&*nodes)?;
        let node2_pos = heap.pop(&*nodes)?;
        let parent = nodes.push_internal(node1_pos, node2_pos)?;
        trace!(
            "merged {:?} and {:?} into {:?} weight {}",
            node1_pos,
            node2_pos,
            parent,
            nodes.weight(parent)
        );
        heap.push(parent, &*nodes)?;
    }

    heap.pop(&*nodes).map(Some)
}

use super::node_store::NodeStore;
use super::tree_node::{Node, NodeId, NodeKind};
use crate::error::{HuffError, Result};
use crate::tree::render_tree::render_plan_to;
use common::Symbol;

#[derive(Debug, Clone)]
pub struct Tree {
    /// leaves come first, in alphabet order. parents are appended behind them in merge order
    pub(crate) nodes: NodeStore,
    /// `None` when no symbol was counted
    pub(crate) root_node: Option<NodeId>,
    pub(crate) num_leaves: usize,
}

impl Tree {
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root_node
    }
    pub fn get_root_node(&self) -> Option<&Node> {
        self.root_node.map(|root| self.nodes.get(root))
    }
    #[inline]
    pub fn get_node(&self, id: NodeId) -> &Node {
        self.nodes.get(id)
    }
    pub fn node_store(&self) -> &NodeStore {
        &self.nodes
    }
    #[inline]
    pub fn num_leaves(&self) -> usize {
        self.num_leaves
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root_node.is_none()
    }

    /// Length of the longest code. A single symbol still gets a one bit code.
    pub fn get_depth(&self) -> usize {
        let mut max_depth = 0;
        self.walk_leaves(&mut |_node, depth| max_depth = max_depth.max(depth));
        max_depth
    }

    /// Sum of `weight * code length` over all leaves, the size of the encoded message in bits.
    /// Saturates at `u64::MAX`, like the weights of the parents do.
    pub fn weighted_path_length(&self) -> u64 {
        let mut size_in_bits = 0_u64;
        self.walk_leaves(&mut |node, depth| {
            size_in_bits = size_in_bits.saturating_add(node.weight.saturating_mul(depth as u64));
        });
        size_in_bits
    }

    /// returns estimated encoded size in byte
    pub fn estimate_encoded_size(&self) -> usize {
        let size_in_bits = self.weighted_path_length();
        (size_in_bits / 8 + u64::from(size_in_bits % 8 != 0)) as usize
    }

    /// calls `fun` with every leaf and its code length
    fn walk_leaves<F>(&self, fun: &mut F)
    where
        F: FnMut(&Node, usize),
    {
        let root = match self.root_node {
            Some(root) => root,
            None => return,
        };
        let root_node = self.nodes.get(root);
        if root_node.is_leaf() {
            fun(root_node, 1);
            return;
        }
        self.walk_tree(root, &mut |node, _transitions, depth| {
            if node.is_leaf() {
                fun(node, depth);
            }
        });
    }

    /// Visits every node below `start_node_pos` depth first, left before right.
    /// `fun` gets the node, the path from the start node (left = 0, right = 1, last step in
    /// the lowest bit) and the depth.
    ///
    /// Depth is bounded by the number of leaves, so the recursion is too.
    pub fn walk_tree<F>(&self, start_node_pos: NodeId, fun: &mut F)
    where
        F: FnMut(&Node, u32, usize),
    {
        self.walk_tree_internal(&mut 0, &mut 0, start_node_pos, fun);
    }
    fn walk_tree_internal<F>(
        &self,
        depth: &mut usize,
        transitions: &mut u32,
        start_node_pos: NodeId,
        fun: &mut F,
    ) where
        F: FnMut(&Node, u32, usize),
    {
        if let NodeKind::Internal { left, right } = self.nodes.get(start_node_pos).kind {
            *depth += 1;
            *transitions <<= 1;
            fun(self.nodes.get(left), *transitions, *depth);
            self.walk_tree_internal(depth, transitions, left, fun);
            *transitions >>= 1;
            *depth -= 1;

            *depth += 1;
            *transitions <<= 1;
            *transitions |= 1;
            fun(self.nodes.get(right), *transitions, *depth);
            self.walk_tree_internal(depth, transitions, right, fun);
            *transitions >>= 1;
            *depth -= 1;
        }
    }

    /// Decodes a string of '0' and '1' by walking the tree from the root for every code.
    ///
    /// A tree with a single leaf has the code "0" for its symbol.
    pub fn decode(&self, bits: &str) -> Result<Vec<Symbol>> {
        let mut out = vec![];
        let root = match self.root_node {
            Some(root) => root,
            None if bits.is_empty() => return Ok(out),
            None => return Err(HuffError::EmptyTree),
        };

        if let Some(symbol) = self.nodes.get(root).symbol() {
            for bit in bits.chars() {
                match bit {
                    '0' => out.push(symbol),
                    other => return Err(HuffError::InvalidBit(other)),
                }
            }
            return Ok(out);
        }

        let mut current = root;
        for bit in bits.chars() {
            // current is always an internal node, leaves jump back to the root
            let (left, right) = match self.nodes.get(current).kind {
                NodeKind::Internal { left, right } => (left, right),
                NodeKind::Leaf(_) => unreachable!("walked onto a leaf without emitting it"),
            };
            current = match bit {
                '0' => left,
                '1' => right,
                other => return Err(HuffError::InvalidBit(other)),
            };
            if let Some(symbol) = self.nodes.get(current).symbol() {
                out.push(symbol);
                current = root;
            }
        }
        if current != root {
            return Err(HuffError::TruncatedCode);
        }
        Ok(out)
    }

    /// Renders the tree in the graphviz dot format
    pub fn render_dot(&self) -> std::io::Result<String> {
        let mut buf = Vec::new();
        dot::render(self, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render_plan_to(self, f)
    }
}

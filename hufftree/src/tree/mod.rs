pub mod build_tree;
mod node_store;
pub mod render_tree;
mod tree;
mod tree_node;
pub use build_tree::{build_tree, build_tree_with_limits, TreeLimits};
pub use node_store::NodeStore;
pub use tree::Tree;
pub use tree_node::{Node, NodeId, NodeKind};

/// we can calculate the minimum depth of a huffman tree, by its binary tree properties.
/// A symbol is always a leaf (to uphold the prefix characteristic), therefore the maximum number of symbols is 2^depth (perfectly balanced tree)
#[inline]
pub fn minimum_tree_depth(num_symbols: usize) -> usize {
    let mut min_depth = 0;
    while (1_usize << min_depth) < num_symbols {
        min_depth += 1;
    }
    min_depth.max(1)
}

#[test]
fn test_minimum_depth() {
    assert_eq!(minimum_tree_depth(0), 1);
    assert_eq!(minimum_tree_depth(1), 1);
    assert_eq!(minimum_tree_depth(2), 1);
    assert_eq!(minimum_tree_depth(3), 2);
    assert_eq!(minimum_tree_depth(4), 2);
    assert_eq!(minimum_tree_depth(5), 3);
    assert_eq!(minimum_tree_depth(8), 3);
    assert_eq!(minimum_tree_depth(9), 4);
    assert_eq!(minimum_tree_depth(26), 5);
}

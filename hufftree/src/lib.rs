/*!
hufftree builds huffman prefix codes for the lowercase letters `a` to `z`.

The counts of each letter become the leaves of a tree. Leaves and parents live in a bounded
[`NodeStore`](tree::NodeStore) and are referenced by index, the [`MinHeap`](heap::MinHeap)
only holds those indices and looks up the weights in the store. The two lightest nodes are
merged until a single root is left, walking from the root to each leaf gives the code of
its letter.

```
use hufftree::{build_tree, count_letters, tree_to_table};

let counts = count_letters("abracadabra");
let tree = build_tree(&counts).unwrap();
let table = tree_to_table(&tree);
assert_eq!(table.len(), 5);
assert_eq!(tree.weighted_path_length(), 23);
```
*/

pub mod code_table;
pub mod encode;
mod error;
pub mod heap;
pub mod tree;

pub use crate::code_table::{tree_to_table, Code, CodeTable};
pub use crate::encode::{encode, encode_bytes, encode_text, EncodeOptions, MissingSymbolPolicy};
pub use crate::error::{HuffError, Resource, Result};
pub use crate::tree::{build_tree, build_tree_with_limits, Tree, TreeLimits};
pub use common::{count_letter_bytes, count_letters, CountsTable, Symbol, ALPHABET_SIZE};

/// Maximum number of nodes in a tree, leaves for the whole alphabet plus their parents
pub const MAX_NODES: usize = 2 * ALPHABET_SIZE - 1;
/// The queue never holds more entries than there are leaves
pub const MAX_QUEUE: usize = ALPHABET_SIZE;

/// builds the tree for `counts` and converts it into a code table
pub fn build_code_table(counts: &CountsTable) -> Result<(Tree, CodeTable)> {
    let tree = build_tree(counts)?;
    let table = tree_to_table(&tree);
    Ok((tree, table))
}

#[cfg(test)]
mod tests {

    use crate::code_table::test_prefix_property;
    use crate::tree::NodeId;
    use crate::*;
    use common::counts_from_pairs;
    use std::collections::HashSet;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Setup function that is only run once, even if called multiple times.
    fn setup() {
        INIT.call_once(|| {
            env_logger::init();
        });
    }

    fn sym(ch: char) -> Symbol {
        Symbol::from_char(ch).unwrap()
    }

    fn textbook_counts() -> CountsTable {
        counts_from_pairs(vec![
            (sym('a'), 5),
            (sym('b'), 9),
            (sym('c'), 12),
            (sym('d'), 13),
            (sym('e'), 16),
            (sym('f'), 45),
        ])
    }

    #[test]
    fn textbook_example() {
        setup();
        let (tree, table) = build_code_table(&textbook_counts()).unwrap();
        assert_eq!(table.get(sym('f')).unwrap().len(), 1);
        assert_eq!(table.get(sym('a')).unwrap().len(), 4);
        assert_eq!(table.get(sym('b')).unwrap().len(), 4);
        assert_eq!(table.get(sym('c')).unwrap().len(), 3);
        assert_eq!(table.get(sym('d')).unwrap().len(), 3);
        assert_eq!(table.get(sym('e')).unwrap().len(), 3);
        assert_eq!(table.weighted_path_length(&textbook_counts()), 224);
        assert_eq!(tree.weighted_path_length(), 224);
        assert_eq!(tree.estimate_encoded_size(), 28);
        assert_eq!(tree.get_depth(), 4);
        validate_tree(&tree);
    }

    #[test]
    fn single_symbol() {
        let (tree, table) = build_code_table(&counts_from_pairs(vec![(sym('x'), 1)])).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(sym('x')).unwrap().to_string(), "0");
        assert_eq!(tree.weighted_path_length(), 1);
        assert_eq!(tree.decode("00").unwrap(), vec![sym('x'), sym('x')]);
    }

    #[test]
    fn single_symbol_many_counts() {
        let (_tree, table) = build_code_table(&count_letters("qqqqqqqqqqq")).unwrap();
        assert_eq!(table.get(sym('q')).unwrap().to_string(), "0");
    }

    #[test]
    fn empty_input() {
        let (tree, table) = build_code_table(&count_letters("")).unwrap();
        assert!(tree.is_empty());
        assert!(table.is_empty());
        assert_eq!(tree.weighted_path_length(), 0);
        assert_eq!(tree.decode("").unwrap(), vec![]);
    }

    #[test]
    fn simple_balanced() {
        let (tree, table) = build_code_table(&count_letters("abcd")).unwrap();
        for (_symbol, code) in table.iter() {
            assert_eq!(code.len(), 2);
        }
        test_prefix_property(&table);
        validate_tree(&tree);
    }

    #[test]
    fn balanced_tree_distribution() {
        let all_letters: String = Symbol::all().map(|s| s.as_char()).collect();
        let (tree, table) = build_code_table(&count_letters(&all_letters)).unwrap();
        assert_eq!(table.len(), ALPHABET_SIZE);
        // 26 equal weights: 6 codes of 4 bits, 20 codes of 5 bits
        assert_eq!(table.iter().filter(|(_, code)| code.len() == 4).count(), 6);
        assert_eq!(table.iter().filter(|(_, code)| code.len() == 5).count(), 20);
        assert_eq!(tree.node_store().len(), MAX_NODES);
        validate_tree(&tree);
    }

    #[test]
    fn zero_counts_get_no_code() {
        let (_tree, table) = build_code_table(&count_letters("hello")).unwrap();
        for symbol in Symbol::all() {
            let present = "helo".contains(symbol.as_char());
            assert_eq!(table.get(symbol).is_some(), present, "{}", symbol);
        }
    }

    fn test_fibonacci(fibo_counts: &[u64]) {
        let counts = counts_from_pairs(
            fibo_counts
                .iter()
                .enumerate()
                .map(|(index, count)| (Symbol::from_index(index).unwrap(), *count)),
        );
        let tree = build_tree(&counts).unwrap();

        let root = tree.get_root_node().unwrap();
        let (root_left, _root_right) = root.children().unwrap();
        // in the fibonacci case the biggest symbol count should be directly under the root node
        assert_eq!(
            tree.get_node(root_left).symbol(),
            Symbol::from_index(fibo_counts.len() - 1).ok()
        );
        assert_eq!(tree.get_depth(), fibo_counts.len() - 1);

        validate_tree(&tree);
    }

    #[test]
    fn long_tree_distribution() {
        test_fibonacci(&[1_u64, 1, 2, 3]);
        test_fibonacci(&[1_u64, 1, 2, 3, 5]);
        test_fibonacci(&[1_u64, 1, 2, 3, 5, 8]);
        test_fibonacci(&[1_u64, 1, 2, 3, 5, 8, 13]);
        test_fibonacci(&[1_u64, 1, 2, 3, 5, 8, 13, 21]);
    }

    fn validate_tree(tree: &Tree) {
        let root = tree.root().unwrap();
        // check all nodes are connected
        let mut all_nodes = tree
            .node_store()
            .iter()
            .map(|(id, _)| id)
            .collect::<HashSet<NodeId>>();
        all_nodes.remove(&root);
        let mut visited = vec![];
        tree.walk_tree(root, &mut |node, _transitions, _depth| {
            visited.push(*node);
        });
        assert_eq!(visited.len(), tree.node_store().len() - 1);
        for (id, node) in tree.node_store().iter() {
            if visited.contains(node) {
                all_nodes.remove(&id);
            }
        }
        assert_eq!(all_nodes.len(), 0);

        // check count of childs are always lower
        tree.walk_tree(root, &mut |node, _transitions, _depth| {
            if let Some((left, right)) = node.children() {
                assert!(tree.get_node(left).weight() < node.weight());
                assert!(tree.get_node(right).weight() < node.weight());
                assert_eq!(
                    tree.get_node(left).weight() + tree.get_node(right).weight(),
                    node.weight()
                );
            }
        });
        test_prefix_property(&tree_to_table(tree));
    }

    fn test_tree(text: &str) -> Tree {
        let counts = count_letters(text);
        let (tree, table) = build_code_table(&counts).unwrap();
        validate_tree(&tree);

        let bits = encode_text(text, &table, EncodeOptions::default()).unwrap();
        assert_eq!(bits.len() as u64, tree.weighted_path_length());
        let decoded: String = tree.decode(&bits).unwrap().iter().map(|s| s.as_char()).collect();
        let expected: String = common::letters(text).map(|s| s.as_char()).collect();
        assert_eq!(decoded, expected);
        tree
    }

    #[test]
    fn test_pangram() {
        let tree = test_tree("The quick brown fox jumps over the lazy dog");
        assert_eq!(tree.num_leaves(), ALPHABET_SIZE);
    }

    #[test]
    fn test_prose() {
        test_tree(
            "It was the best of times, it was the worst of times, it was the age of wisdom, \
             it was the age of foolishness, it was the epoch of belief, it was the epoch of \
             incredulity, it was the season of Light, it was the season of Darkness",
        );
    }

    #[test]
    fn test_mississippi() {
        let tree = test_tree("mississippi");
        assert_eq!(tree.num_leaves(), 4);
        assert_eq!(tree.weighted_path_length(), 21);
    }
}

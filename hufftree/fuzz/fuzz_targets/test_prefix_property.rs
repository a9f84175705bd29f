#![no_main]

use hufftree::build_tree;
use hufftree::code_table::test_prefix_property;
use hufftree::tree_to_table;
use hufftree::{CountsTable, ALPHABET_SIZE};
use libfuzzer_sys::fuzz_target;

// every input byte adds one to the count of letter `byte % 26`
fuzz_target!(|data: &[u8]| {
    let mut counts: CountsTable = [0; ALPHABET_SIZE];
    for byte in data {
        counts[*byte as usize % ALPHABET_SIZE] += 1;
    }
    let tree = build_tree(&counts).unwrap();
    let table = tree_to_table(&tree);
    test_prefix_property(&table);
    assert_eq!(table.len(), tree.num_leaves());
});

use common::counts_from_pairs;
use hufftree::code_table::find_prefix_violation;
use hufftree::{build_code_table, encode, CountsTable, EncodeOptions, Symbol, ALPHABET_SIZE};
use proptest::prelude::*;

/// Cost of the cheapest binary prefix code for `weights`, by trying every merge order.
/// Every full binary tree can be built by some sequence of pairwise merges, and its cost is
/// the sum of the merged weights.
fn brute_force_optimum(weights: &[u64]) -> u64 {
    if weights.len() <= 1 {
        return weights.iter().sum();
    }
    let mut best = u64::MAX;
    for i in 0..weights.len() {
        for j in i + 1..weights.len() {
            let merged = weights[i] + weights[j];
            let mut rest: Vec<u64> = weights
                .iter()
                .enumerate()
                .filter(|(pos, _)| *pos != i && *pos != j)
                .map(|(_, weight)| *weight)
                .collect();
            rest.push(merged);
            let cost = if rest.len() == 1 {
                merged
            } else {
                merged + brute_force_optimum(&rest)
            };
            best = best.min(cost);
        }
    }
    best
}

fn counts_strategy(max_symbols: usize) -> impl Strategy<Value = CountsTable> {
    prop::collection::vec((0..ALPHABET_SIZE, 1..50u64), 0..=max_symbols).prop_map(|pairs| {
        counts_from_pairs(
            pairs
                .into_iter()
                .map(|(index, count)| (Symbol::from_index(index).unwrap(), count)),
        )
    })
}

fn symbols_strategy() -> impl Strategy<Value = Vec<Symbol>> {
    prop::collection::vec(0..ALPHABET_SIZE, 0..200)
        .prop_map(|indices| indices.into_iter().map(|i| Symbol::from_index(i).unwrap()).collect())
}

proptest! {
    #[test]
    fn test_prefix_free(counts in counts_strategy(ALPHABET_SIZE)) {
        let (_tree, table) = build_code_table(&counts).unwrap();
        prop_assert_eq!(find_prefix_violation(&table), None);
    }

    #[test]
    fn test_codes_for_counted_symbols_only(counts in counts_strategy(ALPHABET_SIZE)) {
        let (_tree, table) = build_code_table(&counts).unwrap();
        for symbol in Symbol::all() {
            let code = table.get(symbol);
            if counts[symbol.index()] > 0 {
                prop_assert!(code.map(|code| !code.is_empty()).unwrap_or(false));
            } else {
                prop_assert!(code.is_none());
            }
        }
    }

    #[test]
    fn test_kraft_equality(counts in counts_strategy(ALPHABET_SIZE)) {
        let (tree, table) = build_code_table(&counts).unwrap();
        // a full binary tree uses its code space completely: sum of 2^-len == 1
        if tree.num_leaves() >= 2 {
            let max_len = table.iter().map(|(_, code)| code.len()).max().unwrap();
            let used: u64 = table.iter().map(|(_, code)| 1_u64 << (max_len - code.len())).sum();
            prop_assert_eq!(used, 1_u64 << max_len);
        }
    }

    #[test]
    fn test_optimal_weighted_path_length(counts in counts_strategy(6)) {
        let (tree, table) = build_code_table(&counts).unwrap();
        let weights: Vec<u64> = counts.iter().copied().filter(|count| *count != 0).collect();
        if weights.len() >= 2 {
            prop_assert_eq!(tree.weighted_path_length(), brute_force_optimum(&weights));
        }
        prop_assert_eq!(table.weighted_path_length(&counts), tree.weighted_path_length());
    }

    #[test]
    fn test_roundtrip(counts in counts_strategy(ALPHABET_SIZE), input in symbols_strategy()) {
        let (tree, table) = build_code_table(&counts).unwrap();
        let bits = encode(input.iter().copied(), &table, EncodeOptions::default()).unwrap();
        prop_assert!(bits.chars().all(|bit| bit == '0' || bit == '1'));

        // symbols without code are skipped by the encoder
        let expected: Vec<Symbol> = input
            .iter()
            .copied()
            .filter(|symbol| counts[symbol.index()] != 0)
            .collect();
        prop_assert_eq!(tree.decode(&bits).unwrap(), expected);
    }
}

#[test]
fn brute_force_matches_textbook() {
    assert_eq!(brute_force_optimum(&[5, 9, 12, 13, 16, 45]), 224);
    assert_eq!(brute_force_optimum(&[1, 1]), 2);
}

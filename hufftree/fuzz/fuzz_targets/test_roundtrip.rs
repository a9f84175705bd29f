#![no_main]

use hufftree::build_code_table;
use hufftree::count_letters;
use hufftree::encode_text;
use hufftree::EncodeOptions;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let (tree, table) = build_code_table(&count_letters(&text)).unwrap();
    let bits = encode_text(&text, &table, EncodeOptions::default()).unwrap();
    assert_eq!(bits.len() as u64, tree.weighted_path_length());

    let decoded: String = tree.decode(&bits).unwrap().iter().map(|s| s.as_char()).collect();
    let expected: String = text
        .chars()
        .filter(|ch| ch.is_ascii_alphabetic())
        .map(|ch| ch.to_ascii_lowercase())
        .collect();
    assert_eq!(decoded, expected);
});

/*!
lettercode encodes the letters of a text with a huffman code built from the text itself.

Letters are counted case-insensitive, everything that is not a letter `a` to `z` is ignored.
The counts are turned into a prefix code by [`hufftree`], which is then used to encode the
letters into a string of '0' and '1'.

Only letters that occur in the text get a code. A text with a single distinct letter encodes
each occurence as "0", a text without letters has an empty code table and encodes to nothing.
*/

mod error;

use std::io::Write;

pub use crate::error::{Error, Result};
pub use common::{count_letter_bytes, count_letters, CountsTable, Symbol};
pub use hufftree::{
    build_tree, tree_to_table, CodeTable, EncodeOptions, HuffError, MissingSymbolPolicy, Tree,
};
use log::*;

/// Result of encoding a text
#[derive(Debug, Clone)]
pub struct Encoded {
    pub counts: CountsTable,
    pub tree: Tree,
    pub table: CodeTable,
    /// the encoded letters, one char per bit
    pub bits: String,
}

impl Encoded {
    pub fn num_leaves(&self) -> usize {
        self.tree.num_leaves()
    }
    /// true if the text contained no letters
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

/// Encodes the letters of `text`, skipping nothing since every letter of the text has a code
pub fn compress(text: &str) -> Result<Encoded> {
    compress_bytes(text.as_bytes())
}

pub fn compress_with_options(text: &str, options: EncodeOptions) -> Result<Encoded> {
    compress_bytes_with_options(text.as_bytes(), options)
}

/// Same as [`compress`] for raw input, which doesn't need to be utf-8. Only the ascii letters
/// are encoded.
pub fn compress_bytes(input: &[u8]) -> Result<Encoded> {
    compress_bytes_with_options(input, EncodeOptions::default())
}

pub fn compress_bytes_with_options(input: &[u8], options: EncodeOptions) -> Result<Encoded> {
    let counts = count_letter_bytes(input);
    let tree = build_tree(&counts)?;
    let table = tree_to_table(&tree);
    let bits = hufftree::encode_bytes(input, &table, options)?;
    debug!(
        "encoded {} letters into {} bits",
        common::total(&counts),
        bits.len()
    );
    Ok(Encoded {
        counts,
        tree,
        table,
        bits,
    })
}

/// Writes the number of leaves, the code table as `c : code` lines and the encoded message.
/// Input without letters stops after the leaf count.
pub fn write_report<W: Write>(encoded: &Encoded, out: &mut W) -> Result<()> {
    writeln!(out, "Frequency table built successfully.")?;
    writeln!(out, "Created {} leaf nodes.", encoded.num_leaves())?;
    if encoded.is_empty() {
        writeln!(out, "No alphabetic characters found in input.")?;
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "Character : Code")?;
    write!(out, "{}", encoded.table)?;
    writeln!(out)?;
    writeln!(out, "Encoded message:")?;
    writeln!(out, "{}", encoded.bits)?;
    Ok(())
}

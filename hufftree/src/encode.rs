use log::*;

use crate::code_table::CodeTable;
use crate::error::{HuffError, Result};
use common::{letter_bytes, letters, Symbol};

/// What to do with a symbol that has no code in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSymbolPolicy {
    /// drop the symbol from the output
    Skip,
    /// stop with `SymbolNotInTable`
    Fail,
}

impl Default for MissingSymbolPolicy {
    fn default() -> Self {
        MissingSymbolPolicy::Skip
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub missing: MissingSymbolPolicy,
}

/// Encodes the symbols into a string of '0' and '1' by appending the code of each symbol.
pub fn encode<I>(symbols: I, table: &CodeTable, options: EncodeOptions) -> Result<String>
where
    I: IntoIterator<Item = Symbol>,
{
    let mut out = String::new();
    let mut skipped = 0_usize;
    for symbol in symbols {
        if !encode_symbol(symbol, &mut out, table) {
            match options.missing {
                MissingSymbolPolicy::Skip => skipped += 1,
                MissingSymbolPolicy::Fail => return Err(HuffError::SymbolNotInTable(symbol)),
            }
        }
    }
    if skipped != 0 {
        debug!("skipped {} symbols without code", skipped);
    }
    Ok(out)
}

/// Encodes the letters of `text`, case-insensitive. Everything else in `text` is ignored.
#[inline]
pub fn encode_text(text: &str, table: &CodeTable, options: EncodeOptions) -> Result<String> {
    encode(letters(text), table, options)
}

/// Encodes the ascii letters of raw `input`, case-insensitive. The input doesn't need to be utf-8.
#[inline]
pub fn encode_bytes(input: &[u8], table: &CodeTable, options: EncodeOptions) -> Result<String> {
    encode(letter_bytes(input), table, options)
}

/// returns false if the symbol has no code
#[inline]
fn encode_symbol(symbol: Symbol, out: &mut String, table: &CodeTable) -> bool {
    match table.get(symbol) {
        Some(code) => {
            code.write_to(out);
            true
        }
        None => false,
    }
}

use core::fmt;
use log::*;

use crate::tree::Tree;
use common::{CountsTable, Symbol, ALPHABET_SIZE};

/// A prefix code, the lowest `number_bits` bits of `val`. The first bit of the code is the
/// highest of those bits.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    pub(crate) val: u32,
    pub(crate) number_bits: u8,
}

impl Code {
    pub fn new(val: u32, number_bits: u8) -> Self {
        debug_assert!(number_bits <= 32);
        Code { val, number_bits }
    }
    #[inline]
    pub fn val(&self) -> u32 {
        self.val
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.number_bits as usize
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.number_bits == 0
    }

    /// the bits, first to last
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.number_bits).rev().map(move |pos| (self.val >> pos) & 1 == 1)
    }

    /// true if `self` is a prefix of `other`, or equal to it
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        if self.number_bits > other.number_bits {
            return false;
        }
        let bit_diff = other.number_bits - self.number_bits;
        other.val.checked_shr(bit_diff as u32).unwrap_or(0) == self.val
    }

    pub fn write_to(&self, out: &mut String) {
        out.extend(self.bits().map(|bit| if bit { '1' } else { '0' }));
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.len());
        self.write_to(&mut out);
        f.write_str(&out)
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({})", self)
    }
}

/// symbol to prefix code. Symbols not seen in the input have no code.
#[derive(Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; ALPHABET_SIZE],
}

impl CodeTable {
    pub fn empty() -> Self {
        CodeTable {
            codes: [None; ALPHABET_SIZE],
        }
    }

    #[inline]
    pub fn get(&self, symbol: Symbol) -> Option<Code> {
        self.codes[symbol.index()]
    }

    /// number of symbols with a code
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| code.is_some()).count()
    }
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|code| code.is_none())
    }

    /// symbols with a code, in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, Code)> + '_ {
        Symbol::all().filter_map(move |symbol| self.get(symbol).map(|code| (symbol, code)))
    }

    /// encoded size in bits of a message with `counts`, saturating at `u64::MAX`
    pub fn weighted_path_length(&self, counts: &CountsTable) -> u64 {
        self.iter().fold(0_u64, |size_in_bits, (symbol, code)| {
            size_in_bits.saturating_add(counts[symbol.index()].saturating_mul(code.len() as u64))
        })
    }
}

impl fmt::Debug for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// one `symbol : code` line per symbol
impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "{} : {}", symbol, code)?;
        }
        Ok(())
    }
}

/// Converts the tree into a table with the prefix code of each symbol.
///
/// Walking left appends a 0, walking right a 1. When the root itself is a leaf the path is
/// empty, the symbol gets the code "0" instead.
pub fn tree_to_table(tree: &Tree) -> CodeTable {
    let mut table = CodeTable::empty();
    let root = match tree.root() {
        Some(root) => root,
        None => return table,
    };

    if let Some(symbol) = tree.get_node(root).symbol() {
        table.codes[symbol.index()] = Some(Code::new(0, 1));
        return table;
    }

    tree.walk_tree(root, &mut |node, transitions, depth| {
        if let Some(symbol) = node.symbol() {
            table.codes[symbol.index()] = Some(Code::new(transitions, depth as u8));
        }
    });

    if log_enabled!(Level::Debug) {
        for (symbol, code) in table.iter() {
            debug!("{} : {}", symbol, code);
        }
    }
    table
}

/// Returns the first pair of symbols where the code of the first is a prefix of the code of
/// the second. Empty codes count as a violation too.
pub fn find_prefix_violation(table: &CodeTable) -> Option<(Symbol, Symbol)> {
    let codes: Vec<(Symbol, Code)> = table.iter().collect();
    for (symbol, code) in &codes {
        if code.is_empty() {
            return Some((*symbol, *symbol));
        }
        for (other_symbol, other_code) in &codes {
            if symbol != other_symbol && code.is_prefix_of(other_code) {
                return Some((*symbol, *other_symbol));
            }
        }
    }
    None
}

/// will validate the table to have generated correct prefix properties for all symbols.
/// This validation is rather slow and is meant for tests and fuzzing.
pub fn test_prefix_property(table: &CodeTable) {
    if let Some((prefix, symbol)) = find_prefix_violation(table) {
        panic!(
            "invalid prefix detected between {} {:?} and {} {:?}",
            prefix,
            table.get(prefix),
            symbol,
            table.get(symbol)
        );
    }
}

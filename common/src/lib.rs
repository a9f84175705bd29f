mod error;
use core::convert::TryFrom;
use core::fmt;

pub use error::SymbolError;
use log::*;

/// Number of symbols in the alphabet, the lowercase letters `a` to `z`.
pub const ALPHABET_SIZE: usize = 26;

/// symbol to number of occurences
pub type CountsTable = [u64; ALPHABET_SIZE];

/// A single letter of the alphabet, stored as its index (`a` = 0, `z` = 25).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// Folds uppercase to lowercase. Everything that is not an ascii letter is rejected.
    #[inline]
    pub fn from_char(ch: char) -> Result<Symbol, SymbolError> {
        if ch.is_ascii_alphabetic() {
            Ok(Symbol(ch.to_ascii_lowercase() as u8 - b'a'))
        } else {
            Err(SymbolError::NotALetter(ch))
        }
    }

    /// Same as [`Symbol::from_char`] for a single byte of input. Bytes outside ascii are never letters.
    #[inline]
    pub fn from_byte(byte: u8) -> Result<Symbol, SymbolError> {
        if byte.is_ascii_alphabetic() {
            Ok(Symbol(byte.to_ascii_lowercase() - b'a'))
        } else {
            Err(SymbolError::NotALetterByte(byte))
        }
    }

    #[inline]
    pub fn from_index(index: usize) -> Result<Symbol, SymbolError> {
        if index < ALPHABET_SIZE {
            Ok(Symbol(index as u8))
        } else {
            Err(SymbolError::IndexOutOfRange(index))
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn as_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// all symbols in alphabet order
    pub fn all() -> impl Iterator<Item = Symbol> {
        (0..ALPHABET_SIZE as u8).map(Symbol)
    }
}

impl TryFrom<char> for Symbol {
    type Error = SymbolError;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Symbol::from_char(ch)
    }
}

impl TryFrom<u8> for Symbol {
    type Error = SymbolError;
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Symbol::from_byte(byte)
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> char {
        symbol.as_char()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_char())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Returns the letters of `text` as symbols, case-insensitive. Other characters are dropped.
#[inline]
pub fn letters(text: &str) -> impl Iterator<Item = Symbol> + '_ {
    text.chars().filter_map(|ch| Symbol::from_char(ch).ok())
}

/// Returns the letters of raw `input` as symbols, case-insensitive. The input doesn't need to be utf-8,
/// every byte that is not an ascii letter is dropped.
#[inline]
pub fn letter_bytes(input: &[u8]) -> impl Iterator<Item = Symbol> + '_ {
    input.iter().filter_map(|byte| Symbol::from_byte(*byte).ok())
}

/// creates a table with the counts of each letter
#[inline]
pub fn count_letters(text: &str) -> CountsTable {
    count_letter_bytes(text.as_bytes())
}

/// creates a table with the counts of each letter in raw bytes
#[inline]
pub fn count_letter_bytes(input: &[u8]) -> CountsTable {
    let mut counts = [0_u64; ALPHABET_SIZE];
    for symbol in letter_bytes(input) {
        counts[symbol.index()] = counts[symbol.index()].saturating_add(1);
    }
    if log_enabled!(Level::Trace) {
        for symbol in Symbol::all().filter(|s| counts[s.index()] != 0) {
            trace!("{}: {}", symbol, counts[symbol.index()]);
        }
    }
    counts
}

/// creates a counts table from (symbol, count) pairs, summing duplicates
pub fn counts_from_pairs<I>(pairs: I) -> CountsTable
where
    I: IntoIterator<Item = (Symbol, u64)>,
{
    let mut counts = [0_u64; ALPHABET_SIZE];
    for (symbol, count) in pairs {
        counts[symbol.index()] = counts[symbol.index()].saturating_add(count);
    }
    counts
}

/// number of symbols with a count > 0
#[inline]
pub fn num_distinct(counts: &CountsTable) -> usize {
    counts.iter().filter(|count| **count != 0).count()
}

#[inline]
pub fn total(counts: &CountsTable) -> u64 {
    counts
        .iter()
        .fold(0_u64, |sum, count| sum.saturating_add(*count))
}

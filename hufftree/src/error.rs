use common::Symbol;
use core::fmt;
use thiserror::Error;

/// The bounded container whose capacity ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    NodeStore,
    PriorityQueue,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::NodeStore => f.write_str("node store"),
            Resource::PriorityQueue => f.write_str("priority queue"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffError {
    #[error("{resource} capacity of {capacity} exceeded")]
    CapacityExceeded { resource: Resource, capacity: usize },
    /// popped from an empty queue, the builder loop is broken if this shows up
    #[error("pop on empty priority queue")]
    EmptyQueue,
    #[error("symbol {0} has no code in the table")]
    SymbolNotInTable(Symbol),
    #[error("invalid bit {0:?}, expected '0' or '1'")]
    InvalidBit(char),
    #[error("bitstring ends in the middle of a code")]
    TruncatedCode,
    #[error("cannot decode bits without a tree")]
    EmptyTree,
}

pub type Result<T> = std::result::Result<T, HuffError>;

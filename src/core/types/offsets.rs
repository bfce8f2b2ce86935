//! Offset chains describing multi-level pointer walks
//!
//! An offset chain is an ordered list of byte offsets, walked left to right:
//! every offset except the last is added to the current address and the
//! pointer stored there is followed; the last offset is added without a final
//! dereference. Chains come from game-specific knowledge outside this crate
//! (configuration, reversing notes) and are consumed by the resolver without
//! being mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of byte offsets for a pointer walk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OffsetChain(Vec<usize>);

impl OffsetChain {
    /// Creates a chain from a list of offsets
    pub fn new(offsets: Vec<usize>) -> Self {
        OffsetChain(offsets)
    }

    /// Creates an empty chain (resolves to the base address unchanged)
    pub fn empty() -> Self {
        OffsetChain(Vec::new())
    }

    /// Number of offsets in the chain
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the chain has no offsets
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The offsets as a slice, in walk order
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Splits into the final offset and the dereferenced prefix
    pub fn split_last(&self) -> Option<(usize, &[usize])> {
        self.0.split_last().map(|(last, walk)| (*last, walk))
    }

    /// Iterates over the offsets in walk order
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }
}

impl From<Vec<usize>> for OffsetChain {
    fn from(offsets: Vec<usize>) -> Self {
        OffsetChain(offsets)
    }
}

impl From<&[usize]> for OffsetChain {
    fn from(offsets: &[usize]) -> Self {
        OffsetChain(offsets.to_vec())
    }
}

impl FromIterator<usize> for OffsetChain {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        OffsetChain(iter.into_iter().collect())
    }
}

impl fmt::Display for OffsetChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, offset) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "0x{:X}", offset)?;
        }
        write!(f, "]")
    }
}

//! Completed chains: one timestamp per bucket, in bucket order.

use std::fmt::Display;

use chronostrat_types::Timestamp;
use serde::{Deserialize, Serialize};

/// A full-length chronological chain through a bucket sequence.
///
/// Holds exactly one timestamp per bucket, in bucket order. Chains are
/// produced by enumeration and immutable once emitted.
/// [`Chain::is_strictly_increasing`] is the ordering predicate callers and
/// tests validate against; enumeration guarantees it on well-separated
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chain(Vec<Timestamp>);

impl Chain {
    pub fn new(timestamps: impl Into<Vec<Timestamp>>) -> Self {
        Self(timestamps.into())
    }

    /// Number of positions (equals the bucket count of the input).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn timestamps(&self) -> &[Timestamp] {
        &self.0
    }

    /// Iterates the chain's timestamps in position order.
    pub fn iter(&self) -> impl Iterator<Item = Timestamp> + '_ {
        self.0.iter().copied()
    }

    /// Whether every adjacent pair strictly increases.
    ///
    /// Empty and single-element chains are trivially increasing.
    pub fn is_strictly_increasing(&self) -> bool {
        self.0.windows(2).all(|pair| pair[0] < pair[1])
    }
}

impl Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (position, ts) in self.0.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{ts}")?;
        }
        write!(f, "]")
    }
}

impl From<Vec<Timestamp>> for Chain {
    fn from(timestamps: Vec<Timestamp>) -> Self {
        Self(timestamps)
    }
}

impl From<Chain> for Vec<Timestamp> {
    fn from(chain: Chain) -> Self {
        chain.0
    }
}

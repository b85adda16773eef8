//! Successor tables - the annotation produced by the compatibility scan.
//!
//! A [`SuccessorTable`] mirrors the shape of its bucket sequence: one row per
//! bucket, one [`Successor`] slot per timestamp. Rows are zero-filled at
//! construction and rewritten in place by the scan; the last bucket's row is
//! created for shape uniformity but never consulted by enumeration.

use chronostrat_types::Bucket;
use serde::{Deserialize, Serialize};

use crate::kernel::KernelError;

/// One annotation slot: where a chain through this timestamp can continue.
///
/// `At(k)` names a candidate index into the *next* bucket. The scan records
/// the stop position of its leftward co-walk here, which is a candidate
/// minimum rather than a verified one; enumeration additionally explores
/// every index above it. `None` is the sentinel: no chronologically valid
/// successor exists and no chain passes through this slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Successor {
    /// Candidate successor index in the next bucket.
    At(usize),
    /// No valid successor; the chain dead-ends here.
    None,
}

impl Successor {
    /// Returns the candidate index, or `None` for the sentinel.
    pub fn as_index(self) -> Option<usize> {
        match self {
            Successor::At(index) => Some(index),
            Successor::None => None,
        }
    }

    pub fn is_sentinel(self) -> bool {
        matches!(self, Successor::None)
    }
}

impl Default for Successor {
    /// Slots start at index zero; the scan only rewrites slots it visits.
    fn default() -> Self {
        Successor::At(0)
    }
}

impl std::fmt::Display for Successor {
    /// Renders as a signed index: the slot's index, or `-1` for the sentinel.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Successor::At(index) => write!(f, "{index}"),
            Successor::None => write!(f, "-1"),
        }
    }
}

/// Per-bucket, per-timestamp successor annotations.
///
/// Row `i` is parallel to bucket `i`. The table is created zeroed, mutated
/// only while the scan runs, and read-only afterward.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SuccessorTable(Vec<Vec<Successor>>);

impl SuccessorTable {
    /// Creates a table shaped like `buckets` with every slot zeroed.
    ///
    /// Zero slots are the final value wherever the scan never writes: the
    /// last bucket's row, rows beside empty buckets, and the whole table
    /// for sequences shorter than two buckets.
    pub fn zeroed(buckets: &[Bucket]) -> Self {
        Self(
            buckets
                .iter()
                .map(|bucket| vec![Successor::default(); bucket.len()])
                .collect(),
        )
    }

    /// Builds a table directly from rows.
    ///
    /// Intended for constructing tables by hand in tests and tools; the
    /// enumeration entry point checks shape against its buckets either way.
    pub fn from_rows(rows: Vec<Vec<Successor>>) -> Self {
        Self(rows)
    }

    /// Number of bucket rows.
    pub fn bucket_count(&self) -> usize {
        self.0.len()
    }

    /// Returns the row for `bucket`, if in range.
    pub fn row(&self, bucket: usize) -> Option<&[Successor]> {
        self.0.get(bucket).map(Vec::as_slice)
    }

    /// All rows, outermost index parallel to the bucket sequence.
    pub fn rows(&self) -> &[Vec<Successor>] {
        &self.0
    }

    /// Returns the slot for (`bucket`, `index`), if in range.
    pub fn get(&self, bucket: usize, index: usize) -> Option<Successor> {
        self.0.get(bucket).and_then(|row| row.get(index)).copied()
    }

    /// Verifies the table matches the shape of `buckets`.
    ///
    /// Shape means outer length and per-row lengths only. Slot *values* are
    /// not validated: the scan legitimately leaves zero slots that point
    /// into an empty next bucket, and enumeration treats those as dead ends.
    pub fn check_shape(&self, buckets: &[Bucket]) -> Result<(), KernelError> {
        if self.0.len() != buckets.len() {
            return Err(KernelError::TableShapeMismatch {
                expected: buckets.len(),
                actual: self.0.len(),
            });
        }
        for (index, (row, bucket)) in self.0.iter().zip(buckets).enumerate() {
            if row.len() != bucket.len() {
                return Err(KernelError::RowLengthMismatch {
                    row: index,
                    expected: bucket.len(),
                    actual: row.len(),
                });
            }
        }
        Ok(())
    }

    /// Mutable access to one row during the scan.
    pub(crate) fn row_mut(&mut self, bucket: usize) -> &mut [Successor] {
        &mut self.0[bucket]
    }
}

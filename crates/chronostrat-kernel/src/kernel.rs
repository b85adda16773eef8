//! The kernel - pure functional core of `chronostrat`.
//!
//! Two stages, evaluated leaves-first: [`build_successor_table`] scans
//! adjacent bucket pairs and annotates every timestamp with its candidate
//! successor, then [`enumerate_chains`] expands those annotations into the
//! full-length chains they admit. Both are completely pure: no IO, no
//! clocks, no randomness. Same input, same output.
//!
//! # Example
//!
//! ```ignore
//! let table = build_successor_table(&buckets);
//! let chains = enumerate_chains(&buckets, &table)?;
//! ```

use chronostrat_types::{Bucket, Timestamp};

use crate::chain::Chain;
use crate::table::{Successor, SuccessorTable};

// ============================================================================
// Stage 1: Compatibility Scan
// ============================================================================

/// Annotates every timestamp with a candidate successor in the next bucket.
///
/// Bucket pairs are processed from the last pair to the first. The returned
/// table always matches the shape of `buckets`; rows the scan never writes
/// keep their zero fill, which covers the last bucket, any pair with an
/// empty side, and sequences shorter than two buckets.
///
/// Total over all inputs. Sortedness of each bucket is a precondition, not
/// a checked property: unsorted input produces a deterministic table whose
/// slots mean nothing.
pub fn build_successor_table(buckets: &[Bucket]) -> SuccessorTable {
    let mut table = SuccessorTable::zeroed(buckets);

    if buckets.len() < 2 {
        return table;
    }

    for pair in (0..buckets.len() - 1).rev() {
        // Pairs are independent; each row is written by exactly one pair.
        let (lower, upper) = (buckets[pair].as_slice(), buckets[pair + 1].as_slice());
        if lower.is_empty() || upper.is_empty() {
            continue;
        }
        annotate_pair(lower, upper, table.row_mut(pair));
    }

    debug_assert!(table.check_shape(buckets).is_ok());

    table
}

/// Runs the two-cursor co-walk over one adjacent bucket pair.
///
/// Both cursors start at the last index of their bucket and only move left.
/// The inner cursor is shared across the whole pair and never resets, which
/// keeps the pair linear in the combined bucket length.
///
/// A slot is marked [`Successor::None`] while its timestamp is not strictly
/// earlier than the inner cursor's. Otherwise the inner cursor backs up
/// while the later-or-equal condition holds and its stop position is
/// recorded as is. The stop position is NOT re-validated once the inner
/// cursor reaches index 0, so a recorded index can name a timestamp that is
/// not strictly later; enumeration branches into every higher index, which
/// is where such slots get compensated. Replacing this walk with a search
/// for the true minimum would change which chains come out on overlapping
/// input.
fn annotate_pair(lower: &[Timestamp], upper: &[Timestamp], row: &mut [Successor]) {
    // Caller guarantees a non-empty pair and a row parallel to `lower`.
    debug_assert!(!lower.is_empty() && !upper.is_empty());
    debug_assert_eq!(row.len(), lower.len());

    let mut a = lower.len() as isize - 1;
    let mut b = upper.len() - 1;

    while a >= 0 {
        // Invalidate while the lower timestamp cannot precede the upper one.
        while a >= 0 && lower[a as usize] >= upper[b] {
            row[a as usize] = Successor::None;
            a -= 1;
        }
        if a < 0 {
            break;
        }
        // Back the shared cursor up to the leftmost still-later candidate.
        while b > 0 && upper[b] >= lower[a as usize] {
            b -= 1;
        }
        row[a as usize] = Successor::At(b);
        a -= 1;
    }
}

// ============================================================================
// Stage 2: Chain Enumeration
// ============================================================================

/// Expands a successor table into every chain the annotation admits.
///
/// Chains start from each element of the first bucket in index order. At
/// each position the annotated slot is the primary transition, and every
/// index above it is explored as well: under the sortedness precondition
/// those timestamps are at least as late, so the slot is treated as only a
/// candidate minimum. A sentinel slot dead-ends the branch, as does a
/// candidate index with no timestamp behind it (the zero fill beside an
/// empty next bucket). Result order is by start index, then depth-first
/// with the primary transition before its higher siblings.
///
/// Candidate slots are trusted as recorded, not re-verified against the
/// timestamps. On buckets that overlap densely enough to trip the scan's
/// inner-cursor boundary, the recorded candidate itself can name an earlier
/// timestamp, and the chain through it is emitted all the same. On
/// well-separated input every emitted chain strictly increases.
///
/// Output grows exponentially with bucket count in the worst case; callers
/// that cannot absorb that bound it at their own layer.
///
/// # Errors
///
/// Returns a [`KernelError`] when the table's shape was not built for these
/// buckets. Slot values are never an error.
pub fn enumerate_chains(
    buckets: &[Bucket],
    table: &SuccessorTable,
) -> Result<Vec<Chain>, KernelError> {
    let Some(first) = buckets.first() else {
        return Ok(Vec::new());
    };

    table.check_shape(buckets)?;

    let mut chains = Vec::new();
    let mut current: Vec<Timestamp> = Vec::with_capacity(buckets.len());

    for start in 0..first.len() {
        descend(buckets, table, 0, start, &mut current, &mut chains);
    }

    // Postcondition: every push was popped on the way back out.
    debug_assert!(current.is_empty());

    Ok(chains)
}

/// One backtracking step: commit (`bucket`, `index`) and explore onward.
///
/// The chain buffer is shared down the call stack; each frame pushes exactly
/// one timestamp on entry and pops it on every exit path, so no sibling
/// branch ever observes another's uncommitted state.
fn descend(
    buckets: &[Bucket],
    table: &SuccessorTable,
    bucket: usize,
    index: usize,
    current: &mut Vec<Timestamp>,
    chains: &mut Vec<Chain>,
) {
    current.push(buckets[bucket].as_slice()[index]);

    if bucket == buckets.len() - 1 {
        // Reached the terminus: the buffer is a complete chain.
        chains.push(Chain::new(current.clone()));
    } else if let Successor::At(next) = table.rows()[bucket][index] {
        let upper = buckets[bucket + 1].as_slice();
        if next < upper.len() {
            descend(buckets, table, bucket + 1, next, current, chains);
            for sibling in next + 1..upper.len() {
                descend(buckets, table, bucket + 1, sibling, current, chains);
            }
        }
    }

    current.pop();
}

// ============================================================================
// Errors
// ============================================================================

/// Errors that can occur when enumerating chains.
#[derive(thiserror::Error, Debug)]
pub enum KernelError {
    #[error("successor table has {actual} rows, expected {expected}")]
    TableShapeMismatch { expected: usize, actual: usize },

    #[error("successor row {row} has {actual} slots, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

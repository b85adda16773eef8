//! # chronostrat-types: Core types for `chronostrat`
//!
//! This crate contains the shared vocabulary used across the `chronostrat`
//! workspace:
//! - Temporal values ([`Timestamp`])
//! - Sorted timestamp sequences ([`Bucket`])
//!
//! Both types are plain data: no IO, no clocks, no validation side effects.
//! A [`Bucket`] is *expected* to be sorted ascending but never enforces it;
//! sortedness is a precondition of the scan algorithms, and violating it
//! produces deterministic garbage rather than an error.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

// ============================================================================
// Timestamp - Copy (cheap 8-byte value)
// ============================================================================

/// A point in time as nanoseconds since the Unix epoch.
///
/// Totally ordered; comparisons between timestamps drive every decision the
/// scan and enumeration stages make.
///
/// # Examples
///
/// ```
/// # use chronostrat_types::Timestamp;
/// let earlier = Timestamp::from_secs(10);
/// let later = Timestamp::from_nanos(10_000_000_001);
/// assert!(earlier < later);
/// assert_eq!(later.as_secs(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The Unix epoch (1970-01-01 00:00:00 UTC).
    pub const EPOCH: Timestamp = Timestamp(0);

    /// The latest representable timestamp.
    pub const MAX: Timestamp = Timestamp(u64::MAX);

    /// Creates a timestamp from nanoseconds since Unix epoch.
    pub fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    /// Creates a timestamp from whole seconds since Unix epoch.
    ///
    /// Saturates at [`Timestamp::MAX`] rather than wrapping.
    pub fn from_secs(secs: u64) -> Self {
        Self(secs.saturating_mul(1_000_000_000))
    }

    /// Returns the timestamp as nanoseconds since Unix epoch.
    pub fn as_nanos(&self) -> u64 {
        self.0
    }

    /// Returns the timestamp as seconds since Unix epoch (truncates nanoseconds).
    pub fn as_secs(&self) -> u64 {
        self.0 / 1_000_000_000
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Display as seconds.nanoseconds for readability
        let secs = self.0 / 1_000_000_000;
        let nanos = self.0 % 1_000_000_000;
        write!(f, "{secs}.{nanos:09}")
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::EPOCH
    }
}

impl From<u64> for Timestamp {
    fn from(nanos: u64) -> Self {
        Self(nanos)
    }
}

impl From<Timestamp> for u64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

// ============================================================================
// Bucket - an ordered run of timestamps
// ============================================================================

/// A sequence of timestamps, sorted ascending within itself.
///
/// Buckets are the unit of input for the successor scan: each bucket holds
/// the candidate timestamps for one position of a chain, and consecutive
/// buckets are compared pairwise. Duplicate timestamps within a bucket are
/// allowed; each occupies its own slot and is evaluated independently.
///
/// Sortedness is the caller's responsibility. [`Bucket::is_sorted`] is an
/// advisory check for callers that want to verify their inputs up front.
///
/// # Examples
///
/// ```
/// # use chronostrat_types::{Bucket, Timestamp};
/// let bucket = Bucket::from_nanos([1, 2, 2, 5]);
/// assert_eq!(bucket.len(), 4);
/// assert!(bucket.is_sorted());
/// assert_eq!(bucket.last(), Some(Timestamp::from_nanos(5)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Bucket(Vec<Timestamp>);

impl Bucket {
    pub fn new(timestamps: impl Into<Vec<Timestamp>>) -> Self {
        Self(timestamps.into())
    }

    /// Creates a bucket from raw nanosecond values, in the order given.
    pub fn from_nanos<I>(nanos: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        Self(nanos.into_iter().map(Timestamp::from_nanos).collect())
    }

    /// Number of timestamps in the bucket.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the timestamp at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<Timestamp> {
        self.0.get(index).copied()
    }

    pub fn first(&self) -> Option<Timestamp> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<Timestamp> {
        self.0.last().copied()
    }

    pub fn as_slice(&self) -> &[Timestamp] {
        &self.0
    }

    /// Iterates the timestamps in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = Timestamp> + '_ {
        self.0.iter().copied()
    }

    /// Whether the bucket satisfies the ascending-order precondition.
    ///
    /// Ties count as sorted; only a strict decrease violates the order.
    pub fn is_sorted(&self) -> bool {
        self.0.is_sorted()
    }
}

impl From<Vec<Timestamp>> for Bucket {
    fn from(timestamps: Vec<Timestamp>) -> Self {
        Self(timestamps)
    }
}

impl From<Bucket> for Vec<Timestamp> {
    fn from(bucket: Bucket) -> Self {
        bucket.0
    }
}

impl FromIterator<Timestamp> for Bucket {
    fn from_iter<I: IntoIterator<Item = Timestamp>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests;

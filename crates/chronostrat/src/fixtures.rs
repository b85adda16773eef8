//! Deterministic sample bucket sets.
//!
//! Small, hand-checked inputs for demos, docs, and tests. All timestamps
//! are day-precision values in early 2023.

use chronostrat_types::{Bucket, Timestamp};

/// Seconds at 2023-01-01 00:00:00 UTC.
const JAN_1_2023_SECS: u64 = 1_672_531_200;

/// Timestamp at midnight UTC of the given January 2023 day.
fn january(day: u64) -> Timestamp {
    Timestamp::from_secs(JAN_1_2023_SECS + (day - 1) * 86_400)
}

/// The three-bucket demo set.
///
/// Bucket 0 holds Jan 1, 4 and 5; bucket 1 holds Jan 2 and 3; bucket 2
/// holds Jan 6 and 7. Only Jan 1 can start a chain (Jan 4 and 5 outrun the
/// whole middle bucket), giving exactly four legal chains.
pub fn sample_buckets() -> Vec<Bucket> {
    vec![
        Bucket::new(vec![january(1), january(4), january(5)]),
        Bucket::new(vec![january(2), january(3)]),
        Bucket::new(vec![january(6), january(7)]),
    ]
}

/// A five-bucket ladder with two choices at every transition.
///
/// One start, then two fully valid candidates in each later bucket: the
/// sixteen chains cover every combination.
pub fn branching_ladder() -> Vec<Bucket> {
    vec![
        Bucket::new(vec![january(1)]),
        Bucket::new(vec![january(2), january(3)]),
        Bucket::new(vec![january(4), january(5)]),
        Bucket::new(vec![january(6), january(7)]),
        Bucket::new(vec![january(8), january(9)]),
    ]
}

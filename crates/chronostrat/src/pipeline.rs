//! The composed two-stage pipeline.

use chronostrat_kernel::{Chain, build_successor_table, enumerate_chains};
use chronostrat_types::Bucket;

/// Runs both stages: scan the buckets, then enumerate every legal chain.
///
/// Infallible: the scan's table matches its own input by construction, so
/// the enumeration shape check cannot fail. Callers that want the
/// intermediate table run [`build_successor_table`] and
/// [`enumerate_chains`] themselves.
///
/// # Examples
///
/// ```
/// # use chronostrat::{Bucket, legal_chains};
/// let buckets = vec![Bucket::from_nanos([1]), Bucket::from_nanos([2, 3])];
/// let chains = legal_chains(&buckets);
/// assert_eq!(chains.len(), 2);
/// ```
pub fn legal_chains(buckets: &[Bucket]) -> Vec<Chain> {
    let table = build_successor_table(buckets);
    enumerate_chains(buckets, &table).expect("scanned table always matches its own input shape")
}

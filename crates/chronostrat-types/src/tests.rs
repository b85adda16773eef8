//! Unit tests for chronostrat-types.

use proptest::prelude::*;
use test_case::test_case;

use crate::{Bucket, Timestamp};

// ============================================================================
// Timestamp Tests
// ============================================================================

#[test]
fn epoch_is_zero_nanos() {
    assert_eq!(Timestamp::EPOCH.as_nanos(), 0);
    assert_eq!(Timestamp::default(), Timestamp::EPOCH);
}

#[test]
fn from_secs_scales_to_nanos() {
    assert_eq!(Timestamp::from_secs(3).as_nanos(), 3_000_000_000);
    assert_eq!(Timestamp::from_secs(3).as_secs(), 3);
}

#[test]
fn from_secs_saturates_instead_of_wrapping() {
    assert_eq!(Timestamp::from_secs(u64::MAX), Timestamp::MAX);
}

#[test]
fn ordering_follows_nanos() {
    let a = Timestamp::from_nanos(5);
    let b = Timestamp::from_nanos(6);
    assert!(a < b);
    assert!(b <= Timestamp::MAX);
    assert!(Timestamp::EPOCH <= a);
}

#[test_case(0, "0.000000000"; "epoch")]
#[test_case(1_500_000_000, "1.500000000"; "one and a half seconds")]
#[test_case(42, "0.000000042"; "sub second nanos are zero padded")]
fn timestamp_display_is_secs_dot_nanos(nanos: u64, expected: &str) {
    assert_eq!(Timestamp::from_nanos(nanos).to_string(), expected);
}

#[test]
fn timestamp_serializes_as_plain_integer() {
    let ts = Timestamp::from_nanos(1234);
    let json = serde_json::to_string(&ts).expect("serialize timestamp");
    assert_eq!(json, "1234");

    let back: Timestamp = serde_json::from_str(&json).expect("deserialize timestamp");
    assert_eq!(back, ts);
}

// ============================================================================
// Bucket Tests
// ============================================================================

#[test]
fn bucket_accessors_report_contents() {
    let bucket = Bucket::from_nanos([10, 20, 30]);
    assert_eq!(bucket.len(), 3);
    assert!(!bucket.is_empty());
    assert_eq!(bucket.first(), Some(Timestamp::from_nanos(10)));
    assert_eq!(bucket.last(), Some(Timestamp::from_nanos(30)));
    assert_eq!(bucket.get(1), Some(Timestamp::from_nanos(20)));
    assert_eq!(bucket.get(3), None);
}

#[test]
fn empty_bucket_has_no_endpoints() {
    let bucket = Bucket::default();
    assert!(bucket.is_empty());
    assert_eq!(bucket.len(), 0);
    assert_eq!(bucket.first(), None);
    assert_eq!(bucket.last(), None);
}

#[test]
fn iter_yields_timestamps_in_order() {
    let bucket = Bucket::from_nanos([1, 2, 3]);
    let nanos: Vec<u64> = bucket.iter().map(|ts| ts.as_nanos()).collect();
    assert_eq!(nanos, vec![1, 2, 3]);
}

#[test_case(&[1, 2, 2, 5], true; "ascending with ties")]
#[test_case(&[7], true; "single element")]
#[test_case(&[], true; "empty")]
#[test_case(&[3, 1], false; "strict decrease")]
fn is_sorted_accepts_non_decreasing_runs(nanos: &[u64], expected: bool) {
    let bucket = Bucket::from_nanos(nanos.iter().copied());
    assert_eq!(bucket.is_sorted(), expected);
}

#[test]
fn bucket_serializes_as_array_of_nanos() {
    let bucket = Bucket::from_nanos([1, 2]);
    let json = serde_json::to_string(&bucket).expect("serialize bucket");
    assert_eq!(json, "[1,2]");

    let back: Bucket = serde_json::from_str(&json).expect("deserialize bucket");
    assert_eq!(back, bucket);
}

#[test]
fn bucket_collects_from_timestamp_iterator() {
    let bucket: Bucket = (1..=3).map(Timestamp::from_nanos).collect();
    assert_eq!(bucket, Bucket::from_nanos([1, 2, 3]));
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Nanosecond values survive the newtype round trip untouched.
    #[test]
    fn timestamp_nanos_round_trip(nanos: u64) {
        prop_assert_eq!(Timestamp::from_nanos(nanos).as_nanos(), nanos);
    }

    /// Sorting raw values before building always yields a sorted bucket.
    #[test]
    fn sorted_input_is_reported_sorted(mut nanos in proptest::collection::vec(any::<u64>(), 0..32)) {
        nanos.sort_unstable();
        prop_assert!(Bucket::from_nanos(nanos).is_sorted());
    }

    /// Timestamp ordering agrees with the underlying integer ordering.
    #[test]
    fn ordering_matches_nanos(a: u64, b: u64) {
        prop_assert_eq!(
            Timestamp::from_nanos(a).cmp(&Timestamp::from_nanos(b)),
            a.cmp(&b)
        );
    }
}

//! # Chronostrat
//!
//! Chronological chain enumeration over time-sorted buckets.
//!
//! Given a sequence of buckets, each sorted ascending within itself,
//! chronostrat answers one question end-to-end: which full-length
//! combinations of one timestamp per bucket are chronologically legal?
//! The answer is computed in two pure stages:
//!
//! ```text
//! ┌──────────┐   ┌────────────────┐   ┌───────────────────┐
//! │ Buckets  │ → │ Successor scan │ → │ Chain enumeration │ → Chains
//! │ (sorted) │   │ (pairwise)     │   │ (backtracking)    │
//! └──────────┘   └────────────────┘   └───────────────────┘
//! ```
//!
//! The scan annotates each timestamp with a candidate successor index in
//! the next bucket (or a sentinel when none exists); enumeration expands
//! the annotations depth-first, treating each candidate as a lower bound
//! and branching into every higher index as well.
//!
//! # Quick Start
//!
//! ```
//! use chronostrat::{Bucket, legal_chains};
//!
//! let buckets = vec![
//!     Bucket::from_nanos([100, 400]),
//!     Bucket::from_nanos([200, 300]),
//!     Bucket::from_nanos([600]),
//! ];
//!
//! let chains = legal_chains(&buckets);
//! assert_eq!(chains.len(), 2);
//! ```
//!
//! # Modules
//!
//! - **Pipeline**: [`legal_chains`] - the composed two-stage entry point
//! - **Fixtures**: [`fixtures`] - deterministic sample bucket sets
//! - **Kernel**: re-exported scan and enumeration stages for callers that
//!   need the intermediate [`SuccessorTable`]

pub mod fixtures;
mod pipeline;

pub use pipeline::legal_chains;

// Re-export core types from chronostrat-types
pub use chronostrat_types::{Bucket, Timestamp};

// Re-export kernel types
pub use chronostrat_kernel::{
    Chain, KernelError, Successor, SuccessorTable, build_successor_table, enumerate_chains,
};

//! # chronostrat-kernel: Functional core of `chronostrat`
//!
//! The kernel is the pure, deterministic heart of the system. It takes a
//! sequence of time-sorted buckets, annotates cross-bucket successor
//! candidates, and enumerates every chronological chain those annotations
//! admit.
//!
//! ## Key Principles
//!
//! - **No IO**: The kernel never touches disk, network, or any external resource
//! - **No clocks**: Timestamps arrive from the caller, never from the system
//! - **No randomness**: Same input always produces same output
//! - **Pure functions**: `build_successor_table(buckets) -> table`,
//!   `enumerate_chains(buckets, table) -> chains`
//!
//! ## Architecture
//!
//! - [`table`]: The [`Successor`] slot and the [`SuccessorTable`] annotation
//! - [`chain`]: The [`Chain`] output type
//! - [`kernel`]: The two scan stages that tie it all together
//!
//! ## Example
//!
//! ```
//! use chronostrat_kernel::{build_successor_table, enumerate_chains};
//! use chronostrat_types::Bucket;
//!
//! let buckets = vec![
//!     Bucket::from_nanos([1, 4]),
//!     Bucket::from_nanos([6, 7]),
//! ];
//!
//! let table = build_successor_table(&buckets);
//! let chains = enumerate_chains(&buckets, &table).expect("table matches buckets");
//! assert_eq!(chains.len(), 4);
//! ```

pub mod chain;
pub mod kernel;
pub mod table;


// Re-export commonly used items
pub use chain::Chain;
pub use kernel::{KernelError, build_successor_table, enumerate_chains};
pub use table::{Successor, SuccessorTable};

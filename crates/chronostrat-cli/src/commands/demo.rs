//! Demo command - walk the built-in sample set end to end.

use anyhow::Result;
use chronostrat::{build_successor_table, enumerate_chains, fixtures};
use tracing::info;

use crate::render;

pub fn run() -> Result<()> {
    let buckets = fixtures::sample_buckets();
    info!("scanning {} sample buckets", buckets.len());

    let table = build_successor_table(&buckets);
    let chains = enumerate_chains(&buckets, &table)?;
    info!("enumerated {} chains", chains.len());

    render::print_buckets(&buckets);
    render::print_successor_table(&table);
    render::print_chains(&chains, None);

    Ok(())
}

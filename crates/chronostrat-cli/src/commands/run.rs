//! Run command - scan buckets from a JSON file and enumerate their chains.

use std::fs;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, Utc};
use chronostrat::{
    Bucket, Chain, SuccessorTable, Timestamp, build_successor_table, enumerate_chains,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::render;

/// One timestamp in the input file: raw nanoseconds or a calendar string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Nanos(u64),
    Text(String),
}

/// Machine-readable output for `--json`.
#[derive(Serialize)]
struct JsonReport<'a> {
    bucket_count: usize,
    chain_count: usize,
    table: &'a SuccessorTable,
    chains: &'a [Chain],
}

pub fn run(file: &str, limit: Option<usize>, json: bool) -> Result<()> {
    let buckets = load_buckets(file)?;
    debug!("loaded {} buckets from {file}", buckets.len());

    let table = build_successor_table(&buckets);
    let chains = enumerate_chains(&buckets, &table)?;
    debug!("enumerated {} chains", chains.len());

    if json {
        let report = JsonReport {
            bucket_count: buckets.len(),
            chain_count: chains.len(),
            table: &table,
            chains: &chains,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    render::print_buckets(&buckets);
    render::print_successor_table(&table);
    render::print_chains(&chains, limit);

    Ok(())
}

fn load_buckets(file: &str) -> Result<Vec<Bucket>> {
    let text = fs::read_to_string(file).with_context(|| format!("failed to read {file}"))?;
    let raw: Vec<Vec<RawTimestamp>> = serde_json::from_str(&text)
        .with_context(|| format!("{file} is not a JSON array of timestamp buckets"))?;

    let mut buckets = Vec::with_capacity(raw.len());
    for (index, stamps) in raw.into_iter().enumerate() {
        let parsed: Result<Vec<Timestamp>> = stamps.into_iter().map(parse_timestamp).collect();
        let bucket = Bucket::new(parsed.with_context(|| format!("in bucket {index}"))?);
        if !bucket.is_sorted() {
            warn!("bucket {index} is not sorted ascending; results are undefined");
        }
        buckets.push(bucket);
    }
    Ok(buckets)
}

fn parse_timestamp(raw: RawTimestamp) -> Result<Timestamp> {
    match raw {
        RawTimestamp::Nanos(nanos) => Ok(Timestamp::from_nanos(nanos)),
        RawTimestamp::Text(text) => parse_calendar(&text),
    }
}

/// Parses RFC 3339 first, then bare `YYYY-MM-DD` at midnight UTC.
fn parse_calendar(text: &str) -> Result<Timestamp> {
    if let Ok(moment) = DateTime::parse_from_rfc3339(text) {
        return nanos_since_epoch(moment.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0).expect("midnight is always a valid time");
        return nanos_since_epoch(midnight.and_utc());
    }
    bail!("'{text}' is neither RFC 3339 nor YYYY-MM-DD")
}

fn nanos_since_epoch(moment: DateTime<Utc>) -> Result<Timestamp> {
    let nanos = moment
        .timestamp_nanos_opt()
        .context("timestamp does not fit the nanosecond range")?;
    let nanos =
        u64::try_from(nanos).context("timestamps before the Unix epoch are not supported")?;
    Ok(Timestamp::from_nanos(nanos))
}

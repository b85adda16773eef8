//! Terminal rendering for buckets, successor tables, and chains.
//!
//! Uses comfy-table for layout and owo-colors for semantic styling.

use std::sync::atomic::{AtomicBool, Ordering};

use chronostrat::{Bucket, Chain, SuccessorTable, Timestamp};
use chrono::DateTime;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use owo_colors::{OwoColorize, Style};

/// Global flag to track if colors are disabled.
static NO_COLOR: AtomicBool = AtomicBool::new(false);

/// Sets the global no-color flag.
pub fn set_no_color(value: bool) {
    NO_COLOR.store(value, Ordering::SeqCst);
}

/// Checks if colors are disabled.
fn no_color() -> bool {
    NO_COLOR.load(Ordering::SeqCst)
}

fn header_style() -> Style {
    Style::new().bold()
}

fn muted_style() -> Style {
    Style::new().dimmed()
}

/// Trait extension to apply semantic styles.
trait SemanticStyle: Sized {
    /// Apply section header styling (bold).
    fn header(&self) -> String;
    /// Apply muted styling (dimmed).
    fn muted(&self) -> String;
}

impl<T: std::fmt::Display> SemanticStyle for T {
    fn header(&self) -> String {
        if no_color() {
            self.to_string()
        } else {
            self.style(header_style()).to_string()
        }
    }

    fn muted(&self) -> String {
        if no_color() {
            self.to_string()
        } else {
            self.style(muted_style()).to_string()
        }
    }
}

/// Formats a timestamp as UTC calendar time, falling back to raw
/// seconds.nanoseconds when it does not fit the calendar range.
fn format_timestamp(ts: Timestamp) -> String {
    let secs = ts.as_secs();
    let subsec = (ts.as_nanos() % 1_000_000_000) as u32;
    match i64::try_from(secs)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, subsec))
    {
        Some(moment) if subsec == 0 => moment.format("%Y-%m-%d %H:%M:%S").to_string(),
        Some(moment) => moment.format("%Y-%m-%d %H:%M:%S%.9f").to_string(),
        None => ts.to_string(),
    }
}

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cells(columns: &[&str]) -> Vec<Cell> {
    columns
        .iter()
        .map(|col| {
            if no_color() {
                Cell::new(col)
            } else {
                Cell::new(col)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan)
            }
        })
        .collect()
}

/// Prints the input buckets, one row per bucket.
pub fn print_buckets(buckets: &[Bucket]) {
    println!("{}", "Buckets".header());

    let mut table = styled_table();
    table.set_header(header_cells(&["Bucket", "Size", "Timestamps"]));
    for (index, bucket) in buckets.iter().enumerate() {
        let stamps: Vec<String> = bucket.iter().map(format_timestamp).collect();
        table.add_row(vec![
            index.to_string(),
            bucket.len().to_string(),
            stamps.join(", "),
        ]);
    }
    println!("{table}");

    let count = buckets.len();
    let word = if count == 1 { "bucket" } else { "buckets" };
    println!("{}", format!("({count} {word})").muted());
    println!();
}

/// Prints successor slots per bucket in the signed index encoding.
pub fn print_successor_table(successors: &SuccessorTable) {
    println!("{}", "Successor table".header());

    let mut table = styled_table();
    table.set_header(header_cells(&["Bucket", "Slots"]));
    for (index, row) in successors.rows().iter().enumerate() {
        let slots: Vec<String> = row.iter().map(ToString::to_string).collect();
        table.add_row(vec![index.to_string(), slots.join(" ")]);
    }
    println!("{table}");

    let count = successors.bucket_count();
    let word = if count == 1 { "row" } else { "rows" };
    println!("{}", format!("({count} {word})").muted());
    println!();
}

/// Prints enumerated chains, bounded by `limit` when given.
pub fn print_chains(chains: &[Chain], limit: Option<usize>) {
    println!("{}", "Chains".header());

    let shown = limit.map_or(chains.len(), |limit| limit.min(chains.len()));

    let mut table = styled_table();
    table.set_header(header_cells(&["#", "Chain"]));
    for (ordinal, chain) in chains.iter().take(shown).enumerate() {
        let stamps: Vec<String> = chain.iter().map(format_timestamp).collect();
        table.add_row(vec![(ordinal + 1).to_string(), stamps.join(" -> ")]);
    }
    println!("{table}");

    let total = chains.len();
    let word = if total == 1 { "chain" } else { "chains" };
    if shown < total {
        println!("{}", format!("(showing {shown} of {total} {word})").muted());
    } else {
        println!("{}", format!("({total} {word})").muted());
    }
    println!();
}

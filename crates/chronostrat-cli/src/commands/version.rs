//! Version command implementation.

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

pub fn run() {
    println!("{NAME} {VERSION}");
    println!();
    println!("Chronological chain enumeration over time-sorted buckets.");
}

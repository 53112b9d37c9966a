//! Trace a rotation file through the crossing tracker
//!
//! Prints every command with its crossing count and the running total.
//! Run with `RUST_LOG=trace` to also see the tracker's own position log.
//!
//! Usage:
//!   cargo run --example trace_rotations -- <input.txt> [start_position]

use puzzle_artifacts::{parse_rotations, CrossingTracker};
use std::env;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("Usage: trace_rotations <input.txt> [start_position]");
        std::process::exit(1);
    };
    let start = match args.next() {
        Some(value) => value.parse::<i64>()?,
        None => 50,
    };

    let text = fs::read_to_string(&path)?;
    let rotations = parse_rotations(&text)?;
    let mut tracker = CrossingTracker::with_position(start)?;

    println!("{:>6}  {:>8}  {:>4}  {:>9}  {:>6}", "#", "command", "pos", "crossings", "total");
    let mut total = 0;
    for (i, rotation) in rotations.iter().enumerate() {
        let count = tracker.apply(rotation)?;
        total += count;
        println!(
            "{:>6}  {:>8}  {:>4}  {:>9}  {:>6}",
            i,
            rotation.to_string(),
            tracker.position(),
            count,
            total
        );
    }

    println!("\nExpected total: {}", total);
    Ok(())
}

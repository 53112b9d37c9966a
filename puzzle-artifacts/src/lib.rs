//! Puzzle Artifact Library
//!
//! Converts puzzle input text into compact hex and Verilog artifacts consumed
//! by a hardware simulation.
//!
//! # Architecture
//!
//! - Parses rotation commands (`R19`, `L18`, ...) and splitter grids
//! - Tracks a position on a 100-unit circular track and counts zero crossings
//! - Emits one artifact per run through a single format seam
//!
//! The library does NOT:
//! - Parse command-line arguments or configuration files
//! - Set up logging
//!
//! Both live in the application layer (puzzle-artifacts-cli).
//!
//! # Example Usage
//!
//! ```
//! use puzzle_artifacts::{run, Rotation};
//!
//! let rotations = [Rotation::right(19), Rotation::left(18), Rotation::right(50)];
//! let outcome = run(&rotations).unwrap();
//!
//! assert_eq!(outcome.counts, vec![0, 0, 1]);
//! assert_eq!(outcome.total, 1);
//! ```

// Public modules
pub mod config;
pub mod formats;
pub mod generator;
pub mod parser;
pub mod tracker;
pub mod types;

// Re-export main types for convenience
pub use config::GeneratorConfig;
pub use formats::{ArtifactFormat, ArtifactWriter};
pub use generator::{default_output_path, GenerationSummary, Generator};
pub use parser::{parse_rotation, parse_rotations, parse_splitter_grid, parse_splitter_row};
pub use tracker::{run, CrossingTracker, Crossings, SessionOutcome};
pub use types::{Direction, GenError, Result, Rotation, SplitterRow, TRACK_SIZE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: a fresh tracker starts mid-track
        let tracker = CrossingTracker::new();
        assert_eq!(tracker.position(), 50);
        assert!(!VERSION.is_empty());
    }
}

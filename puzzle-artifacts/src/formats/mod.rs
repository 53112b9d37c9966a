//! Artifact output formats
//!
//! Every artifact the generator can produce goes through the [`ArtifactWriter`]
//! trait; [`ArtifactFormat`] selects which one a run uses.

use crate::types::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

pub mod crossings;
pub mod packed;
pub mod splitters;
pub mod verilog;

// Re-export writer types
pub use crossings::CrossingHex;
pub use packed::PackedHex;
pub use splitters::SplitterHex;
pub use verilog::VerilogRotations;

/// Common trait for all artifact emitters
pub trait ArtifactWriter {
    /// Write the artifact to `out` and return the number of data lines emitted
    fn write_artifact(&self, out: &mut dyn Write) -> Result<usize>;
}

/// Which artifact a generator run produces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    /// Verilog `initial` block with packed rotation bytes
    Verilog,
    /// Per-rotation zero crossing counts, two hex digits per line
    #[default]
    Crossings,
    /// Packed rotation bytes, two hex digits per line
    Packed,
    /// Splitter grid rows as 16-bit words, four hex digits per line
    Splitters,
}

impl ArtifactFormat {
    /// All formats, in CLI help order
    pub const ALL: [ArtifactFormat; 4] = [
        ArtifactFormat::Verilog,
        ArtifactFormat::Crossings,
        ArtifactFormat::Packed,
        ArtifactFormat::Splitters,
    ];

    /// File name used when no explicit output path is given
    pub fn default_file_name(self) -> &'static str {
        match self {
            ArtifactFormat::Verilog => "day_01_input.v",
            ArtifactFormat::Crossings => "crossings.hex",
            ArtifactFormat::Packed => "rotations.hex",
            ArtifactFormat::Splitters => "splitters.hex",
        }
    }

    /// True if the format reads the splitter grid instead of rotations
    pub fn is_grid(self) -> bool {
        matches!(self, ArtifactFormat::Splitters)
    }

    /// Name of one input record, for summaries
    pub fn record_name(self) -> &'static str {
        if self.is_grid() {
            "splitter rows"
        } else {
            "rotations"
        }
    }

    fn name(self) -> &'static str {
        match self {
            ArtifactFormat::Verilog => "verilog",
            ArtifactFormat::Crossings => "crossings",
            ArtifactFormat::Packed => "packed",
            ArtifactFormat::Splitters => "splitters",
        }
    }
}

impl fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArtifactFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|f| f.name()).collect();
                format!("unknown format '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("verilog".parse::<ArtifactFormat>().unwrap(), ArtifactFormat::Verilog);
        assert_eq!("Crossings".parse::<ArtifactFormat>().unwrap(), ArtifactFormat::Crossings);
        assert_eq!(" packed ".parse::<ArtifactFormat>().unwrap(), ArtifactFormat::Packed);
        let err = "bitmap".parse::<ArtifactFormat>().unwrap_err();
        assert!(err.contains("splitters"));
    }

    #[test]
    fn test_format_display_round_trip() {
        for format in ArtifactFormat::ALL {
            assert_eq!(format.to_string().parse::<ArtifactFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_default_file_names() {
        assert_eq!(ArtifactFormat::Verilog.default_file_name(), "day_01_input.v");
        assert_eq!(ArtifactFormat::Splitters.default_file_name(), "splitters.hex");
        assert!(ArtifactFormat::Splitters.is_grid());
        assert!(!ArtifactFormat::Packed.is_grid());
    }
}

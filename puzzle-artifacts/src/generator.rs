//! Main generator API
//!
//! The [`Generator`] ties the parsers, the crossing tracker and the artifact
//! emitters together. It is the entry point for both in-memory and file-based
//! runs.

use crate::config::GeneratorConfig;
use crate::formats::{
    ArtifactFormat, ArtifactWriter, CrossingHex, PackedHex, SplitterHex, VerilogRotations,
};
use crate::parser::{parse_rotations, parse_splitter_grid};
use crate::tracker::CrossingTracker;
use crate::types::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Summary of one generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Format that was produced
    pub format: ArtifactFormat,
    /// Input records consumed (rotations or non-empty grid rows)
    pub records: usize,
    /// Data lines written to the artifact
    pub lines: usize,
    /// Sum of all crossing counts (crossings format only)
    pub total_crossings: Option<u64>,
    /// Where the artifact was written (file-based runs only)
    pub output: Option<PathBuf>,
}

/// The main generator struct
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator, validating the configuration
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Parse `input`, compute what the format needs and write the artifact
    ///
    /// # Example
    /// ```
    /// use puzzle_artifacts::{ArtifactFormat, Generator, GeneratorConfig};
    ///
    /// let config = GeneratorConfig::new().with_format(ArtifactFormat::Crossings);
    /// let generator = Generator::new(config).unwrap();
    ///
    /// let mut out = Vec::new();
    /// let summary = generator.generate("R19\nL18\nR50\n", &mut out).unwrap();
    ///
    /// assert_eq!(summary.total_crossings, Some(1));
    /// assert_eq!(String::from_utf8(out).unwrap(), "00\n00\n01\n");
    /// ```
    pub fn generate<W: Write>(&self, input: &str, out: &mut W) -> Result<GenerationSummary> {
        let format = self.config.format;
        log::debug!("Generating {} artifact", format);

        let (records, lines, total_crossings) = match format {
            ArtifactFormat::Verilog => {
                let rotations = parse_rotations(input)?;
                let lines = VerilogRotations(&rotations).write_artifact(out)?;
                (rotations.len(), lines, None)
            }
            ArtifactFormat::Crossings => {
                let rotations = parse_rotations(input)?;
                let mut tracker = CrossingTracker::with_position(self.config.start_position)?;
                let outcome = tracker.run(&rotations)?;
                let lines = CrossingHex(&outcome.counts).write_artifact(out)?;
                (rotations.len(), lines, Some(outcome.total))
            }
            ArtifactFormat::Packed => {
                let rotations = parse_rotations(input)?;
                let lines = PackedHex(&rotations).write_artifact(out)?;
                (rotations.len(), lines, None)
            }
            ArtifactFormat::Splitters => {
                log::debug!(
                    "Grid width {} -> {} words per row",
                    self.config.grid_width,
                    self.config.words_per_row()
                );
                let rows = parse_splitter_grid(input, self.config.grid_width)?;
                let lines = SplitterHex(&rows).write_artifact(out)?;
                (rows.len(), lines, None)
            }
        };

        Ok(GenerationSummary {
            format,
            records,
            lines,
            total_crossings,
            output: None,
        })
    }

    /// Read `input`, generate, and write the artifact to disk
    ///
    /// Without an explicit `output` path the artifact is written next to the
    /// input file under the format's default name. The artifact is rendered in
    /// memory first; on any error an existing output file is left untouched.
    pub fn generate_file(&self, input: &Path, output: Option<&Path>) -> Result<GenerationSummary> {
        log::info!("Reading puzzle input: {:?}", input);
        let text = fs::read_to_string(input)?;

        let output_path = match output {
            Some(path) => path.to_path_buf(),
            None => default_output_path(input, self.config.format),
        };

        let mut rendered = Vec::new();
        let mut summary = self.generate(&text, &mut rendered)?;
        fs::write(&output_path, &rendered)?;

        log::info!(
            "Wrote {} lines to {:?}",
            summary.lines,
            output_path
        );

        summary.output = Some(output_path);
        Ok(summary)
    }
}

/// Default artifact location: the format's file name in the input's directory
pub fn default_output_path(input: &Path, format: ArtifactFormat) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(format.default_file_name())
}

//! Generator configuration types
//!
//! This module defines the small amount of configuration the library needs.
//! File loading and command-line overrides live in the application layer.

use crate::formats::ArtifactFormat;
use crate::parser::{DEFAULT_GRID_WIDTH, MAX_GRID_WIDTH};
use crate::tracker::DEFAULT_START_POSITION;
use crate::types::{GenError, Result, TRACK_SIZE};
use serde::{Deserialize, Serialize};

/// Configuration for one generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Artifact to produce
    #[serde(default)]
    pub format: ArtifactFormat,

    /// Tracker start position (default: 50)
    #[serde(default = "default_start_position")]
    pub start_position: i64,

    /// Splitter grid width in columns (default: 141)
    #[serde(default = "default_grid_width")]
    pub grid_width: usize,
}

fn default_start_position() -> i64 {
    DEFAULT_START_POSITION
}

fn default_grid_width() -> usize {
    DEFAULT_GRID_WIDTH
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            format: ArtifactFormat::default(),
            start_position: default_start_position(),
            grid_width: default_grid_width(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new generator configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: select the artifact format
    pub fn with_format(mut self, format: ArtifactFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder method: set the tracker start position
    pub fn with_start_position(mut self, position: i64) -> Self {
        self.start_position = position;
        self
    }

    /// Builder method: set the splitter grid width
    pub fn with_grid_width(mut self, width: usize) -> Self {
        self.grid_width = width;
        self
    }

    /// Number of 16-bit words emitted per splitter row
    pub fn words_per_row(&self) -> usize {
        self.grid_width.div_ceil(16)
    }

    /// Check that the values can be used for a run
    pub fn validate(&self) -> Result<()> {
        if !(0..TRACK_SIZE).contains(&self.start_position) {
            return Err(GenError::InvalidPosition(self.start_position));
        }
        if !(1..=MAX_GRID_WIDTH).contains(&self.grid_width) {
            return Err(GenError::InvalidGridWidth(self.grid_width));
        }
        Ok(())
    }
}

//! Crossing count hex emitter
//!
//! One count per line as lowercase hex, zero-padded to two digits. Larger
//! counts widen rather than truncate.

use super::ArtifactWriter;
use crate::types::Result;
use std::io::Write;

/// Per-rotation crossing counts ready to be written
pub struct CrossingHex<'a>(pub &'a [u64]);

impl ArtifactWriter for CrossingHex<'_> {
    fn write_artifact(&self, out: &mut dyn Write) -> Result<usize> {
        for count in self.0 {
            writeln!(out, "{:02x}", count)?;
        }
        Ok(self.0.len())
    }
}

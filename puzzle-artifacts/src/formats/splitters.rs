//! Splitter grid hex emitter

use super::ArtifactWriter;
use crate::types::{Result, SplitterRow};
use std::io::Write;

/// Splitter rows written as 16-bit words, least significant word first
pub struct SplitterHex<'a>(pub &'a [SplitterRow]);

impl ArtifactWriter for SplitterHex<'_> {
    fn write_artifact(&self, out: &mut dyn Write) -> Result<usize> {
        let mut lines = 0;
        for row in self.0 {
            for word in &row.words {
                writeln!(out, "{:04x}", word)?;
                lines += 1;
            }
        }
        Ok(lines)
    }
}

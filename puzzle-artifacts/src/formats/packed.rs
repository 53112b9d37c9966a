//! Packed rotation byte encoding
//!
//! Layout: bit 7 = direction (0 = L, 1 = R), bits 6..0 = distance mod 100.

use super::ArtifactWriter;
use crate::types::{Result, Rotation};
use std::io::Write;

/// Pack one rotation into its byte form
pub fn pack_rotation(rotation: &Rotation) -> Result<u8> {
    let distance = rotation.distance_mod_track()?;
    Ok((rotation.direction.bit() << 7) | distance)
}

/// Rotations written as one packed byte per line
pub struct PackedHex<'a>(pub &'a [Rotation]);

impl ArtifactWriter for PackedHex<'_> {
    fn write_artifact(&self, out: &mut dyn Write) -> Result<usize> {
        for rotation in self.0 {
            writeln!(out, "{:02x}", pack_rotation(rotation)?)?;
        }
        Ok(self.0.len())
    }
}

//! Verilog constant emitter
//!
//! Produces a snippet meant to be `include`d inside a module body:
//!
//! ```text
//! localparam NUM_ROTATIONS = 3;
//! reg [7:0] rotations [0:2];
//! initial begin
//!     rotations[0] = 8'h93;  // R19
//!     ...
//! end
//! ```

use super::packed::pack_rotation;
use super::ArtifactWriter;
use crate::types::{Result, Rotation};
use std::io::Write;

/// Rotations written as a packed Verilog array
pub struct VerilogRotations<'a>(pub &'a [Rotation]);

impl ArtifactWriter for VerilogRotations<'_> {
    fn write_artifact(&self, out: &mut dyn Write) -> Result<usize> {
        let rotations = self.0;
        // An empty range [0:-1] is not legal Verilog
        let last_index = rotations.len().saturating_sub(1);

        writeln!(out, "// Auto-generated from the puzzle input by puzzle-gen")?;
        writeln!(out, "// DO NOT EDIT - regenerate with: puzzle-gen --format verilog <input>")?;
        writeln!(out, "// Total rotations: {}", rotations.len())?;
        writeln!(out)?;

        writeln!(out, "localparam NUM_ROTATIONS = {};", rotations.len())?;
        writeln!(out)?;

        writeln!(out, "// Packed format: [7] = direction (0=L, 1=R), [6:0] = distance mod 100")?;
        writeln!(out, "reg [7:0] rotations [0:{}];", last_index)?;
        writeln!(out)?;

        writeln!(out, "initial begin")?;
        for (i, rotation) in rotations.iter().enumerate() {
            let packed = pack_rotation(rotation)?;
            writeln!(
                out,
                "    rotations[{}] = 8'h{:02x};  // {}{}",
                i,
                packed,
                rotation.direction,
                rotation.distance_mod_track()?
            )?;
        }
        writeln!(out, "end")?;

        Ok(rotations.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(rotations: &[Rotation]) -> String {
        let mut out = Vec::new();
        VerilogRotations(rotations).write_artifact(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_verilog_output() {
        let text = render(&[Rotation::right(19), Rotation::left(118)]);

        assert!(text.contains("// Total rotations: 2\n"));
        assert!(text.contains("localparam NUM_ROTATIONS = 2;\n"));
        assert!(text.contains("reg [7:0] rotations [0:1];\n"));
        assert!(text.contains("    rotations[0] = 8'h93;  // R19\n"));
        assert!(text.contains("    rotations[1] = 8'h12;  // L18\n"));
        assert!(text.ends_with("initial begin\n    rotations[0] = 8'h93;  // R19\n    rotations[1] = 8'h12;  // L18\nend\n"));
    }

    #[test]
    fn test_verilog_empty_input() {
        let text = render(&[]);
        assert!(text.contains("localparam NUM_ROTATIONS = 0;\n"));
        assert!(text.contains("reg [7:0] rotations [0:0];\n"));
        assert!(text.ends_with("initial begin\nend\n"));
    }
}

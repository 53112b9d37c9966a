//! Core types for the puzzle artifact library
//!
//! This module defines the values that flow between the parsers, the crossing
//! tracker and the artifact emitters, plus the library-wide error type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for library operations
pub type Result<T> = std::result::Result<T, GenError>;

/// Circumference of the circular track the tracker moves on
pub const TRACK_SIZE: i64 = 100;

/// Rotation direction around the track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards lower positions (`L`)
    Left,
    /// Towards higher positions (`R`)
    Right,
}

impl Direction {
    /// Map a command character to a direction
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Command character for this direction
    pub fn as_char(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// Bit used in the packed byte encoding (L = 0, R = 1)
    pub fn bit(self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single rotation command as read from the puzzle input
///
/// The magnitude is kept signed so that a negative value reaching the tracker
/// can be rejected instead of silently wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rotation {
    /// Direction of travel
    pub direction: Direction,
    /// Number of unit steps (may exceed one lap)
    pub magnitude: i64,
}

impl Rotation {
    /// Create a new rotation
    pub fn new(direction: Direction, magnitude: i64) -> Self {
        Self {
            direction,
            magnitude,
        }
    }

    /// Shorthand for a left rotation
    pub fn left(magnitude: i64) -> Self {
        Self::new(Direction::Left, magnitude)
    }

    /// Shorthand for a right rotation
    pub fn right(magnitude: i64) -> Self {
        Self::new(Direction::Right, magnitude)
    }

    /// Magnitude reduced to a single lap, rejecting negative values
    pub fn distance_mod_track(&self) -> Result<u8> {
        if self.magnitude < 0 {
            return Err(GenError::NegativeMagnitude(self.magnitude));
        }
        // Always < 100, fits in a u8
        Ok((self.magnitude % TRACK_SIZE) as u8)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction, self.magnitude)
    }
}

/// One row of the splitter grid as little-endian 16-bit words
///
/// Bit `i` of the row (word `i / 16`, bit `i % 16`) is set when column `i`
/// holds a splitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitterRow {
    /// Packed columns, least significant word first
    pub words: Vec<u16>,
}

impl SplitterRow {
    /// Empty row wide enough for `width` columns
    pub fn with_width(width: usize) -> Self {
        Self {
            words: vec![0; width.div_ceil(16)],
        }
    }

    /// Mark column `col` as a splitter
    pub fn set(&mut self, col: usize) {
        self.words[col / 16] |= 1 << (col % 16);
    }

    /// Number of splitters in the row
    pub fn count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }
}

/// Errors that can occur while parsing input or generating artifacts
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("Line {line}: unknown direction {found:?} (expected 'L' or 'R')")]
    UnknownDirection { line: usize, found: char },

    #[error("Line {line}: invalid magnitude {text:?}")]
    InvalidMagnitude { line: usize, text: String },

    #[error("Negative magnitude {0} is not a valid rotation")]
    NegativeMagnitude(i64),

    #[error("Magnitude {0} overflows the track arithmetic")]
    MagnitudeOverflow(i64),

    #[error("Position {0} is outside the track (0..100)")]
    InvalidPosition(i64),

    #[error("Grid width {0} is outside 1..=4096 columns")]
    InvalidGridWidth(usize),

    #[error("Line {line}: splitter at column {column} exceeds grid width {width}")]
    RowTooWide {
        line: usize,
        column: usize,
        width: usize,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_chars() {
        assert_eq!(Direction::from_char('L'), Some(Direction::Left));
        assert_eq!(Direction::from_char('R'), Some(Direction::Right));
        assert_eq!(Direction::from_char('r'), None);
        assert_eq!(Direction::Right.to_string(), "R");
        assert_eq!(Direction::Left.bit(), 0);
        assert_eq!(Direction::Right.bit(), 1);
    }

    #[test]
    fn test_distance_mod_track() {
        assert_eq!(Rotation::right(19).distance_mod_track().unwrap(), 19);
        assert_eq!(Rotation::left(250).distance_mod_track().unwrap(), 50);
        assert_eq!(Rotation::left(100).distance_mod_track().unwrap(), 0);
        assert!(matches!(
            Rotation::left(-3).distance_mod_track(),
            Err(GenError::NegativeMagnitude(-3))
        ));
    }

    #[test]
    fn test_splitter_row_bits() {
        let mut row = SplitterRow::with_width(141);
        assert_eq!(row.words.len(), 9);

        row.set(0);
        row.set(17);
        row.set(140);
        assert_eq!(row.words[0], 0x0001);
        assert_eq!(row.words[1], 0x0002);
        assert_eq!(row.words[8], 1 << 12);
        assert_eq!(row.count(), 3);
    }
}

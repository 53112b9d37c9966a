//! Puzzle input parsers
//!
//! Two line-oriented inputs are supported: rotation commands (`R19`, `L18`, ...)
//! and the splitter grid, where `^` marks a splitter.

use crate::types::{Direction, GenError, Result, Rotation, SplitterRow};

/// Default splitter grid width in columns
pub const DEFAULT_GRID_WIDTH: usize = 141;

/// Widest splitter grid a generator accepts, in columns
pub const MAX_GRID_WIDTH: usize = 4096;

/// Parse a single rotation line
///
/// Blank lines yield `Ok(None)`. `line_no` is only used for error reporting.
pub fn parse_rotation(line: &str, line_no: usize) -> Result<Option<Rotation>> {
    let line = line.trim();
    let mut chars = line.chars();
    let Some(first) = chars.next() else {
        return Ok(None);
    };

    let direction = Direction::from_char(first).ok_or(GenError::UnknownDirection {
        line: line_no,
        found: first,
    })?;

    let rest = chars.as_str().trim();
    let magnitude = rest
        .parse::<i64>()
        .map_err(|_| GenError::InvalidMagnitude {
            line: line_no,
            text: rest.to_string(),
        })?;

    Ok(Some(Rotation::new(direction, magnitude)))
}

/// Parse every rotation in `text`, skipping blank lines
pub fn parse_rotations(text: &str) -> Result<Vec<Rotation>> {
    let mut rotations = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if let Some(rotation) = parse_rotation(line, idx + 1)? {
            rotations.push(rotation);
        }
    }

    log::debug!("Parsed {} rotations", rotations.len());
    Ok(rotations)
}

/// Parse one splitter grid row into packed words
///
/// Returns `Ok(None)` for blank rows and for rows without any splitter; those
/// rows produce no output words.
pub fn parse_splitter_row(line: &str, line_no: usize, width: usize) -> Result<Option<SplitterRow>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut row = SplitterRow::with_width(width);
    for (column, c) in line.chars().enumerate() {
        if c != '^' {
            continue;
        }
        if column >= width {
            return Err(GenError::RowTooWide {
                line: line_no,
                column,
                width,
            });
        }
        row.set(column);
    }

    if row.count() == 0 {
        log::trace!("Line {}: no splitters, row skipped", line_no);
        return Ok(None);
    }

    Ok(Some(row))
}

/// Parse the whole splitter grid
pub fn parse_splitter_grid(text: &str, width: usize) -> Result<Vec<SplitterRow>> {
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (idx, line) in text.lines().enumerate() {
        match parse_splitter_row(line, idx + 1, width)? {
            Some(row) => rows.push(row),
            None if !line.trim().is_empty() => skipped += 1,
            None => {}
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {} grid rows without splitters", skipped);
    }
    log::debug!("Parsed {} splitter rows (width {})", rows.len(), width);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rotation_basic() {
        assert_eq!(parse_rotation("R19", 1).unwrap(), Some(Rotation::right(19)));
        assert_eq!(parse_rotation("L18", 1).unwrap(), Some(Rotation::left(18)));
        assert_eq!(parse_rotation("  R250 \r", 1).unwrap(), Some(Rotation::right(250)));
        assert_eq!(parse_rotation("L0", 1).unwrap(), Some(Rotation::left(0)));
    }

    #[test]
    fn test_parse_rotation_blank() {
        assert_eq!(parse_rotation("", 1).unwrap(), None);
        assert_eq!(parse_rotation("   \t", 1).unwrap(), None);
    }

    #[test]
    fn test_parse_rotation_negative_passes_through() {
        // Rejected later by the tracker and the packed encoders
        assert_eq!(parse_rotation("L-5", 1).unwrap(), Some(Rotation::left(-5)));
    }

    #[test]
    fn test_parse_rotation_errors() {
        match parse_rotation("X10", 7) {
            Err(GenError::UnknownDirection { line, found }) => {
                assert_eq!(line, 7);
                assert_eq!(found, 'X');
            }
            other => panic!("unexpected result: {:?}", other),
        }

        match parse_rotation("Rabc", 3) {
            Err(GenError::InvalidMagnitude { line, text }) => {
                assert_eq!(line, 3);
                assert_eq!(text, "abc");
            }
            other => panic!("unexpected result: {:?}", other),
        }

        assert!(matches!(
            parse_rotation("R", 1),
            Err(GenError::InvalidMagnitude { .. })
        ));
    }

    #[test]
    fn test_parse_rotations_skips_blank_lines() {
        let text = "R19\n\nL18\n   \nR50\n";
        let rotations = parse_rotations(text).unwrap();
        assert_eq!(
            rotations,
            vec![Rotation::right(19), Rotation::left(18), Rotation::right(50)]
        );
    }

    #[test]
    fn test_parse_rotations_reports_line_number() {
        let text = "R1\n\nQ2\n";
        assert!(matches!(
            parse_rotations(text),
            Err(GenError::UnknownDirection { line: 3, .. })
        ));
    }

    #[test]
    fn test_parse_splitter_row() {
        let row = parse_splitter_row("^.^", 1, DEFAULT_GRID_WIDTH)
            .unwrap()
            .unwrap();
        assert_eq!(row.words.len(), 9);
        assert_eq!(row.words[0], 0x0005);
        assert!(row.words[1..].iter().all(|&w| w == 0));
    }

    #[test]
    fn test_parse_splitter_row_skips_empty() {
        assert_eq!(parse_splitter_row("", 1, DEFAULT_GRID_WIDTH).unwrap(), None);
        assert_eq!(parse_splitter_row(".......S...", 1, DEFAULT_GRID_WIDTH).unwrap(), None);
    }

    #[test]
    fn test_parse_splitter_row_too_wide() {
        let line = format!("{}^", ".".repeat(20));
        assert!(matches!(
            parse_splitter_row(&line, 4, 16),
            Err(GenError::RowTooWide {
                line: 4,
                column: 20,
                width: 16
            })
        ));
        // Trailing empty cells past the width are fine
        let line = format!("^{}", ".".repeat(40));
        assert!(parse_splitter_row(&line, 1, 16).unwrap().is_some());
    }

    #[test]
    fn test_parse_splitter_grid() {
        let text = "..S..\n.....\n..^..\n.^.^.\n";
        let rows = parse_splitter_grid(text, DEFAULT_GRID_WIDTH).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].words[0], 0b00100);
        assert_eq!(rows[1].words[0], 0b01010);
    }
}

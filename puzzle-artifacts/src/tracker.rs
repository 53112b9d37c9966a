//! Circular crossing tracker
//!
//! Tracks a position on a 100-unit circular track and counts, for every
//! rotation applied, how many times the movement passes through or lands on
//! position 0.

use crate::types::{Direction, GenError, Result, Rotation, TRACK_SIZE};
use serde::{Deserialize, Serialize};

/// Position every fresh tracker starts from
pub const DEFAULT_START_POSITION: i64 = 50;

/// Mutable position state plus the crossing arithmetic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossingTracker {
    position: i64,
}

impl Default for CrossingTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl CrossingTracker {
    /// Create a tracker at the default start position (50)
    pub fn new() -> Self {
        Self {
            position: DEFAULT_START_POSITION,
        }
    }

    /// Create a tracker at an arbitrary position in `[0, 100)`
    pub fn with_position(position: i64) -> Result<Self> {
        if !(0..TRACK_SIZE).contains(&position) {
            return Err(GenError::InvalidPosition(position));
        }
        Ok(Self { position })
    }

    /// Current position on the track
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Apply one rotation and return the number of zero crossings it caused
    ///
    /// # Crossing rules
    /// * Right: `floor((position + magnitude) / 100)`
    /// * Left from 0: `floor(magnitude / 100)`
    /// * Left otherwise: `floor((magnitude - position) / 100) + 1` once the
    ///   magnitude reaches `position`, else 0
    ///
    /// A negative magnitude is rejected and the position is left untouched.
    pub fn apply(&mut self, rotation: &Rotation) -> Result<u64> {
        let magnitude = rotation.magnitude;
        if magnitude < 0 {
            return Err(GenError::NegativeMagnitude(magnitude));
        }

        let position = self.position;
        let crossings = match rotation.direction {
            Direction::Right => {
                let end = position
                    .checked_add(magnitude)
                    .ok_or(GenError::MagnitudeOverflow(magnitude))?;
                self.position = end.rem_euclid(TRACK_SIZE);
                end / TRACK_SIZE
            }
            Direction::Left => {
                let crossings = if position == 0 {
                    magnitude / TRACK_SIZE
                } else if magnitude >= position {
                    (magnitude - position) / TRACK_SIZE + 1
                } else {
                    0
                };
                self.position = (position - magnitude).rem_euclid(TRACK_SIZE);
                crossings
            }
        };

        log::trace!(
            "{}: {} -> {} ({} crossings)",
            rotation,
            position,
            self.position,
            crossings
        );

        // Both branches only divide non-negative values
        Ok(crossings as u64)
    }

    /// Lazily apply `rotations` in order, yielding one crossing count each
    ///
    /// Dropping the iterator early is fine; the tracker keeps the position
    /// reached by the last command that was pulled.
    pub fn crossings<'a, I>(&'a mut self, rotations: I) -> Crossings<'a, I::IntoIter>
    where
        I: IntoIterator<Item = &'a Rotation>,
    {
        Crossings {
            tracker: self,
            rotations: rotations.into_iter(),
        }
    }

    /// Apply every rotation and collect the per-command counts and their total
    pub fn run<'a, I>(&mut self, rotations: I) -> Result<SessionOutcome>
    where
        I: IntoIterator<Item = &'a Rotation>,
    {
        let mut counts = Vec::new();
        let mut total = 0u64;

        for rotation in rotations {
            let count = self.apply(rotation)?;
            total += count;
            counts.push(count);
        }

        log::debug!(
            "Tracked {} rotations: {} crossings, final position {}",
            counts.len(),
            total,
            self.position
        );

        Ok(SessionOutcome {
            counts,
            total,
            final_position: self.position,
        })
    }
}

/// Iterator returned by [`CrossingTracker::crossings`]
pub struct Crossings<'a, I> {
    tracker: &'a mut CrossingTracker,
    rotations: I,
}

impl<'a, I> Iterator for Crossings<'a, I>
where
    I: Iterator<Item = &'a Rotation>,
{
    type Item = Result<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        let rotation = self.rotations.next()?;
        Some(self.tracker.apply(rotation))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rotations.size_hint()
    }
}

/// Result of running one full command sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// Crossing count per command, in input order
    pub counts: Vec<u64>,
    /// Sum of `counts`
    pub total: u64,
    /// Tracker position after the last command
    pub final_position: i64,
}

/// Run `rotations` through a fresh tracker starting at position 50
pub fn run<'a, I>(rotations: I) -> Result<SessionOutcome>
where
    I: IntoIterator<Item = &'a Rotation>,
{
    CrossingTracker::new().run(rotations)
}

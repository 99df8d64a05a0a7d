//! Offset ranges within a source file that diagnostics point at.

use serde::{Deserialize, Serialize};

/// The location of a diagnostic within its source file.
///
/// `start` is inclusive and `end` exclusive. `point` is the preferred offset: the
/// one line/column numbers, the caret, and duplicate suppression use. It lies
/// within `start..=end`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset of the start of the range (inclusive).
    pub start: u32,
    /// Preferred byte offset.
    pub point: u32,
    /// Byte offset of the end of the range (exclusive).
    pub end: u32,
}

impl Position {
    /// Creates a position with an explicit preferred offset.
    pub fn new(start: u32, point: u32, end: u32) -> Self {
        debug_assert!(start <= point && point <= end, "point outside of range");
        Self { start, point, end }
    }

    /// A zero-width position at `offset`.
    pub fn at(offset: u32) -> Self {
        Self::new(offset, offset, offset)
    }

    /// A range whose preferred offset is its start.
    pub fn range(start: u32, end: u32) -> Self {
        Self::new(start, start, end)
    }

    /// Produces a position covering both, keeping `self`'s preferred offset.
    pub fn merge(self, other: Position) -> Position {
        Position {
            start: self.start.min(other.start),
            point: self.point,
            end: self.end.max(other.end),
        }
    }

    /// Returns the length of the range in bytes. An inverted range is empty.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the range has zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Ship definitions: a straight run of cells anchored at its bow.

use core::fmt;

use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along the row, towards higher column indices.
    Horizontal,
    /// Extends down the column, towards higher row indices.
    Vertical,
}

/// A ship of `length` segments, tracking how many are still intact.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Ship {
    /// Create an undamaged ship. `length` must be at least 1.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        debug_assert!(length > 0, "ships have at least one segment");
        Self {
            bow,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    /// The `length` cells starting at the bow, in order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.length as i32).map(move |i| match self.orientation {
            Orientation::Horizontal => self.bow.offset(0, i),
            Orientation::Vertical => self.bow.offset(i, 0),
        })
    }

    /// Returns `true` if `target` is one of this ship's cells.
    pub fn is_hit_by(&self, target: Coordinate) -> bool {
        self.occupied_cells().any(|c| c == target)
    }

    /// Record one hit. Returns `true` if this hit sank the ship.
    pub(crate) fn register_hit(&mut self) -> bool {
        self.remaining_hits = self.remaining_hits.saturating_sub(1);
        self.remaining_hits == 0
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: ({}, {}), length: {}, orientation: {:?}, remaining: {} }}",
            self.bow.x, self.bow.y, self.length, self.orientation, self.remaining_hits,
        )
    }
}

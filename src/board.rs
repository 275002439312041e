//! Game board: a square grid of cell states, the ships placed on it, and the
//! bookkeeping that keeps ships apart and shots unique.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};

use crate::common::{PlacementError, ShotError, ShotOutcome};
use crate::config::{GRID_SIZE, NUM_SHIPS};
use crate::coordinate::Coordinate;
use crate::ship::Ship;

/// What a single grid cell currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Ship,
    Hit,
    Miss,
    /// Revealed surroundings of a sunk ship.
    Buffer,
}

/// Main board state: grid, ship placements, placement and shot bookkeeping.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    concealed: bool,
    grid: Vec<CellState>,
    /// Ship cells plus their buffers; consulted only by placement.
    occupied: BTreeSet<Coordinate>,
    /// Cells already shot plus revealed buffers; consulted only by shots.
    spent: BTreeSet<Coordinate>,
    ships: Vec<Ship>,
    sunk: usize,
}

impl Board {
    /// Create an empty board of the default size.
    pub fn new() -> Self {
        Self::with_size(GRID_SIZE)
    }

    /// Create an empty `size`×`size` board.
    pub fn with_size(size: usize) -> Self {
        Board {
            size,
            concealed: false,
            grid: vec![CellState::Empty; size * size],
            occupied: BTreeSet::new(),
            spent: BTreeSet::new(),
            ships: Vec::new(),
            sunk: 0,
        }
    }

    pub fn grid_size(&self) -> usize {
        self.size
    }

    /// Whether ship cells should be drawn as water.
    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    /// Returns `true` if `c` lies outside `[0, size)` on either axis.
    pub fn is_out_of_bounds(&self, c: Coordinate) -> bool {
        self.index(c).is_none()
    }

    fn index(&self, c: Coordinate) -> Option<usize> {
        let size = self.size as i64;
        let (x, y) = (c.x as i64, c.y as i64);
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some((x * size + y) as usize)
        } else {
            None
        }
    }

    /// Raw state of `c`, or `None` when off the grid.
    pub fn cell(&self, c: Coordinate) -> Option<CellState> {
        self.index(c).map(|i| self.grid[i])
    }

    /// State of `c` as an observer may see it: intact ship segments of a
    /// concealed board read as `Empty`.
    pub fn displayed_cell(&self, c: Coordinate) -> Option<CellState> {
        match self.cell(c)? {
            CellState::Ship if self.concealed => Some(CellState::Empty),
            state => Some(state),
        }
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships whose segments have all been hit.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns `true` once the full fleet has been sunk.
    pub fn is_defeated(&self) -> bool {
        self.sunk == NUM_SHIPS
    }

    /// Cells unavailable for further placement.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.occupied.iter().copied()
    }

    /// Returns `true` if `c` may no longer be targeted.
    pub fn is_spent(&self, c: Coordinate) -> bool {
        self.spent.contains(&c)
    }

    /// Reserve the ship's cells and their eight-neighbourhoods. With `reveal`
    /// the cells are marked spent and newly covered ones are drawn as buffer;
    /// without it they only block later placements.
    pub(crate) fn mark_buffer(&mut self, ship: &Ship, reveal: bool) {
        for cell in ship.occupied_cells() {
            for near in cell.neighbourhood() {
                let Some(idx) = self.index(near) else {
                    continue;
                };
                if !reveal {
                    self.occupied.insert(near);
                } else if self.spent.insert(near) {
                    self.grid[idx] = CellState::Buffer;
                }
            }
        }
    }

    /// Place `ship`, rejecting it if any cell is off the grid or touches an
    /// existing ship or its buffer.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        if ship.occupied_cells().any(|c| self.is_out_of_bounds(c)) {
            return Err(PlacementError::OutOfBounds);
        }
        if ship.occupied_cells().any(|c| self.occupied.contains(&c)) {
            return Err(PlacementError::Overlap);
        }
        for c in ship.occupied_cells() {
            if let Some(idx) = self.index(c) {
                self.grid[idx] = CellState::Ship;
            }
            self.occupied.insert(c);
        }
        trace!("placed {:?}", ship);
        self.ships.push(ship);
        self.mark_buffer(&ship, false);
        Ok(())
    }

    /// Fire at `target` and report what it struck.
    pub fn resolve_shot(&mut self, target: Coordinate) -> Result<ShotOutcome, ShotError> {
        let idx = self.index(target).ok_or(ShotError::OutOfBounds)?;
        if !self.spent.insert(target) {
            return Err(ShotError::AlreadyTargeted);
        }

        if let Some(i) = self.ships.iter().position(|s| s.is_hit_by(target)) {
            self.grid[idx] = CellState::Hit;
            if self.ships[i].register_hit() {
                self.sunk += 1;
                let ship = self.ships[i];
                self.mark_buffer(&ship, true);
                debug!("shot at ({}) sank {:?}", target, ship);
                return Ok(ShotOutcome::Sunk);
            }
            debug!("shot at ({}) hit", target);
            return Ok(ShotOutcome::Hit);
        }

        self.grid[idx] = CellState::Miss;
        debug!("shot at ({}) missed", target);
        Ok(ShotOutcome::Miss)
    }

    /// Forget every spent target before play starts. Placement bookkeeping
    /// is left intact.
    pub fn reset(&mut self) {
        self.spent.clear();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  concealed: {},\n  sunk: {},\n  ships: {:?},\n  spent: {:?}\n}}",
            self.size, self.concealed, self.sunk, self.ships, self.spent
        )
    }
}

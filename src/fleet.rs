//! Random fleet placement.
//!
//! Ships are placed in [`FLEET`] order, each as a random bow plus a random
//! orientation, retried until the board accepts it. All ships draw from one
//! shared budget of [`MAX_PLACEMENT_ATTEMPTS`]; when that runs out the partial
//! board is dropped and the caller starts over.

use log::{debug, info, trace};
use rand::Rng;

use crate::board::Board;
use crate::common::FleetError;
use crate::config::{FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

/// Candidate ship with a uniformly random bow and orientation.
///
/// The bow is drawn from `0..=size` on both axes, one past the last index, so
/// some candidates are rejected as out of bounds before any overlap check.
pub fn random_ship<R: Rng + ?Sized>(rng: &mut R, size: usize, length: usize) -> Ship {
    let bound = size as i32;
    let bow = Coordinate::new(rng.random_range(0..=bound), rng.random_range(0..=bound));
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Ship::new(bow, length, orientation)
}

/// Make a single attempt at a complete `size`×`size` board.
///
/// The returned board has its shot tracking reset and is ready for play.
pub fn try_generate_board<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<Board, FleetError> {
    place_fleet(size, |length| random_ship(rng, size, length))
}

/// Place [`FLEET`] in order using candidates from `propose`, which is called
/// with the length of the ship being placed. Every call counts against the
/// shared budget, whichever ship it was for.
pub fn place_fleet<F>(size: usize, mut propose: F) -> Result<Board, FleetError>
where
    F: FnMut(usize) -> Ship,
{
    let mut board = Board::with_size(size);
    let mut attempts = 0usize;

    for (placed, &length) in FLEET.iter().enumerate() {
        loop {
            if attempts == MAX_PLACEMENT_ATTEMPTS {
                return Err(FleetError::GenerationExhausted { placed, attempts });
            }
            attempts += 1;
            let ship = propose(length);
            match board.place_ship(ship) {
                Ok(()) => break,
                Err(e) => trace!("attempt {} rejected {:?}: {}", attempts, ship, e),
            }
        }
    }

    board.reset();
    debug!("fleet placed after {} attempts", attempts);
    Ok(board)
}

/// Generate boards until one holds the whole fleet.
///
/// Never returns if the fleet cannot fit on a `size`×`size` grid at all.
pub fn generate_board<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Board {
    let mut discarded = 0usize;
    loop {
        match try_generate_board(rng, size) {
            Ok(board) => {
                info!("generated {}x{} board ({} discarded)", size, size, discarded);
                return board;
            }
            Err(e) => {
                discarded += 1;
                debug!("{}; starting over", e);
            }
        }
    }
}

//! Common types for the game: shot outcomes and the error enums raised by the
//! board, the fleet generator and the turn engine.

use core::fmt;

/// Result of a legal shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Struck a ship that is still afloat; the shooter moves again.
    Hit,
    /// Struck water.
    Miss,
    /// Struck the last intact segment of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shooter keeps the turn.
    pub fn grants_repeat(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

/// Errors returned by `Board::place_ship`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A ship cell lies outside the grid.
    OutOfBounds,
    /// A ship cell collides with another ship or its buffer.
    Overlap,
}

/// Errors returned by `Board::resolve_shot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target lies outside the grid.
    OutOfBounds,
    /// Target was already shot or lies in a sunk ship's revealed buffer.
    AlreadyTargeted,
}

/// Errors returned by the fleet generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    /// The shared attempt budget ran out before every ship was placed.
    GenerationExhausted { placed: usize, attempts: usize },
}

/// Conditions the turn engine cannot recover from on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A combatant can no longer supply targets (e.g. its input stream closed).
    InputClosed,
    /// A turn was requested after the game ended.
    GameFinished,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Overlap => write!(f, "Ship placement overlaps another ship or its buffer"),
        }
    }
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds => write!(f, "You are trying to shoot off the board!"),
            ShotError::AlreadyTargeted => write!(f, "You have already shot at this cell!"),
        }
    }
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::GenerationExhausted { placed, attempts } => write!(
                f,
                "Fleet generation gave up after {} attempts with {} ships placed",
                attempts, placed
            ),
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InputClosed => write!(f, "Input closed before a target was chosen"),
            GameError::GameFinished => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for ShotError {}
#[cfg(feature = "std")]
impl std::error::Error for FleetError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}

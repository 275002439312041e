//! Commonly used types and utilities for ease of import.

pub use crate::{
    generate_board, AutomatedPlayer, Board, CellState, Combatant, Coordinate, GameEngine,
    GameState, Orientation, Ship, ShotOutcome, Side,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ui, HumanPlayer};

//! Combatant trait and implementations
//!
//! This module defines the Combatant trait and provides concrete implementations:
//! - AutomatedPlayer: fires at uniformly random cells
//! - HumanPlayer: reads `row col` lines from an input stream

use crate::{
    board::Board,
    common::{GameError, ShotError, ShotOutcome},
    coordinate::Coordinate,
};

/// Interface implemented by the two kinds of player.
///
/// A Combatant is responsible for:
/// - Choosing where to fire next
/// - Reacting to rejected targets and shot results
pub trait Combatant {
    /// Choose the next target on the opponent's board. Implementations see
    /// only what a rendering of `opponent` would show.
    fn choose_target(&mut self, opponent: &Board) -> Result<Coordinate, GameError>;

    /// The opponent's board refused `target`; another will be requested.
    fn handle_rejection(&mut self, _target: Coordinate, _error: ShotError) {}

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}
}

pub mod ai;
pub use ai::AutomatedPlayer;

#[cfg(feature = "std")]
pub mod human;
#[cfg(feature = "std")]
pub use human::{parse_target, HumanPlayer, InputError};

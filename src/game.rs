//! Turn engine: alternates the two combatants, keeps the turn after a hit and
//! ends the game once a fleet is gone.

use alloc::boxed::Box;

use log::{debug, info};
use rand::Rng;

use crate::{
    board::Board,
    common::{GameError, ShotOutcome},
    config::GRID_SIZE,
    coordinate::Coordinate,
    fleet::generate_board,
    player::Combatant,
};

/// One of the two seats at the table. Each side owns a board and fires at
/// the other side's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    User,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::User => Side::Computer,
            Side::Computer => Side::User,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::User => 0,
            Side::Computer => 1,
        }
    }
}

/// Current state of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// `Side` fires next.
    Turn(Side),
    /// Terminal: `Side` sank the opposing fleet.
    GameOver(Side),
}

/// Everything that happened during one resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub shooter: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Targets the board refused before this one was accepted.
    pub rejected: usize,
    /// State after the shot.
    pub state: GameState,
}

/// Core game logic holding both boards and both combatants.
pub struct GameEngine {
    boards: [Board; 2],
    combatants: [Box<dyn Combatant>; 2],
    state: GameState,
    shots: [usize; 2],
}

impl GameEngine {
    /// Start a game on prepared boards. `user_board` is the board the user
    /// defends; the computer fires at it. The user moves first.
    pub fn new(
        user_board: Board,
        user: Box<dyn Combatant>,
        computer_board: Board,
        computer: Box<dyn Combatant>,
    ) -> Self {
        Self {
            boards: [user_board, computer_board],
            combatants: [user, computer],
            state: GameState::Turn(Side::User),
            shots: [0; 2],
        }
    }

    /// Start a game on two freshly generated default-size boards. The
    /// computer's board is concealed.
    pub fn with_random_boards<R: Rng + ?Sized>(
        rng: &mut R,
        user: Box<dyn Combatant>,
        computer: Box<dyn Combatant>,
    ) -> Self {
        let user_board = generate_board(rng, GRID_SIZE);
        let mut computer_board = generate_board(rng, GRID_SIZE);
        computer_board.set_concealed(true);
        Self::new(user_board, user, computer_board, computer)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The board owned (and defended) by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Legal shots `side` has fired so far.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            GameState::GameOver(winner) => Some(winner),
            GameState::Turn(_) => None,
        }
    }

    /// Resolve exactly one legal shot by the active side.
    ///
    /// Refused targets are reported back to the shooter and another is
    /// requested until the board accepts one.
    pub fn step(&mut self) -> Result<TurnReport, GameError> {
        let shooter = match self.state {
            GameState::Turn(side) => side,
            GameState::GameOver(_) => return Err(GameError::GameFinished),
        };
        let defender = shooter.opponent();

        let mut rejected = 0usize;
        let (target, outcome) = loop {
            let target =
                self.combatants[shooter.index()].choose_target(&self.boards[defender.index()])?;
            match self.boards[defender.index()].resolve_shot(target) {
                Ok(outcome) => break (target, outcome),
                Err(e) => {
                    rejected += 1;
                    debug!("{:?} target ({}) refused: {:?}", shooter, target, e);
                    self.combatants[shooter.index()].handle_rejection(target, e);
                }
            }
        };

        self.shots[shooter.index()] += 1;
        self.combatants[shooter.index()].handle_shot_result(target, outcome);
        self.combatants[defender.index()].handle_opponent_shot(target, outcome);

        self.state = self.next_state(shooter, outcome);
        debug!("{:?} fired at ({}): {:?} -> {:?}", shooter, target, outcome, self.state);
        if let GameState::GameOver(winner) = self.state {
            info!(
                "game over: {:?} wins after {} shots",
                winner,
                self.shots[winner.index()]
            );
        }

        Ok(TurnReport {
            shooter,
            target,
            outcome,
            rejected,
            state: self.state,
        })
    }

    fn next_state(&self, shooter: Side, outcome: ShotOutcome) -> GameState {
        for side in [Side::User, Side::Computer] {
            if self.boards[side.index()].is_defeated() {
                return GameState::GameOver(side.opponent());
            }
        }
        if outcome.grants_repeat() {
            GameState::Turn(shooter)
        } else {
            GameState::Turn(shooter.opponent())
        }
    }

    /// Run turns until one side wins.
    pub fn play(&mut self) -> Result<Side, GameError> {
        loop {
            if let GameState::GameOver(winner) = self.step()?.state {
                return Ok(winner);
            }
        }
    }
}

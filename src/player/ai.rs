use log::trace;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::{board::Board, common::GameError, coordinate::Coordinate};

use super::Combatant;

/// Computer opponent that fires at uniformly random cells.
///
/// It keeps no memory of earlier shots; repeats are refused by the board and
/// the engine simply asks again.
pub struct AutomatedPlayer<R: Rng = SmallRng> {
    rng: R,
}

impl<R: Rng> AutomatedPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Combatant for AutomatedPlayer<R> {
    fn choose_target(&mut self, opponent: &Board) -> Result<Coordinate, GameError> {
        let size = opponent.grid_size() as i32;
        let target = Coordinate::new(
            self.rng.random_range(0..size),
            self.rng.random_range(0..size),
        );
        trace!("automated player picked ({})", target);
        Ok(target)
    }
}

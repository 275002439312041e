#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::rc::Rc;

use sea_battle::{
    Board, Combatant, Coordinate, GameError, Orientation, Ship, ShotError, ShotOutcome,
};

/// Cells of the hand-placed fleet returned by [`full_fleet_board`], in the
/// order its ships are placed.
pub const FLEET_CELLS: [(i32, i32); 11] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 5),
    (1, 5),
    (3, 0),
    (4, 0),
    (3, 2),
    (3, 4),
    (5, 2),
    (5, 4),
];

/// A 6×6 board holding the full 3,2,2,1,1,1,1 fleet at fixed positions.
pub fn full_fleet_board() -> Board {
    let mut board = Board::new();
    let ships = [
        ((0, 0), 3, Orientation::Horizontal),
        ((0, 5), 2, Orientation::Vertical),
        ((3, 0), 2, Orientation::Vertical),
        ((3, 2), 1, Orientation::Horizontal),
        ((3, 4), 1, Orientation::Horizontal),
        ((5, 2), 1, Orientation::Vertical),
        ((5, 4), 1, Orientation::Vertical),
    ];
    for (bow, len, orient) in ships {
        board
            .place_ship(Ship::new(Coordinate::from(bow), len, orient))
            .expect("fixed fleet layout is valid");
    }
    board
}

/// Log of everything a [`Scripted`] combatant was told.
#[derive(Debug, Default)]
pub struct Transcript {
    pub rejections: Vec<(Coordinate, ShotError)>,
    pub results: Vec<(Coordinate, ShotOutcome)>,
    pub incoming: Vec<(Coordinate, ShotOutcome)>,
}

/// Combatant that fires a fixed list of targets, then reports closed input.
pub struct Scripted {
    targets: VecDeque<Coordinate>,
    transcript: Rc<RefCell<Transcript>>,
}

impl Scripted {
    pub fn new(targets: &[(i32, i32)]) -> (Self, Rc<RefCell<Transcript>>) {
        let transcript = Rc::new(RefCell::new(Transcript::default()));
        let me = Self {
            targets: targets.iter().copied().map(Coordinate::from).collect(),
            transcript: Rc::clone(&transcript),
        };
        (me, transcript)
    }
}

impl Combatant for Scripted {
    fn choose_target(&mut self, _opponent: &Board) -> Result<Coordinate, GameError> {
        self.targets.pop_front().ok_or(GameError::InputClosed)
    }

    fn handle_rejection(&mut self, target: Coordinate, error: ShotError) {
        self.transcript.borrow_mut().rejections.push((target, error));
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.transcript.borrow_mut().results.push((target, outcome));
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.transcript.borrow_mut().incoming.push((target, outcome));
    }
}

/// Write sink that can still be read after being boxed away.
#[derive(Clone, Default)]
pub struct SharedBuf(pub Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("utf8 output")
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Every pair of cells belonging to different ships is at least two
/// king-moves apart.
pub fn ships_are_spaced(board: &Board) -> bool {
    let ships = board.ships();
    for (i, a) in ships.iter().enumerate() {
        for b in &ships[i + 1..] {
            for ca in a.occupied_cells() {
                if b.occupied_cells().any(|cb| ca.chebyshev(cb) < 2) {
                    return false;
                }
            }
        }
    }
    true
}

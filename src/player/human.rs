#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::Board,
    common::{GameError, ShotError, ShotOutcome},
    coordinate::Coordinate,
};

use super::Combatant;

/// Why a line of console input was not accepted as a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The line did not hold exactly two tokens.
    TokenCount(usize),
    /// A token was not a non-negative integer.
    NotANumber,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::TokenCount(_) => write!(f, " Enter 2 coordinates! "),
            InputError::NotANumber => write!(f, " Enter numbers! "),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse `"<row> <col>"` (1-indexed) into a 0-indexed coordinate.
///
/// Only the shape of the input is checked here; `0` or values past the grid
/// edge come back as off-board coordinates for the board to reject.
pub fn parse_target(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::TokenCount(tokens.len()));
    };
    Ok(Coordinate::new(parse_index(row)? - 1, parse_index(col)? - 1))
}

/// Digits-only token as an index. Values past `i32::MAX` saturate; they are
/// off any board either way.
fn parse_index(token: &str) -> Result<i32, InputError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber);
    }
    Ok(token.parse().unwrap_or(i32::MAX))
}

/// Console player reading targets from `input` and reporting to `output`.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl HumanPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the player, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.output.write_fmt(args);
        let _ = self.output.flush();
    }
}

impl<R: BufRead, W: Write> Combatant for HumanPlayer<R, W> {
    fn choose_target(&mut self, _opponent: &Board) -> Result<Coordinate, GameError> {
        loop {
            self.say(format_args!("Your move: "));
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return Err(GameError::InputClosed),
                Ok(_) => {}
            }
            match parse_target(&line) {
                Ok(target) => return Ok(target),
                Err(e) => {
                    log::debug!("rejected console input {:?}: {:?}", line.trim_end(), e);
                    self.say(format_args!("{}\n", e));
                }
            }
        }
    }

    fn handle_rejection(&mut self, _target: Coordinate, error: ShotError) {
        self.say(format_args!("{}\n", error));
    }

    fn handle_shot_result(&mut self, _target: Coordinate, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Hit => self.say(format_args!("Ship hit! Fire again.\n")),
            ShotOutcome::Miss => self.say(format_args!("Miss!\n")),
            ShotOutcome::Sunk => self.say(format_args!("Ship destroyed!\n")),
        }
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: ShotOutcome) {
        let verdict = match outcome {
            ShotOutcome::Hit => "your ship is hit",
            ShotOutcome::Miss => "miss",
            ShotOutcome::Sunk => "your ship is destroyed",
        };
        self.say(format_args!("Computer's move: {} -> {}\n", target, verdict));
    }
}

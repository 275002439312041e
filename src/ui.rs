#![cfg(feature = "std")]

//! Text rendering of boards and the console banner.

use std::string::String;

use crate::{
    board::{Board, CellState},
    coordinate::Coordinate,
    game::{GameEngine, GameState, Side},
};

/// Symbol drawn for a cell as an observer sees it.
pub fn cell_symbol(state: CellState) -> char {
    match state {
        CellState::Empty => 'O',
        CellState::Ship => '■',
        CellState::Hit => 'X',
        CellState::Miss => 'T',
        CellState::Buffer => '•',
    }
}

/// Render `board` as a numbered table. Concealed boards draw their intact
/// ships as water.
pub fn render_board(board: &Board) -> String {
    let size = board.grid_size();
    let mut out = String::from(" ");
    for c in 0..size {
        out.push_str(&format!(" | {}", c + 1));
    }
    out.push_str(" |");
    for r in 0..size {
        out.push_str(&format!("\n{}", r + 1));
        for c in 0..size {
            let state = board
                .displayed_cell(Coordinate::new(r as i32, c as i32))
                .unwrap_or(CellState::Empty);
            out.push_str(&format!(" | {}", cell_symbol(state)));
        }
        out.push_str(" |");
    }
    out
}

/// Both boards, the user's first, separated by rules.
pub fn render_boards(engine: &GameEngine) -> String {
    let rule = "-".repeat(20);
    format!(
        "{rule}\nUser board:\n{}\n{rule}\nComputer board:\n{}\n{rule}",
        render_board(engine.board(Side::User)),
        render_board(engine.board(Side::Computer)),
    )
}

/// Heading announcing whose turn it is, or the result.
pub fn status_line(state: GameState) -> &'static str {
    match state {
        GameState::Turn(Side::User) => "User's move:",
        GameState::Turn(Side::Computer) => "Computer's move:",
        GameState::GameOver(Side::User) => "The user wins!",
        GameState::GameOver(Side::Computer) => "The computer wins!",
    }
}

pub fn greeting() -> &'static str {
    "--------------------\n\
     \x20   Welcome to     \n\
     \x20   the game of    \n\
     \x20    sea battle    \n\
     --------------------\n\
     \x20input format: x y  \n\
     \x20x - row number     \n\
     \x20y - column number  "
}

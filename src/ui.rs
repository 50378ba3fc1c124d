#![cfg(feature = "std")]

//! Text rendering of boards for the terminal.

use std::fmt::Write as _;
use std::string::String;

use rand::Rng;

use crate::{board::Board, coord::Coordinate, game::GameController};

/// Render `board` with column letters across the top and 1-based row
/// numbers down the side. With `hide_ships`, unhit ships are not shown.
pub fn render_board(board: &Board, hide_ships: bool) -> String {
    let mut out = String::from("   ");
    for c in 0..board.size() {
        let _ = write!(out, " {}", Coordinate::column_label(c));
    }
    out.push('\n');
    for (r, row) in board.get_display_grid(hide_ships).iter().enumerate() {
        let _ = write!(out, "{:2} ", r + 1);
        for ch in row {
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Display the opponent board (top, ships hidden) and the player's board (bottom).
pub fn print_player_view<R: Rng>(game: &GameController<R>) {
    std::println!("Opponent board:");
    std::print!("{}", render_board(game.computer_board(), true));
    std::println!("\nYour board:");
    std::print!("{}", render_board(game.player_board(), false));
}

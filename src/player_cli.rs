#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    coord::Coordinate,
    player::Player,
};

/// Interactive player reading targets line by line.
pub struct CliPlayer<I, O> {
    input: I,
    output: O,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for CliPlayer<StdinLock<'static>, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: BufRead, O: Write> CliPlayer<I, O> {
    pub fn with_io(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> O {
        self.output
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

impl<I: BufRead, O: Write> Player for CliPlayer<I, O> {
    fn select_target(&mut self, board: &Board) -> Option<Coordinate> {
        let edge = board.size().saturating_sub(1);
        let last = Coordinate::new(edge, edge);
        loop {
            let _ = write!(self.output, "Enter target (A1-{}): ", last);
            let _ = self.output.flush();
            let line = self.read_line()?;
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return None;
            }
            match Coordinate::parse(line, board.size()) {
                Some(coord) => return Some(coord),
                None => {
                    let _ = writeln!(self.output, "Invalid coordinate");
                }
            }
        }
    }

    fn handle_rejected_target(&mut self, coord: Coordinate, reason: BoardError) {
        let _ = writeln!(self.output, "Cannot fire at {}: {}", coord, reason);
    }

    fn handle_shot_result(&mut self, coord: Coordinate, result: ShotOutcome) {
        let msg = match result {
            ShotOutcome::Miss => std::format!("You fired at {} -> miss.", coord),
            ShotOutcome::Hit(_) => std::format!("You fired at {} -> hit!", coord),
            ShotOutcome::Sunk(name) => {
                std::format!("You fired at {} -> you sank the {}!", coord, name)
            }
        };
        let _ = writeln!(self.output, "{}", msg);
    }

    fn handle_opponent_shot(&mut self, coord: Coordinate, result: ShotOutcome) {
        let msg = match result {
            ShotOutcome::Miss => std::format!("Computer fired at {} -> miss.", coord),
            ShotOutcome::Hit(name) => std::format!("Computer fired at {} -> hit your {}!", coord, name),
            ShotOutcome::Sunk(name) => {
                std::format!("Computer fired at {} -> sank your {}!", coord, name)
            }
        };
        let _ = writeln!(self.output, "{}", msg);
    }
}

//! Uniform random targeting for the computer opponent.

use rand::Rng;

use crate::board::Board;
use crate::coord::Coordinate;

/// Pick an untargeted cell on `board` uniformly at random.
///
/// Draws cells until one that has not been shot at turns up. Returns `None`
/// when every cell has already been targeted.
pub fn random_target<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coordinate> {
    if board.untargeted_cells().next().is_none() {
        return None;
    }
    let size = board.size();
    loop {
        let row = rng.random_range(0..size);
        let col = rng.random_range(0..size);
        if !board.is_targeted(row, col) {
            return Some(Coordinate::new(row, col));
        }
    }
}

use rand::Rng;

use crate::{ai, board::Board, coord::Coordinate, player::Player};

/// Player that fires uniformly at random at cells it has not tried yet.
pub struct RandomPlayer<R> {
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn select_target(&mut self, board: &Board) -> Option<Coordinate> {
        ai::random_target(board, &mut self.rng)
    }
}

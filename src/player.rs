use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    coord::Coordinate,
};

/// The human seat of a game, driven by [`GameController::play_turn`].
///
/// [`GameController::play_turn`]: crate::GameController::play_turn
pub trait Player {
    /// Choose the next target on the opponent's `board`. Only the hidden view
    /// of the board should be shown to a human. Returning `None` means the
    /// player has left the game.
    fn select_target(&mut self, board: &Board) -> Option<Coordinate>;

    /// Inform the player that the board refused its last target.
    fn handle_rejected_target(&mut self, _coord: Coordinate, _reason: BoardError) {}

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: Coordinate, _result: ShotOutcome) {}

    /// Inform the player of the computer's shot against its board.
    fn handle_opponent_shot(&mut self, _coord: Coordinate, _result: ShotOutcome) {}
}

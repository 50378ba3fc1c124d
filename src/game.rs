use log::{debug, info};
use rand::Rng;

use crate::{
    ai,
    board::Board,
    common::{GameError, ShotOutcome, Side},
    config::{clamp_board_size, SHIPS},
    coord::Coordinate,
    player::Player,
    ship::ShipType,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Over { winner: Side },
}

/// Core game logic: both boards, the roster, and the turn sequence.
pub struct GameController<R> {
    player_board: Board,
    computer_board: Board,
    roster: &'static [ShipType],
    status: GameStatus,
    turns: usize,
    rng: R,
}

impl<R: Rng> GameController<R> {
    /// Create a controller with the standard roster and set up a game of
    /// `size` (clamped to the playable range).
    pub fn new(size: usize, rng: R) -> Result<Self, GameError> {
        Self::with_roster(size, &SHIPS, rng)
    }

    /// Like [`GameController::new`] with a custom roster.
    pub fn with_roster(
        size: usize,
        roster: &'static [ShipType],
        mut rng: R,
    ) -> Result<Self, GameError> {
        let (player_board, computer_board) = deal_boards(size, roster, &mut rng)?;
        Ok(Self {
            player_board,
            computer_board,
            roster,
            status: GameStatus::InProgress,
            turns: 0,
            rng,
        })
    }

    /// Build two fresh boards of `size` (clamped to the playable range) and
    /// place the roster randomly on each. Failing to place any ship is fatal
    /// and leaves the current game as it was.
    pub fn setup_game(&mut self, size: usize) -> Result<(), GameError> {
        let (player_board, computer_board) = deal_boards(size, self.roster, &mut self.rng)?;
        self.player_board = player_board;
        self.computer_board = computer_board;
        self.status = GameStatus::InProgress;
        self.turns = 0;
        Ok(())
    }

    /// Translate player text such as `A1` or `1a` into a cell of the current
    /// boards. Returns `None` for malformed or out-of-range input.
    pub fn parse_coordinate(&self, input: &str) -> Option<Coordinate> {
        Coordinate::parse(input, self.computer_board.size())
    }

    /// Play one full turn: the player's shot, then the computer's reply.
    ///
    /// Targets the board refuses are reported to `player` and it is asked
    /// again. Returns `Ok(true)` while the game goes on and `Ok(false)` once
    /// either side has lost its whole fleet.
    pub fn play_turn<P: Player + ?Sized>(&mut self, player: &mut P) -> Result<bool, GameError> {
        if let GameStatus::Over { .. } = self.status {
            return Ok(false);
        }
        self.turns += 1;

        let (coord, outcome) = loop {
            let coord = player
                .select_target(&self.computer_board)
                .ok_or(GameError::PlayerLeft)?;
            match self.computer_board.make_shot(coord.row, coord.col) {
                Ok(shot) => break (coord, shot.outcome()),
                Err(reason) => {
                    debug!("rejected player target {:?}: {}", coord, reason);
                    player.handle_rejected_target(coord, reason);
                }
            }
        };
        player.handle_shot_result(coord, outcome);
        if self.finish_if_sunk(Side::Player) {
            return Ok(false);
        }

        let (coord, outcome) = self.computer_shot()?;
        player.handle_opponent_shot(coord, outcome);
        if self.finish_if_sunk(Side::Computer) {
            return Ok(false);
        }
        Ok(true)
    }

    fn computer_shot(&mut self) -> Result<(Coordinate, ShotOutcome), GameError> {
        let coord = ai::random_target(&self.player_board, &mut self.rng)
            .ok_or(GameError::NoTargetsLeft)?;
        let outcome = self
            .player_board
            .make_shot(coord.row, coord.col)?
            .outcome();
        debug!("computer fired at {}: {}", coord, outcome);
        Ok((coord, outcome))
    }

    /// End the game if `shooter` has sunk the opponent's whole fleet.
    fn finish_if_sunk(&mut self, shooter: Side) -> bool {
        let target = match shooter {
            Side::Player => &self.computer_board,
            Side::Computer => &self.player_board,
        };
        if target.all_ships_sunk() {
            info!("{} wins after {} turns", shooter, self.turns);
            self.status = GameStatus::Over { winner: shooter };
            true
        } else {
            false
        }
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Winner of a finished game.
    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Over { winner } => Some(winner),
        }
    }

    /// Number of turns started in the current game.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// The human's board, with ships visible to its owner.
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// The computer's board; render it with hidden ships for the player.
    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player_board,
            Side::Computer => &self.computer_board,
        }
    }

    /// Side length of both boards.
    pub fn size(&self) -> usize {
        self.player_board.size()
    }

    /// The roster placed on each board.
    pub fn roster(&self) -> &'static [ShipType] {
        self.roster
    }
}

/// Place `roster` on a fresh player board and then a fresh computer board.
fn deal_boards<R: Rng + ?Sized>(
    size: usize,
    roster: &[ShipType],
    rng: &mut R,
) -> Result<(Board, Board), GameError> {
    let size = clamp_board_size(size);
    let mut boards = [Board::new(size), Board::new(size)];
    for (side, board) in [Side::Player, Side::Computer].into_iter().zip(boards.iter_mut()) {
        for &ship_type in roster {
            board
                .place_ship_random(ship_type, rng)
                .map_err(|source| GameError::Setup { side, source })?;
        }
    }
    info!("new {}x{} game with {} ships per side", size, size, roster.len());
    let [player_board, computer_board] = boards;
    Ok((player_board, computer_board))
}

//! Common types for the game: board/game errors and shot outcomes.

use core::fmt;

/// Which seat at the table a board or a win belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    /// The human seat.
    Player,
    /// The random-shooting computer.
    Computer,
}

impl Side {
    /// The other seat.
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// Owned summary of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed on open water.
    Miss,
    /// Shot hit a ship that is still afloat, carrying its name.
    Hit(&'static str),
    /// Shot sank a ship, carrying its name.
    Sunk(&'static str),
}

impl ShotOutcome {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "miss"),
            ShotOutcome::Hit(name) => write!(f, "hit on {}", name),
            ShotOutcome::Sunk(name) => write!(f, "sunk {}", name),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate, or part of a ship run, lies outside the grid.
    OutOfBounds,
    /// A cell of the run is not empty.
    CellOccupied,
    /// A cell of the run touches another ship, diagonals included.
    TooClose,
    /// The cell was already shot at.
    AlreadyTargeted,
    /// A ship cell has no owning ship.
    UnknownShipHit,
    /// Random placement ran out of attempts for the named ship.
    UnableToPlaceShip { ship: &'static str },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Coordinate is outside the board"),
            BoardError::CellOccupied => write!(f, "Ship placement overlaps with another ship"),
            BoardError::TooClose => write!(f, "Ship placement touches another ship"),
            BoardError::AlreadyTargeted => write!(f, "That cell was already targeted"),
            BoardError::UnknownShipHit => write!(f, "Hit a ship cell owned by no ship"),
            BoardError::UnableToPlaceShip { ship } => {
                write!(f, "Unable to place {} on the board", ship)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned by the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The roster could not be placed on one side's board. Fatal for setup.
    Setup { side: Side, source: BoardError },
    /// The human seat stopped providing targets.
    PlayerLeft,
    /// A side has no untargeted cell left to shoot at.
    NoTargetsLeft,
    /// A board refused an operation the controller expected to succeed.
    Board(BoardError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Setup { side, source } => {
                write!(f, "Game setup failed on the {} board: {}", side, source)
            }
            GameError::PlayerLeft => write!(f, "Player left the game"),
            GameError::NoTargetsLeft => write!(f, "No untargeted cells left"),
            GameError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Setup { source, .. } | GameError::Board(source) => Some(source),
            _ => None,
        }
    }
}


impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

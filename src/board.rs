//! Game board state: an N×N grid of cells owning the ships placed on it.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, warn};
use rand::Rng;

use crate::common::{BoardError, ShotOutcome};
use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship, ShipType};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

impl CellState {
    /// Character used when rendering the cell.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Ship => 'S',
            CellState::Hit => 'X',
            CellState::Miss => 'O',
        }
    }

    /// `true` once a shot has resolved on this cell.
    pub fn is_targeted(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

/// A resolved shot. A hit borrows the ship it landed on so the caller can
/// tell a plain hit from a sinking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shot<'a> {
    Miss,
    Hit(&'a Ship),
}

impl Shot<'_> {
    /// Owned summary of the shot.
    pub fn outcome(&self) -> ShotOutcome {
        match self {
            Shot::Miss => ShotOutcome::Miss,
            Shot::Hit(ship) if ship.is_sunk() => ShotOutcome::Sunk(ship.name()),
            Shot::Hit(ship) => ShotOutcome::Hit(ship.name()),
        }
    }
}

/// Main board state: cell grid plus ships in placement order.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    grid: Vec<CellState>,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty `size`×`size` board with no ships placed.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            grid: vec![CellState::Empty; size * size],
            ships: Vec::new(),
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// State of the cell at (`row`, `col`), or `None` when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<CellState> {
        if self.is_valid_position(row, col) {
            Some(self.grid[row * self.size + col])
        } else {
            None
        }
    }

    /// True iff both coordinates lie in `[0, size)`.
    pub fn is_valid_position(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Whether a shot already resolved at (`row`, `col`).
    pub fn is_targeted(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(CellState::is_targeted)
    }

    /// Cells that have not been shot at yet, row-major.
    pub fn untargeted_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.grid
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_targeted())
            .map(move |(i, _)| Coordinate::new(i / self.size, i % self.size))
    }

    /// Number of shots resolved on this board.
    pub fn shots_taken(&self) -> usize {
        self.grid.iter().filter(|cell| cell.is_targeted()).count()
    }

    /// Number of placed ships still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Returns `true` when every placed ship is sunk (vacuously for no ships).
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Cells of a run, or `None` if any of them falls off the grid.
    fn run(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Option<impl Iterator<Item = (usize, usize)> + Clone> {
        let (dr, dc) = orientation.step();
        let last_row = row.checked_add(dr * length.saturating_sub(1))?;
        let last_col = col.checked_add(dc * length.saturating_sub(1))?;
        if length == 0 || !self.is_valid_position(row, col) {
            return None;
        }
        if !self.is_valid_position(last_row, last_col) {
            return None;
        }
        Some((0..length).map(move |k| (row + dr * k, col + dc * k)))
    }

    /// Whether any of the 8 neighbours of (`row`, `col`), or the cell itself,
    /// holds a ship.
    fn touches_ship(&self, row: usize, col: usize) -> bool {
        let last = self.size - 1;
        (row.saturating_sub(1)..=(row + 1).min(last)).any(|r| {
            (col.saturating_sub(1)..=(col + 1).min(last))
                .any(|c| self.grid[r * self.size + c] == CellState::Ship)
        })
    }

    /// Validate a placement, reporting the first rule it breaks.
    pub fn check_placement(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let mut run = self
            .run(row, col, length, orientation)
            .ok_or(BoardError::OutOfBounds)?;
        if run
            .clone()
            .any(|(r, c)| self.grid[r * self.size + c] != CellState::Empty)
        {
            return Err(BoardError::CellOccupied);
        }
        if run.any(|(r, c)| self.touches_ship(r, c)) {
            return Err(BoardError::TooClose);
        }
        Ok(())
    }

    /// Whether a ship of `length` fits at (`row`, `col`): in bounds, on empty
    /// cells, and not touching any other ship even diagonally.
    pub fn can_place_ship(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> bool {
        self.check_placement(row, col, length, orientation).is_ok()
    }

    /// Place a new ship of `ship_type` starting at (`row`, `col`).
    ///
    /// On error the board is left untouched.
    pub fn place_ship(
        &mut self,
        ship_type: ShipType,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<&Ship, BoardError> {
        self.check_placement(row, col, ship_type.length(), orientation)?;
        let (dr, dc) = orientation.step();
        let mut ship = Ship::new(ship_type);
        for k in 0..ship_type.length() {
            let (r, c) = (row + dr * k, col + dc * k);
            self.grid[r * self.size + c] = CellState::Ship;
            ship.add_position(r, c);
        }
        debug!(
            "placed {} at {} {:?}",
            ship.name(),
            Coordinate::new(row, col),
            orientation
        );
        self.ships.push(ship);
        Ok(&self.ships[self.ships.len() - 1])
    }

    /// Place a ship at a random legal spot, trying up to
    /// [`MAX_PLACEMENT_ATTEMPTS`] uniform draws of row, column and orientation.
    pub fn place_ship_random<R: Rng + ?Sized>(
        &mut self,
        ship_type: ShipType,
        rng: &mut R,
    ) -> Result<&Ship, BoardError> {
        if self.size == 0 {
            return Err(BoardError::UnableToPlaceShip {
                ship: ship_type.name(),
            });
        }
        for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
            let row = rng.random_range(0..self.size);
            let col = rng.random_range(0..self.size);
            let orientation = Orientation::random(rng);
            if self.can_place_ship(row, col, ship_type.length(), orientation) {
                debug!("{} placed after {} attempts", ship_type.name(), attempt);
                return self.place_ship(ship_type, row, col, orientation);
            }
        }
        warn!(
            "gave up placing {} after {} attempts",
            ship_type.name(),
            MAX_PLACEMENT_ATTEMPTS
        );
        Err(BoardError::UnableToPlaceShip {
            ship: ship_type.name(),
        })
    }

    /// Resolve a shot at (`row`, `col`).
    ///
    /// Rejected without mutation when out of bounds or already targeted.
    pub fn make_shot(&mut self, row: usize, col: usize) -> Result<Shot<'_>, BoardError> {
        let cell = self.cell(row, col).ok_or(BoardError::OutOfBounds)?;
        match cell {
            CellState::Hit | CellState::Miss => Err(BoardError::AlreadyTargeted),
            CellState::Empty => {
                self.grid[row * self.size + col] = CellState::Miss;
                Ok(Shot::Miss)
            }
            CellState::Ship => {
                let ship = self
                    .ships
                    .iter_mut()
                    .find(|s| s.contains(row, col))
                    .ok_or(BoardError::UnknownShipHit)?;
                self.grid[row * self.size + col] = CellState::Hit;
                ship.register_hit();
                debug!("shot at {} hit {}", Coordinate::new(row, col), ship.name());
                Ok(Shot::Hit(&*ship))
            }
        }
    }

    /// Rendering symbols for every cell, row by row. With `hide_ships`,
    /// unhit ship cells render as open water.
    pub fn get_display_grid(&self, hide_ships: bool) -> Vec<Vec<char>> {
        self.grid
            .chunks(self.size.max(1))
            .take(self.size)
            .map(|row| {
                row.iter()
                    .map(|&cell| match cell {
                        CellState::Ship if hide_ships => CellState::Empty.symbol(),
                        other => other.symbol(),
                    })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ size: {}, ships: {:?} }}", self.size, self.ships)?;
        for row in self.get_display_grid(false) {
            for ch in row {
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

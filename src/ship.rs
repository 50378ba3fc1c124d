//! Ship definitions: roster entries, orientation and the placed ship itself.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Draw an orientation uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Row/column step between consecutive cells of a run.
    pub(crate) fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A vessel of fixed size tracking the cells it occupies and how often it was hit.
///
/// A ship starts unplaced. A board fills in its positions exactly once when
/// placement succeeds, and increments the hit counter when a shot lands on it.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    positions: Vec<(usize, usize)>,
    hits: usize,
}

impl Ship {
    /// Create an unplaced ship of the given type.
    pub fn new(ship_type: ShipType) -> Self {
        Self {
            ship_type,
            positions: Vec::with_capacity(ship_type.length()),
            hits: 0,
        }
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    /// Number of cells the ship occupies once placed.
    pub fn size(&self) -> usize {
        self.ship_type.length()
    }

    /// Occupied cells in run order.
    pub fn positions(&self) -> &[(usize, usize)] {
        &self.positions
    }

    /// Number of hits taken so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// `true` once every position has been recorded.
    pub fn is_placed(&self) -> bool {
        self.positions.len() == self.size()
    }

    /// Check if the ship is sunk.
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.size()
    }

    /// Append an occupied cell. The board guarantees no duplicates and
    /// exactly `size` calls per ship.
    pub fn add_position(&mut self, row: usize, col: usize) {
        self.positions.push((row, col));
    }

    /// Whether (`row`, `col`) is one of the occupied cells.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.positions.contains(&(row, col))
    }

    pub(crate) fn register_hit(&mut self) {
        if self.hits < self.size() {
            self.hits += 1;
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", size: {}, hits: {}, positions: {:?} }}",
            self.name(),
            self.size(),
            self.hits,
            self.positions,
        )
    }
}

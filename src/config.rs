use crate::ship::ShipType;

pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_BOARD_SIZE: usize = 15;
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Random placement gives up on a ship after this many rejected draws.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in the standard roster.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Clamp a requested board size into the playable range.
pub fn clamp_board_size(size: usize) -> usize {
    size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE)
}

/// Look up a roster entry by name. Returns `None` if no ship has that name.
pub fn ship_type_by_name(name: &str) -> Option<ShipType> {
    SHIPS.iter().copied().find(|def| def.name() == name)
}

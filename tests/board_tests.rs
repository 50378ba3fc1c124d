use seabattle::{
    Board, BoardError, CellState, Orientation, Shot, ShotOutcome, ShipType, SHIPS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const CRUISER: ShipType = ShipType::new("Cruiser", 3);
const DESTROYER: ShipType = ShipType::new("Destroyer", 2);

/// 10×10 board with a cruiser on (4,3), (4,4), (4,5).
fn board_with_cruiser() -> Board {
    let mut board = Board::new(10);
    board
        .place_ship(CRUISER, 4, 3, Orientation::Horizontal)
        .unwrap();
    board
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(7);
    assert_eq!(board.size(), 7);
    assert!(board.ships().is_empty());
    assert!(board.all_ships_sunk());
    for r in 0..7 {
        for c in 0..7 {
            assert_eq!(board.cell(r, c), Some(CellState::Empty));
        }
    }
    assert_eq!(board.cell(7, 0), None);
}

#[test]
fn test_valid_position() {
    let board = Board::new(5);
    assert!(board.is_valid_position(0, 0));
    assert!(board.is_valid_position(4, 4));
    assert!(!board.is_valid_position(5, 0));
    assert!(!board.is_valid_position(0, 5));
}

#[test]
fn test_place_records_positions_in_run_order() {
    let board = board_with_cruiser();
    let ship = &board.ships()[0];
    assert_eq!(ship.positions(), &[(4, 3), (4, 4), (4, 5)]);
    for c in 3..6 {
        assert_eq!(board.cell(4, c), Some(CellState::Ship));
    }
}

#[test]
fn test_overlap_and_adjacency_rules() {
    let mut board = board_with_cruiser();

    // (3,3),(4,3): overlaps the cruiser
    assert!(!board.can_place_ship(3, 3, 2, Orientation::Vertical));
    assert_eq!(
        board.place_ship(DESTROYER, 3, 3, Orientation::Vertical).unwrap_err(),
        BoardError::CellOccupied
    );

    // (5,2),(5,3): touches (4,3)
    assert!(!board.can_place_ship(5, 2, 2, Orientation::Horizontal));
    assert_eq!(
        board.place_ship(DESTROYER, 5, 2, Orientation::Horizontal).unwrap_err(),
        BoardError::TooClose
    );

    // Diagonal contact at the end of the run.
    assert!(!board.can_place_ship(1, 6, 3, Orientation::Vertical));
    // Only the middle of the run touches the cruiser.
    assert!(!board.can_place_ship(2, 6, 5, Orientation::Vertical));

    assert!(board.can_place_ship(6, 0, 2, Orientation::Horizontal));
    board
        .place_ship(DESTROYER, 6, 0, Orientation::Horizontal)
        .unwrap();
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn test_out_of_bounds_placement() {
    let board = Board::new(10);
    assert!(board.can_place_ship(0, 5, 5, Orientation::Horizontal));
    assert!(!board.can_place_ship(0, 6, 5, Orientation::Horizontal));
    assert!(!board.can_place_ship(6, 0, 5, Orientation::Vertical));
    assert!(!board.can_place_ship(10, 0, 1, Orientation::Vertical));
    assert!(!board.can_place_ship(usize::MAX, 0, 2, Orientation::Vertical));
    assert_eq!(
        board.check_placement(0, 9, 2, Orientation::Horizontal),
        Err(BoardError::OutOfBounds)
    );
}

#[test]
fn test_failed_placement_leaves_board_untouched() {
    let mut board = board_with_cruiser();
    let before = board.clone();
    assert!(board.place_ship(DESTROYER, 4, 6, Orientation::Horizontal).is_err());
    assert!(board.place_ship(DESTROYER, 9, 9, Orientation::Vertical).is_err());
    assert_eq!(board, before);
}

#[test]
fn test_shots_sink_cruiser() {
    let mut board = board_with_cruiser();

    match board.make_shot(4, 3).unwrap() {
        Shot::Hit(ship) => {
            assert_eq!(ship.name(), "Cruiser");
            assert_eq!(ship.hits(), 1);
        }
        Shot::Miss => panic!("expected a hit"),
    }
    assert_eq!(board.make_shot(4, 4).unwrap().outcome(), ShotOutcome::Hit("Cruiser"));
    assert!(!board.ships()[0].is_sunk());
    assert!(!board.all_ships_sunk());

    assert_eq!(board.make_shot(4, 5).unwrap().outcome(), ShotOutcome::Sunk("Cruiser"));
    assert!(board.ships()[0].is_sunk());
    assert!(board.all_ships_sunk());
    assert_eq!(board.cell(4, 5), Some(CellState::Hit));
}

#[test]
fn test_miss_and_repeat_shots_are_rejected() {
    let mut board = board_with_cruiser();
    assert_eq!(board.make_shot(0, 0).unwrap(), Shot::Miss);
    assert_eq!(board.cell(0, 0), Some(CellState::Miss));
    assert_eq!(board.make_shot(0, 0).unwrap_err(), BoardError::AlreadyTargeted);

    board.make_shot(4, 4).unwrap();
    let after_hit = board.clone();
    assert_eq!(board.make_shot(4, 4).unwrap_err(), BoardError::AlreadyTargeted);
    assert_eq!(board, after_hit);
    assert_eq!(board.ships()[0].hits(), 1);

    assert_eq!(board.make_shot(10, 0).unwrap_err(), BoardError::OutOfBounds);
    assert_eq!(board.shots_taken(), 2);
}

#[test]
fn test_last_cell_decides_all_sunk() {
    let mut board = Board::new(10);
    board.place_ship(DESTROYER, 0, 0, Orientation::Vertical).unwrap();
    board.place_ship(CRUISER, 5, 5, Orientation::Horizontal).unwrap();

    for (r, c) in [(0, 0), (1, 0), (5, 5), (5, 6)] {
        board.make_shot(r, c).unwrap();
    }
    assert!(!board.all_ships_sunk());
    assert_eq!(board.ships_remaining(), 1);
    board.make_shot(5, 7).unwrap();
    assert!(board.all_ships_sunk());
    assert_eq!(board.ships_remaining(), 0);
}

#[test]
fn test_display_grid_hides_ships() {
    let mut board = board_with_cruiser();
    board.make_shot(4, 3).unwrap();
    board.make_shot(0, 0).unwrap();

    let shown = board.get_display_grid(false);
    assert_eq!(shown.len(), 10);
    assert_eq!(shown[4][3], 'X');
    assert_eq!(shown[4][4], 'S');
    assert_eq!(shown[0][0], 'O');
    assert_eq!(shown[9][9], '.');

    let hidden = board.get_display_grid(true);
    assert_eq!(hidden[4][3], 'X');
    assert_eq!(hidden[4][4], '.');
    assert_eq!(hidden[0][0], 'O');
}

#[test]
fn test_place_random_full_roster() {
    let mut board = Board::new(10);
    let mut rng = SmallRng::seed_from_u64(42);
    for def in SHIPS {
        let ship = board.place_ship_random(def, &mut rng).unwrap();
        assert_eq!(ship.positions().len(), def.length());
    }
    let ship_cells = board
        .get_display_grid(false)
        .iter()
        .flatten()
        .filter(|&&ch| ch == 'S')
        .count();
    assert_eq!(ship_cells, SHIPS.iter().map(|s| s.length()).sum::<usize>());
}

#[test]
fn test_place_random_gives_up_when_nothing_fits() {
    let mut board = Board::new(4);
    let mut rng = SmallRng::seed_from_u64(7);
    board.place_ship(DESTROYER, 0, 0, Orientation::Horizontal).unwrap();
    let before = board.clone();

    let err = board
        .place_ship_random(ShipType::new("Carrier", 5), &mut rng)
        .unwrap_err();
    assert_eq!(err, BoardError::UnableToPlaceShip { ship: "Carrier" });
    assert_eq!(board, before);
}

#[test]
fn test_same_seed_same_layout() {
    let mut a = Board::new(10);
    let mut b = Board::new(10);
    let mut rng_a = SmallRng::seed_from_u64(12345);
    let mut rng_b = SmallRng::seed_from_u64(12345);
    for def in SHIPS {
        a.place_ship_random(def, &mut rng_a).unwrap();
        b.place_ship_random(def, &mut rng_b).unwrap();
    }
    assert_eq!(a, b);
}

use battleship_abilities::{
    Board, BoardError, CellState, Orientation, Ship, BOARD_SIZE, DEMO_FLEET, SHIP_LENGTH,
};

#[test]
fn new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.count(CellState::Empty), BOARD_SIZE * BOARD_SIZE);
    assert_eq!(board.count(CellState::Occupied), 0);
    assert_eq!(board.count(CellState::Affected), 0);
}

#[test]
fn place_ship_in_each_orientation() {
    let cases = [
        (Ship::new(2, 1, Orientation::Horizontal, 3), [(2, 1), (2, 2), (2, 3)]),
        (Ship::new(5, 8, Orientation::Vertical, 3), [(5, 8), (6, 8), (7, 8)]),
        (Ship::new(6, 0, Orientation::DiagonalMain, 3), [(6, 0), (7, 1), (8, 2)]),
        (Ship::new(0, 9, Orientation::DiagonalAnti, 3), [(0, 9), (1, 8), (2, 7)]),
    ];
    for (ship, cells) in cases {
        let mut board = Board::new();
        board.place_ship(&ship);
        let placed: Vec<_> = board.cells(CellState::Occupied).collect();
        assert_eq!(placed, cells.to_vec(), "{:?}", ship.orientation());
    }
}

#[test]
fn place_ship_clips_to_board() {
    let mut board = Board::new();
    board.place_ship(&Ship::new(8, 8, Orientation::DiagonalMain, 4));
    let placed: Vec<_> = board.cells(CellState::Occupied).collect();
    assert_eq!(placed, vec![(8, 8), (9, 9)]);

    board.place_ship(&Ship::new(0, 1, Orientation::DiagonalAnti, 3));
    assert_eq!(board.cell_at(0, 1).unwrap(), CellState::Occupied);
    assert_eq!(board.cell_at(1, 0).unwrap(), CellState::Occupied);
    assert_eq!(board.count(CellState::Occupied), 4);
}

#[test]
fn ships_starting_at_usize_limits_are_clipped() {
    let mut board = Board::new();
    board.place_ship(&Ship::new(usize::MAX, 0, Orientation::Vertical, 3));
    board.place_ship(&Ship::new(0, usize::MAX, Orientation::DiagonalAnti, 3));
    board.place_ship(&Ship::new(usize::MAX - 1, usize::MAX - 1, Orientation::DiagonalMain, 4));
    board.place_ship(&Ship::new(isize::MAX as usize, 2, Orientation::Horizontal, 3));
    assert_eq!(board, Board::new());
}

#[test]
fn anti_diagonal_ship_enters_board_from_the_right() {
    let mut board = Board::new();
    board.place_ship(&Ship::new(0, BOARD_SIZE + 1, Orientation::DiagonalAnti, 4));
    let placed: Vec<_> = board.cells(CellState::Occupied).collect();
    assert_eq!(placed, vec![(2, 9), (3, 8)]);
}

#[test]
fn translate_clips_instead_of_wrapping() {
    assert_eq!(Board::translate(4, 4, -3, 3), Some((1, 7)));
    assert_eq!(Board::translate(0, 4, -1, 0), None);
    assert_eq!(Board::translate(usize::MAX, 4, 1, 0), None);
    assert_eq!(Board::translate(usize::MAX, 4, -3, 0), None);
    assert_eq!(Board::translate(isize::MAX as usize, 0, 3, 0), None);
}

#[test]
fn overlapping_ships_are_allowed() {
    let mut board = Board::new();
    board.place_ship(&Ship::new(3, 3, Orientation::Horizontal, 3));
    board.place_ship(&Ship::new(2, 4, Orientation::Vertical, 3));
    assert_eq!(board.count(CellState::Occupied), 5);
}

#[test]
fn ship_replaces_affected_cell() {
    let mut board = Board::new();
    assert!(board.mark_affected(4, 4).unwrap());
    board.place_ship(&Ship::new(4, 4, Orientation::Horizontal, 1));
    assert_eq!(board.cell_at(4, 4).unwrap(), CellState::Occupied);
    assert_eq!(board.count(CellState::Affected), 0);
}

#[test]
fn mark_affected_respects_ships() {
    let mut board = Board::new();
    board.place_ship(&Ship::new(0, 0, Orientation::Vertical, 2));
    assert!(!board.mark_affected(1, 0).unwrap());
    assert_eq!(board.cell_at(1, 0).unwrap(), CellState::Occupied);
    assert!(board.mark_affected(2, 0).unwrap());
    assert_eq!(board.cell_at(2, 0).unwrap(), CellState::Affected);
}

#[test]
fn out_of_bounds_access_errors() {
    let mut board = Board::new();
    assert_eq!(
        board.cell_at(BOARD_SIZE, 0).unwrap_err(),
        BoardError::OutOfBounds { row: BOARD_SIZE, col: 0 }
    );
    assert!(board.mark_affected(0, BOARD_SIZE).is_err());
}

#[test]
fn reset_clears_everything() {
    let mut board = Board::new();
    board.place_fleet(&DEMO_FLEET);
    board.mark_affected(9, 0).unwrap();
    board.reset();
    assert_eq!(board, Board::new());
}

#[test]
fn demo_fleet_fits_on_board() {
    let mut board = Board::new();
    board.place_fleet(&DEMO_FLEET);
    assert_eq!(board.count(CellState::Occupied), DEMO_FLEET.len() * SHIP_LENGTH);
}

#[test]
fn grid_snapshot_matches_accessor() {
    let mut board = Board::new();
    board.place_fleet(&DEMO_FLEET);
    board.mark_affected(9, 9).unwrap();
    let grid = board.to_grid();
    for (r, row) in grid.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            assert_eq!(*cell, board.cell_at(r, c).unwrap());
        }
    }
    assert_eq!(grid[9][9], CellState::Affected);
    assert_eq!(grid[2][1], CellState::Occupied);
}

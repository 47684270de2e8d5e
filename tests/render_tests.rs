use battleship_abilities::{
    apply_ability, build_cross, coord_label, Board, BoardView, CellState, Simulation,
    StandardMask, DEMO_SCENARIOS,
};

#[test]
fn coord_labels_use_column_letter_then_row() {
    assert_eq!(coord_label(2, 5).to_string(), "F2");
    assert_eq!(coord_label(7, 2).to_string(), "C7");
    assert_eq!(coord_label(0, 9).to_string(), "J0");
}

#[test]
fn empty_board_layout() {
    let board = Board::new();
    let text = BoardView::titled(&board, "Empty").to_string();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], " Empty ");
    assert_eq!(lines[1], "   A B C D E F G H I J ");
    assert_eq!(lines[2], "0 |~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ");
    assert_eq!(lines[11], "9 |~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ");
    assert!(lines[12].chars().all(|c| c == '-'));
    assert_eq!(lines.len(), 13);
}

#[test]
fn symbols_per_state() {
    assert_eq!(CellState::Empty.symbol(), '~');
    assert_eq!(CellState::Occupied.symbol(), 'N');
    assert_eq!(CellState::Affected.symbol(), 'X');
}

#[test]
fn cross_scenario_renders_row_seven() {
    let mut sim = Simulation::demo();
    let board = sim.run(DEMO_SCENARIOS[1]);
    let text = BoardView::new(board).to_string();
    let row7 = text.lines().nth(2 + 7).unwrap();
    // demo fleet occupies B7 on the main diagonal
    assert_eq!(row7, "7 |X N X X X X ~ ~ N ~ ");
}

#[test]
fn affected_cells_render_as_x() {
    let mut board = Board::new();
    let mask: StandardMask = build_cross();
    apply_ability(&mut board, &mask, 0, 0);
    let text = BoardView::new(&board).to_string();
    let row0 = text.lines().nth(2).unwrap();
    assert_eq!(row0, "0 |X X X X ~ ~ ~ ~ ~ ~ ");
}

use battleship_abilities::{Board, Orientation, Ship, BOARD_SIZE};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn cells_follow_orientation_step() {
    let ship = Ship::new(1, 5, Orientation::DiagonalAnti, 4);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![Some((1, 5)), Some((2, 4)), Some((3, 3)), Some((4, 2))]);
    assert_eq!(ship.origin(), (1, 5));
    assert_eq!(ship.length(), 4);
}

#[test]
fn cells_are_not_clipped() {
    let ship = Ship::new(8, 1, Orientation::DiagonalAnti, 3);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![Some((8, 1)), Some((9, 0)), None]);

    let ship = Ship::new(9, 9, Orientation::DiagonalMain, 2);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![Some((9, 9)), Some((10, 10))]);
}

#[test]
fn cells_do_not_wrap_at_usize_limits() {
    let ship = Ship::new(usize::MAX, 0, Orientation::Vertical, 3);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![Some((usize::MAX, 0)), None, None]);

    let ship = Ship::new(0, usize::MAX - 1, Orientation::Horizontal, 3);
    assert_eq!(ship.cells().flatten().count(), 2);
}

#[test]
fn random_ships_stay_on_board() {
    let mut rng = SmallRng::seed_from_u64(42);
    for length in 1..=BOARD_SIZE {
        for _ in 0..50 {
            let ship = Ship::random(&mut rng, length).unwrap();
            assert_eq!(ship.length(), length);
            assert!(ship
                .cells()
                .all(|cell| cell.is_some_and(|(r, c)| Board::contains(r, c))));
        }
    }
}

#[test]
fn random_rejects_impossible_lengths() {
    let mut rng = SmallRng::seed_from_u64(7);
    assert!(Ship::random(&mut rng, 0).is_none());
    assert!(Ship::random(&mut rng, BOARD_SIZE + 1).is_none());
}

#[test]
fn random_is_reproducible() {
    let mut rng1 = SmallRng::seed_from_u64(12345);
    let mut rng2 = SmallRng::seed_from_u64(12345);
    for _ in 0..10 {
        assert_eq!(Ship::random(&mut rng1, 3), Ship::random(&mut rng2, 3));
    }
}

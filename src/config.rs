use crate::shape::AbilityShape;
use crate::ship::{Orientation, Ship};
use crate::simulation::Scenario;

pub const BOARD_SIZE: usize = 10;
pub const MASK_SIZE: usize = 7;
pub const MASK_CENTER: usize = MASK_SIZE / 2;

/// Length of every ship in the demonstration fleet.
pub const SHIP_LENGTH: usize = 3;
pub const FLEET_SIZE: usize = 4;

pub const DEMO_FLEET: [Ship; FLEET_SIZE] = [
    Ship::new(2, 1, Orientation::Horizontal, SHIP_LENGTH),
    Ship::new(5, 8, Orientation::Vertical, SHIP_LENGTH),
    Ship::new(6, 0, Orientation::DiagonalMain, SHIP_LENGTH),
    Ship::new(0, 9, Orientation::DiagonalAnti, SHIP_LENGTH),
];

pub const DEMO_SCENARIOS: [Scenario; 3] = [
    Scenario::new(AbilityShape::Cone, 2, 5),
    Scenario::new(AbilityShape::Cross, 7, 2),
    Scenario::new(AbilityShape::Diamond, 4, 4),
];

const _: () = assert!(BOARD_SIZE > 0, "board size must be positive");
const _: () = assert!(MASK_SIZE % 2 == 1, "mask size must be odd");
const _: () = assert!(BOARD_SIZE * BOARD_SIZE <= u128::BITS as usize);

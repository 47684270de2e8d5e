//! Fixed-sequence driver: reset, place the fleet, apply one ability.

use crate::board::Board;
use crate::config::DEMO_FLEET;
use crate::overlay::apply_ability;
use crate::common::coord_label;
use crate::shape::{AbilityKit, AbilityShape};
use crate::ship::Ship;
use log::info;

/// One ability application: which shape and where its center lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub shape: AbilityShape,
    pub origin_row: usize,
    pub origin_col: usize,
}

impl Scenario {
    pub const fn new(shape: AbilityShape, origin_row: usize, origin_col: usize) -> Self {
        Self {
            shape,
            origin_row,
            origin_col,
        }
    }
}

/// Owns the board and the prebuilt masks; borrows the fleet.
pub struct Simulation<'a> {
    board: Board,
    fleet: &'a [Ship],
    kit: AbilityKit,
}

impl<'a> Simulation<'a> {
    pub fn new(fleet: &'a [Ship]) -> Self {
        let mut board = Board::new();
        board.place_fleet(fleet);
        Self {
            board,
            fleet,
            kit: AbilityKit::new(),
        }
    }

    /// Simulation over the four-ship demonstration fleet.
    pub fn demo() -> Simulation<'static> {
        Simulation::new(&DEMO_FLEET)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fleet(&self) -> &[Ship] {
        self.fleet
    }

    pub fn kit(&self) -> &AbilityKit {
        &self.kit
    }

    /// Resets the board to the fleet alone.
    pub fn reset(&mut self) {
        self.board.reset();
        self.board.place_fleet(self.fleet);
    }

    /// Resets the board, then applies the scenario's ability.
    pub fn run(&mut self, scenario: Scenario) -> &Board {
        self.reset();
        info!(
            "{} ability at {}",
            scenario.shape.name(),
            coord_label(scenario.origin_row, scenario.origin_col)
        );
        apply_ability(
            &mut self.board,
            self.kit.mask(scenario.shape),
            scenario.origin_row,
            scenario.origin_col,
        );
        &self.board
    }
}

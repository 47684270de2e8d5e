//! The 10×10 board, kept as two bit layers: ships and ability marks.

use crate::bitgrid::BitGrid;
use crate::common::{BoardError, CellState};
use crate::config::BOARD_SIZE;
use crate::ship::Ship;
use core::fmt;
use log::{debug, trace};

type BB = BitGrid<u128, BOARD_SIZE>;

/// Row-major snapshot of every cell state.
pub type CellGrid = [[CellState; BOARD_SIZE]; BOARD_SIZE];

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    ships: BB,
    affected: BB,
}

impl Board {
    /// A board with every cell `Empty`.
    pub fn new() -> Self {
        Board {
            ships: BB::new(),
            affected: BB::new(),
        }
    }

    /// Returns every cell to `Empty`.
    pub fn reset(&mut self) {
        self.ships.clear_all();
        self.affected.clear_all();
    }

    /// Writes `Occupied` along the ship, skipping cells off the board.
    /// Overlapping ships are allowed.
    pub fn place_ship(&mut self, ship: &Ship) {
        let mut clipped = 0usize;
        for cell in ship.cells() {
            match cell.filter(|&(row, col)| Self::contains(row, col)) {
                Some((row, col)) => {
                    self.ships.set_unchecked(row, col);
                    self.affected.clear_unchecked(row, col);
                }
                None => clipped += 1,
            }
        }
        if clipped > 0 {
            debug!("ship at {:?} clipped by {} cell(s)", ship.origin(), clipped);
        }
    }

    pub fn place_fleet(&mut self, fleet: &[Ship]) {
        for ship in fleet {
            self.place_ship(ship);
        }
        trace!("fleet of {} placed", fleet.len());
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        if self.ships.get(row, col)? {
            Ok(CellState::Occupied)
        } else if self.affected.get(row, col)? {
            Ok(CellState::Affected)
        } else {
            Ok(CellState::Empty)
        }
    }

    /// Marks a cell `Affected` unless it holds a ship. Returns whether the
    /// cell is now `Affected`.
    pub fn mark_affected(&mut self, row: usize, col: usize) -> Result<bool, BoardError> {
        if self.ships.get(row, col)? {
            return Ok(false);
        }
        self.affected.set(row, col)?;
        Ok(true)
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        match state {
            CellState::Occupied => self.ships.count_ones(),
            CellState::Affected => self.affected.count_ones(),
            CellState::Empty => (!(self.ships | self.affected)).count_ones(),
        }
    }

    /// Row-major iterator over the cells in `state`.
    pub fn cells(&self, state: CellState) -> impl Iterator<Item = (usize, usize)> {
        let layer = match state {
            CellState::Occupied => self.ships,
            CellState::Affected => self.affected,
            CellState::Empty => !(self.ships | self.affected),
        };
        layer.iter_set_bits()
    }

    pub fn to_grid(&self) -> CellGrid {
        core::array::from_fn(|row| {
            core::array::from_fn(|col| self.cell_at(row, col).unwrap_or_default())
        })
    }

    /// Whether `(row, col)` lies on the board.
    pub fn contains(row: usize, col: usize) -> bool {
        BB::contains(row, col)
    }

    /// Moves `(row, col)` by a signed offset. Returns `None` when the target
    /// is off the board, including offsets that leave the `usize` range.
    pub fn translate(row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        Self::contains(row, col).then_some((row, col))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{\n  ships: {:?},\n  affected: {:?}\n}}",
            self.ships, self.affected
        )
    }
}

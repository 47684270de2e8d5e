//! Ship placement descriptors.

use crate::config::BOARD_SIZE;
use rand::Rng;

/// Direction a ship extends from its start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Down and to the right.
    DiagonalMain,
    /// Down and to the left.
    DiagonalAnti,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalMain,
        Orientation::DiagonalAnti,
    ];

    /// Unit `(row, col)` step between consecutive ship cells.
    pub const fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalMain => (1, 1),
            Orientation::DiagonalAnti => (1, -1),
        }
    }
}

/// A ship placement: start cell, orientation and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    row: usize,
    col: usize,
    orientation: Orientation,
    length: usize,
}

impl Ship {
    pub const fn new(row: usize, col: usize, orientation: Orientation, length: usize) -> Self {
        Self {
            row,
            col,
            orientation,
            length,
        }
    }

    /// Random placement of a ship of `length` that lies fully on the board.
    /// Returns `None` when no such placement exists.
    pub fn random<R: Rng>(rng: &mut R, length: usize) -> Option<Self> {
        if length == 0 || length > BOARD_SIZE {
            return None;
        }
        let orientation = Orientation::ALL[rng.random_range(0..Orientation::ALL.len())];
        let span = length - 1;
        let (dr, dc) = orientation.step();
        let max_row = if dr == 0 { BOARD_SIZE - 1 } else { BOARD_SIZE - 1 - span };
        let (min_col, max_col) = match dc {
            0 => (0, BOARD_SIZE - 1),
            1 => (0, BOARD_SIZE - 1 - span),
            _ => (span, BOARD_SIZE - 1),
        };
        let row = rng.random_range(0..=max_row);
        let col = rng.random_range(min_col..=max_col);
        Some(Self::new(row, col, orientation, length))
    }

    /// Start cell `(row, col)`.
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Every cell the ship spans, in placement order. Cells may fall off the
    /// board; clipping is left to the board. `None` marks a cell whose
    /// coordinates leave the `usize` range.
    pub fn cells(&self) -> impl Iterator<Item = Option<(usize, usize)>> {
        let (dr, dc) = self.orientation.step();
        let (row, col) = (self.row, self.col);
        (0..self.length).map(move |k| Some((advance(row, dr, k)?, advance(col, dc, k)?)))
    }
}

/// `start` moved `k` unit steps in the direction of `step`.
fn advance(start: usize, step: isize, k: usize) -> Option<usize> {
    match step.signum() {
        0 => Some(start),
        1 => start.checked_add(k),
        _ => start.checked_sub(k),
    }
}

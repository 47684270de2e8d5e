//! Common types: cell states and board errors.

use crate::bitgrid::GridError;
use core::fmt;

/// State of a single board cell.
///
/// `Occupied` wins over `Affected`: a ship cell is never downgraded by an
/// ability overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Occupied,
    Affected,
}

impl CellState {
    /// Character used when rendering the board.
    pub const fn symbol(self) -> char {
        match self {
            CellState::Empty => '~',
            CellState::Occupied => 'N',
            CellState::Affected => 'X',
        }
    }
}

/// Rendered in place of a cell that could not be read.
pub const UNKNOWN_SYMBOL: char = '?';

/// Board coordinate in column-letter + row notation, e.g. `F2` for row 2,
/// column 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordLabel {
    row: usize,
    col: usize,
}

pub fn coord_label(row: usize, col: usize) -> CoordLabel {
    CoordLabel { row, col }
}

pub(crate) fn column_letter(col: usize) -> char {
    u8::try_from(col)
        .ok()
        .and_then(|c| b'A'.checked_add(c))
        .map(char::from)
        .unwrap_or(UNKNOWN_SYMBOL)
}

impl fmt::Display for CoordLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letter(self.col), self.row)
    }
}

/// Errors returned by Board accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying grid error.
    Grid(GridError),
    /// Coordinate outside the board.
    OutOfBounds { row: usize, col: usize },
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::IndexOutOfBounds { row, col } => BoardError::OutOfBounds { row, col },
            other => BoardError::Grid(other),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Grid(e) => write!(f, "grid error: {}", e),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "coordinate ({}, {}) is off the board", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

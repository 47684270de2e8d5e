//! Text rendering of the board.

use crate::board::Board;
use crate::common::{column_letter, UNKNOWN_SYMBOL};
use crate::config::BOARD_SIZE;
use core::fmt;

const SEPARATOR: &str = "---------------------------------------------------";

/// A titled, printable view of a board.
pub struct BoardView<'a> {
    board: &'a Board,
    title: &'a str,
}

impl<'a> BoardView<'a> {
    pub const DEFAULT_TITLE: &'static str = "Battleship board - ability view";

    pub fn new(board: &'a Board) -> Self {
        Self::titled(board, Self::DEFAULT_TITLE)
    }

    pub fn titled(board: &'a Board, title: &'a str) -> Self {
        Self { board, title }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " {} ", self.title)?;
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{} ", column_letter(col))?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{} |", row)?;
            for col in 0..BOARD_SIZE {
                let symbol = self
                    .board
                    .cell_at(row, col)
                    .map(|cell| cell.symbol())
                    .unwrap_or(UNKNOWN_SYMBOL);
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", SEPARATOR)
    }
}

/// Print the board to stdout.
#[cfg(feature = "std")]
pub fn print_board(board: &Board) {
    std::println!("\n{}", BoardView::new(board));
}

//! Stamping ability masks onto the board.
//!
//! The mask center is anchored at the origin; mask cell `(mr, mc)` lands on
//! board cell `(origin_row + mr - center, origin_col + mc - center)`. Cells
//! that land off the board are skipped one by one, so an origin near an edge
//! applies the part of the mask that fits.

use crate::board::Board;
use crate::common::coord_label;
use crate::shape::AbilityMask;
use log::{debug, trace};
use num_traits::{PrimInt, Unsigned};

/// Board cells covered by the active cells of `mask` anchored at the origin,
/// clipped to the board.
pub fn footprint<T, const N: usize>(
    mask: &AbilityMask<T, N>,
    origin_row: usize,
    origin_col: usize,
) -> impl Iterator<Item = (usize, usize)>
where
    T: PrimInt + Unsigned,
{
    mask.offsets()
        .filter_map(move |(dr, dc)| Board::translate(origin_row, origin_col, dr, dc))
}

/// Marks the footprint of `mask` at the origin `Affected`. Ship cells keep
/// their `Occupied` state. Applying the same mask at the same origin again
/// leaves the board unchanged.
pub fn apply_ability<T, const N: usize>(
    board: &mut Board,
    mask: &AbilityMask<T, N>,
    origin_row: usize,
    origin_col: usize,
) where
    T: PrimInt + Unsigned,
{
    debug!(
        "applying ability with origin at {}",
        coord_label(origin_row, origin_col)
    );
    let mut marked = 0usize;
    let mut covered = 0usize;
    for (row, col) in footprint(mask, origin_row, origin_col) {
        covered += 1;
        if let Ok(true) = board.mark_affected(row, col) {
            marked += 1;
        }
    }
    trace!(
        "{} of {} mask cells on the board, {} clipped, {} left as ships",
        covered,
        mask.active_count(),
        mask.active_count() - covered,
        covered - marked
    );
}

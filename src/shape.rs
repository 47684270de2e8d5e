//! Ability masks: square, odd-sized grids of offsets around a center cell.
//!
//! Each [`AbilityShape`] maps to a pure function of the mask dimension. The
//! dimension is a const generic so the odd-size invariant and the capacity
//! of the backing integer are checked at compile time.

use crate::bitgrid::BitGrid;
use crate::config::MASK_SIZE;
use num_traits::{PrimInt, Unsigned};

/// The closed set of ability shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum AbilityShape {
    /// Wedge with its apex at the top row, widening downward.
    Cone,
    /// Full center row and center column.
    Cross,
    /// Cells within Manhattan distance `center` of the center.
    Diamond,
}

impl AbilityShape {
    pub const ALL: [AbilityShape; 3] = [
        AbilityShape::Cone,
        AbilityShape::Cross,
        AbilityShape::Diamond,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            AbilityShape::Cone => "cone",
            AbilityShape::Cross => "cross",
            AbilityShape::Diamond => "diamond",
        }
    }

    /// Builds the mask for this shape at dimension `N`.
    pub fn build<T, const N: usize>(self) -> AbilityMask<T, N>
    where
        T: PrimInt + Unsigned,
    {
        match self {
            AbilityShape::Cone => build_cone(),
            AbilityShape::Cross => build_cross(),
            AbilityShape::Diamond => build_diamond(),
        }
    }
}

/// Immutable `N×N` mask of active offsets, centered at `(N / 2, N / 2)`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AbilityMask<T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    cells: BitGrid<T, N>,
}

/// Mask at the game's standard dimension.
pub type StandardMask = AbilityMask<u64, MASK_SIZE>;

impl<T, const N: usize> AbilityMask<T, N>
where
    T: PrimInt + Unsigned,
{
    /// Index of the center row and column. Evaluating it rejects even
    /// dimensions and backing integers too narrow for `N * N` cells.
    pub const CENTER: usize = {
        assert!(N % 2 == 1, "mask dimension must be odd");
        assert!(
            N * N <= core::mem::size_of::<T>() * 8,
            "mask does not fit its backing integer"
        );
        N / 2
    };

    /// Mask whose active cells are those satisfying `active(row, col)`.
    pub fn from_fn<F>(mut active: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let _ = Self::CENTER;
        let mut cells = BitGrid::new();
        for row in 0..N {
            for col in 0..N {
                if active(row, col) {
                    cells.set_unchecked(row, col);
                }
            }
        }
        AbilityMask { cells }
    }

    pub fn dimension(&self) -> usize {
        N
    }

    pub fn center(&self) -> usize {
        Self::CENTER
    }

    /// Whether the offset at `(row, col)` is active; `false` outside the mask.
    pub fn is_active(&self, row: usize, col: usize) -> bool {
        self.cells.get(row, col).unwrap_or(false)
    }

    pub fn active_count(&self) -> usize {
        self.cells.count_ones()
    }

    pub fn row_count(&self, row: usize) -> usize {
        self.cells.row_count(row)
    }

    /// Active mask-local cells in row-major order.
    pub fn active_cells(&self) -> impl Iterator<Item = (usize, usize)> {
        self.cells.iter_set_bits()
    }

    /// Active cells as signed offsets from the center.
    pub fn offsets(&self) -> impl Iterator<Item = (isize, isize)> {
        let center = Self::CENTER as isize;
        self.active_cells()
            .map(move |(r, c)| (r as isize - center, c as isize - center))
    }
}

impl<T, const N: usize> core::fmt::Debug for AbilityMask<T, N>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for row in 0..N {
            for col in 0..N {
                write!(f, "{}", if self.is_active(row, col) { '1' } else { '0' })?;
                if col + 1 < N {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Cone: active iff `|col - center| <= row`. One cell at row 0, full width
/// from row `center` down.
pub fn build_cone<T, const N: usize>() -> AbilityMask<T, N>
where
    T: PrimInt + Unsigned,
{
    let center = AbilityMask::<T, N>::CENTER;
    AbilityMask::from_fn(|row, col| col.abs_diff(center) <= row)
}

/// Cross: active iff on the center row or center column.
pub fn build_cross<T, const N: usize>() -> AbilityMask<T, N>
where
    T: PrimInt + Unsigned,
{
    let center = AbilityMask::<T, N>::CENTER;
    AbilityMask::from_fn(|row, col| row == center || col == center)
}

/// Diamond: active iff the Manhattan distance to the center is at most
/// `center`, touching the middle of each mask edge.
pub fn build_diamond<T, const N: usize>() -> AbilityMask<T, N>
where
    T: PrimInt + Unsigned,
{
    let center = AbilityMask::<T, N>::CENTER;
    let radius = center;
    AbilityMask::from_fn(|row, col| row.abs_diff(center) + col.abs_diff(center) <= radius)
}

/// The three standard masks, built once and shared across applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityKit {
    cone: StandardMask,
    cross: StandardMask,
    diamond: StandardMask,
}

impl AbilityKit {
    pub fn new() -> Self {
        Self {
            cone: AbilityShape::Cone.build(),
            cross: AbilityShape::Cross.build(),
            diamond: AbilityShape::Diamond.build(),
        }
    }

    pub fn mask(&self, shape: AbilityShape) -> &StandardMask {
        match shape {
            AbilityShape::Cone => &self.cone,
            AbilityShape::Cross => &self.cross,
            AbilityShape::Diamond => &self.diamond,
        }
    }
}

impl Default for AbilityKit {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_cone_rows() {
        let cone: StandardMask = build_cone();
        let widths: [usize; MASK_SIZE] = core::array::from_fn(|r| cone.row_count(r));
        assert_eq!(widths, [1, 3, 5, 7, 7, 7, 7]);
        assert!(cone.is_active(0, 3));
        assert!(!cone.is_active(0, 2));
    }

    #[test]
    fn offsets_are_centered() {
        let cross: StandardMask = build_cross();
        assert!(cross.offsets().any(|o| o == (0, 0)));
        assert!(cross.offsets().all(|(dr, dc)| dr == 0 || dc == 0));
        assert!(cross.offsets().all(|(dr, dc)| dr.abs() <= 3 && dc.abs() <= 3));
    }
}

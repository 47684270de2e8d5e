//! Square boolean grids packed into a single unsigned integer.
//!
//! `BitGrid<T, N>` stores an `N×N` grid row-major in the low `N * N` bits of
//! `T`. Both the board layers and the ability masks are built on it, so it
//! stays `no_std` and allocation free.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign, Not};
use num_traits::{PrimInt, Unsigned};

/// Errors returned by grid accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// `N * N` cells do not fit in the bits of the backing integer.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column outside `[0, N)`.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::SizeTooLarge { n, capacity } => {
                write!(f, "grid of {}x{} cells exceeds {} bits", n, n, capacity)
            }
            GridError::IndexOutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the grid", row, col)
            }
        }
    }
}

/// Fixed-size `N×N` grid of flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitGrid<T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    bits: T,
}

impl<T, const N: usize> BitGrid<T, N>
where
    T: PrimInt + Unsigned,
{
    /// Number of cells in the grid.
    pub const CELLS: usize = N * N;

    fn capacity() -> usize {
        core::mem::size_of::<T>() * 8
    }

    #[inline]
    fn cells_mask() -> T {
        if Self::CELLS >= Self::capacity() {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    #[inline]
    fn bit(row: usize, col: usize) -> T {
        T::one() << (row * N + col)
    }

    /// Empty grid. Callers are responsible for `N * N` fitting in `T`;
    /// use [`BitGrid::try_new`] when that is not known statically.
    #[inline]
    pub fn new() -> Self {
        BitGrid { bits: T::zero() }
    }

    /// Empty grid, checking that the backing integer is wide enough.
    pub fn try_new() -> Result<Self, GridError> {
        let capacity = Self::capacity();
        if Self::CELLS > capacity {
            return Err(GridError::SizeTooLarge { n: N, capacity });
        }
        Ok(Self::new())
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        N
    }

    #[inline]
    pub fn contains(row: usize, col: usize) -> bool {
        row < N && col < N
    }

    fn check(row: usize, col: usize) -> Result<(), GridError> {
        if Self::contains(row, col) {
            Ok(())
        } else {
            Err(GridError::IndexOutOfBounds { row, col })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        Self::check(row, col)?;
        Ok(self.bits & Self::bit(row, col) != T::zero())
    }

    pub fn set(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        Self::check(row, col)?;
        self.bits = self.bits | Self::bit(row, col);
        Ok(())
    }

    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        Self::check(row, col)?;
        self.bits = self.bits & !Self::bit(row, col);
        Ok(())
    }

    /// Sets a cell already known to lie inside the grid.
    #[inline]
    pub(crate) fn set_unchecked(&mut self, row: usize, col: usize) {
        debug_assert!(Self::contains(row, col));
        self.bits = self.bits | Self::bit(row, col);
    }

    #[inline]
    pub(crate) fn clear_unchecked(&mut self, row: usize, col: usize) {
        debug_assert!(Self::contains(row, col));
        self.bits = self.bits & !Self::bit(row, col);
    }

    /// Clears every cell.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Number of set cells in `row`, zero for rows outside the grid.
    pub fn row_count(&self, row: usize) -> usize {
        (0..N)
            .filter(|&col| self.get(row, col).unwrap_or(false))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Builds a grid from `(row, col)` pairs, failing on the first one
    /// outside the grid.
    pub fn from_iter<I>(cells: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new();
        for (row, col) in cells {
            grid.set(row, col)?;
        }
        Ok(grid)
    }

    /// Row-major iterator over the set cells.
    pub fn iter_set_bits(&self) -> SetCells<T, N> {
        SetCells {
            grid: *self,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitGrid<T, N>
where
    T: PrimInt + Unsigned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitGrid<T, N>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid<{}>:", N)?;
        for row in 0..N {
            for col in 0..N {
                let ch = if self.get(row, col).unwrap_or(false) { '#' } else { '.' };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set cells of a [`BitGrid`].
#[derive(Clone, Copy)]
pub struct SetCells<T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    grid: BitGrid<T, N>,
    idx: usize,
}

impl<T, const N: usize> Iterator for SetCells<T, N>
where
    T: PrimInt + Unsigned,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if (self.grid.bits >> idx) & T::one() != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitGrid<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitGrid {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitGrid<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitGrid {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOrAssign for BitGrid<T, N>
where
    T: PrimInt + Unsigned,
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

/// Complement within the `N×N` cells; the unused high bits stay clear.
impl<T, const N: usize> Not for BitGrid<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn not(self) -> Self {
        BitGrid {
            bits: !self.bits & Self::cells_mask(),
        }
    }
}

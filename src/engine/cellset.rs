//! A fixed-size set of grid cells packed into one unsigned integer.
//!
//! Cells are addressed row-major on an `N×N` grid; bit `row * N + col` is set
//! when the cell belongs to the set. Everything here is `no_std` and
//! allocation free, so resolving a salvo is a handful of word operations.

use core::ops::{BitAnd, BitOr, BitOrAssign};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use super::config::BOARD_SIZE;
use super::location::Location;

/// Set of cells on the standard 10×10 grid.
pub type Cells = CellSet<u128, { BOARD_SIZE as usize }>;

/// A set of cells on an `N×N` grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSet<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;

    #[inline]
    fn full_mask() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    #[inline]
    fn bit(row: usize, col: usize) -> Option<T> {
        if row >= N || col >= N {
            None
        } else {
            Some(T::one() << (row * N + col))
        }
    }

    /// Empty set.
    #[inline]
    pub fn new() -> Self {
        CellSet { bits: T::zero() }
    }

    /// Returns `true` if the grid fits in `T`.
    pub const fn fits() -> bool {
        N * N <= mem::size_of::<T>() * 8
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether (`row`, `col`) is in the set. Off-grid cells never are.
    pub fn contains_cell(&self, row: usize, col: usize) -> bool {
        match Self::bit(row, col) {
            Some(b) => !(self.bits & b).is_zero(),
            None => false,
        }
    }

    /// Adds (`row`, `col`). Returns `false` if it was already present or lies
    /// off the grid.
    pub fn insert_cell(&mut self, row: usize, col: usize) -> bool {
        match Self::bit(row, col) {
            Some(b) if (self.bits & b).is_zero() => {
                self.bits = self.bits | b;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if the two sets share at least one cell.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    /// Returns `true` if every cell of `self` is in `other`.
    #[inline]
    pub fn is_subset(self, other: Self) -> bool {
        (self.bits & !other.bits).is_zero()
    }

    /// Iterator over the set cells in row-major order.
    pub fn iter_cells(&self) -> SetCells<T, N> {
        SetCells {
            bits: self.bits & Self::full_mask(),
            idx: 0,
        }
    }
}

impl Cells {
    /// Builds a set from grid locations; repeats collapse.
    pub fn from_locations<'a, I>(locations: I) -> Self
    where
        I: IntoIterator<Item = &'a Location>,
    {
        let mut set = Self::new();
        for loc in locations {
            set.insert(*loc);
        }
        set
    }

    pub fn contains(&self, loc: Location) -> bool {
        self.contains_cell(loc.row() as usize, loc.col() as usize)
    }

    pub fn insert(&mut self, loc: Location) -> bool {
        self.insert_cell(loc.row() as usize, loc.col() as usize)
    }

    /// Set cells as grid locations, row-major.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.iter_cells()
            .filter_map(|(r, c)| Location::new(r as u8, c as u8).ok())
    }
}

impl<T, const N: usize> Default for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter_cells()).finish()
    }
}

/// Iterator over the cells of a [`CellSet`].
#[derive(Clone, Copy)]
pub struct SetCells<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for SetCells<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if !((self.bits >> idx) & T::one()).is_zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOrAssign for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

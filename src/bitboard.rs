//! A fixed-size set of grid squares packed into one unsigned integer.
//!
//! The type is `no_std` friendly and never allocates. An `N×N` grid is stored
//! row-major in `T`, so membership tests, insertion and removal are single
//! bit operations.

use core::ops::BitAnd;
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coordinate::Coordinate;

/// Set of squares on an `N×N` grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const FITS: () = assert!(
        N * N <= mem::size_of::<T>() * 8,
        "N*N squares do not fit in the backing integer"
    );

    #[inline]
    fn bit(coord: Coordinate) -> Option<usize> {
        let n = N as i32;
        if coord.x < 0 || coord.y < 0 || coord.x >= n || coord.y >= n {
            None
        } else {
            Some((coord.y * n + coord.x) as usize)
        }
    }

    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        let _ = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    /// Number of squares in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether `coord` is in the set. Off-grid coordinates are never members.
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        match Self::bit(coord) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Add `coord`. Returns `true` if it was not already present.
    ///
    /// # Panics
    /// If `coord` is off the grid.
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        let idx = Self::bit(coord)
            .unwrap_or_else(|| panic!("coordinate {:?} outside {}x{} bitboard", coord, N, N));
        let was_set = ((self.bits >> idx) & T::one()) != T::zero();
        self.bits = self.bits | (T::one() << idx);
        !was_set
    }

    /// Remove `coord`. Returns `true` if it was present.
    pub fn remove(&mut self, coord: Coordinate) -> bool {
        match Self::bit(coord) {
            Some(idx) => {
                let was_set = ((self.bits >> idx) & T::one()) != T::zero();
                self.bits = self.bits & !(T::one() << idx);
                was_set
            }
            None => false,
        }
    }

    /// Iterator over members in row-major order.
    #[inline]
    pub fn iter(&self) -> Squares<'_, T, N> {
        Squares {
            board: self,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> FromIterator<Coordinate> for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut board = Self::new();
        for c in iter {
            board.insert(c);
        }
        board
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}>:", any::type_name::<T>(), N)?;
        for y in 0..N as i32 {
            for x in 0..N as i32 {
                let bit = if self.contains(Coordinate::new(x, y)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the squares of a bitboard.
#[derive(Clone, Copy)]
pub struct Squares<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Squares<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some(Coordinate::new((idx % N) as i32, (idx / N) as i32));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

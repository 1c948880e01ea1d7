//! Grid positions and the four cardinal directions.

use core::fmt;
use core::ops::Add;

use crate::config::{CELL_COUNT, GRID_SIZE};

/// A unit step along one of the four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Order used when enumerating the neighbours of a square.
    pub const NEIGHBOR_ORDER: [Direction; 4] =
        [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// `(dx, dy)` offset of one step. `Up` decreases `y`.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// A square on the grid. Values outside `[0, GRID_SIZE)` are representable so
/// that translation never fails; the board rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const ZERO: Coordinate = Coordinate::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `true` when the coordinate lies on the grid.
    pub const fn is_in_bounds(self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < GRID_SIZE && self.y < GRID_SIZE
    }

    /// Translate by `steps` unit moves in `dir`.
    pub const fn step(self, dir: Direction, steps: i32) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx * steps, self.y + dy * steps)
    }

    /// Row-major index into a `GRID_SIZE × GRID_SIZE` array, or `None` when off
    /// the grid.
    pub fn index(self) -> Option<usize> {
        if self.is_in_bounds() {
            Some((self.y * GRID_SIZE + self.x) as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Coordinate::index`].
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < CELL_COUNT);
        let idx = idx as i32;
        Self::new(idx % GRID_SIZE, idx / GRID_SIZE)
    }

    /// In-bounds 4-neighbours in [`Direction::NEIGHBOR_ORDER`].
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        Direction::NEIGHBOR_ORDER
            .into_iter()
            .map(move |d| self + d)
            .filter(|c| c.is_in_bounds())
    }

    /// Every square of the grid, row by row.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..CELL_COUNT).map(Coordinate::from_index)
    }
}

impl Add<Direction> for Coordinate {
    type Output = Coordinate;

    fn add(self, dir: Direction) -> Coordinate {
        self.step(dir, 1)
    }
}

/// One-based `(x, y)`, the way squares are reported to players.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x + 1, self.y + 1)
    }
}

//! Ship placement geometry and damage tracking.

use core::fmt;

use crate::coordinate::{Coordinate, Direction};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Direction in which the ship grows from its origin.
    pub const fn direction(self) -> Direction {
        match self {
            Orientation::Horizontal => Direction::Right,
            Orientation::Vertical => Direction::Down,
        }
    }

    pub const fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Handle to a ship owned by a [`Board`](crate::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipId(pub(crate) usize);

/// A ship: `length` consecutive squares from `origin` along `orientation`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
    hits: usize,
}

impl Ship {
    /// A fresh, undamaged ship. Bounds are not checked here; the board does
    /// that on placement.
    pub const fn new(origin: Coordinate, length: usize, orientation: Orientation) -> Self {
        Self {
            origin,
            length,
            orientation,
            hits: 0,
        }
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of decks hit so far.
    pub fn hit_count(&self) -> usize {
        self.hits
    }

    /// Record one more damaged deck.
    ///
    /// # Panics
    /// If every deck is already hit.
    pub fn register_hit(&mut self) {
        assert!(
            self.hits < self.length,
            "hit registered on already destroyed ship at {}",
            self.origin
        );
        self.hits += 1;
    }

    pub fn is_destroyed(&self) -> bool {
        self.hits == self.length
    }

    /// Squares covered by the ship, from the origin outward.
    pub fn occupied_coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let dir = self.orientation.direction();
        let origin = self.origin;
        (0..self.length as i32).map(move |i| origin.step(dir, i))
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        let (along, across) = match self.orientation {
            Orientation::Horizontal => (coord.x - self.origin.x, coord.y - self.origin.y),
            Orientation::Vertical => (coord.y - self.origin.y, coord.x - self.origin.x),
        };
        across == 0 && along >= 0 && (along as usize) < self.length
    }

    /// Rotate in place around the origin. Only meaningful before placement.
    pub fn flip_orientation(&mut self) {
        self.orientation = self.orientation.flipped();
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ origin: {}, length: {}, orientation: {:?}, hits: {} }}",
            self.origin, self.length, self.orientation, self.hits,
        )
    }
}

//! Game board: ship placement with a one-square buffer, attack tracking and
//! fleet destruction.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, warn};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::cell::{Cell, CellView};
use crate::common::BoardError;
use crate::config::{CELL_COUNT, FLEET, GRID_SIZE, MAX_PLACEMENT_ATTEMPTS, MAX_SHIP_LENGTH};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship, ShipId};

/// Square set sized for one board.
pub type BB = BitBoard<u128, { GRID_SIZE as usize }>;

/// Read-only access to a board, as seen by an attacking strategy or a
/// renderer. Game-over checks go through [`Board::all_destroyed`], which is
/// `false` for a board that never had ships.
pub trait BoardView {
    /// Whether `coord` has been attacked.
    fn is_attacked(&self, coord: Coordinate) -> bool;

    /// Snapshot of the square at `coord`.
    fn cell_at(&self, coord: Coordinate) -> CellView<'_>;
}

/// One player's grid and the ships placed on it.
#[derive(Clone)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    ships: Vec<Ship>,
    all_destroyed: bool,
}

impl Board {
    /// Create an empty board (no ships placed, nothing attacked).
    pub fn new() -> Self {
        Board {
            cells: [Cell::default(); CELL_COUNT],
            ships: Vec::new(),
            all_destroyed: false,
        }
    }

    /// Remove every ship and attack mark.
    pub fn reset(&mut self) {
        self.cells = [Cell::default(); CELL_COUNT];
        self.ships.clear();
        self.all_destroyed = false;
    }

    fn slot(coord: Coordinate) -> usize {
        coord
            .index()
            .unwrap_or_else(|| panic!("coordinate {:?} is off the grid", coord))
    }

    /// Ships in placement order. Destroyed ships stay in the list.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> &Ship {
        &self.ships[id.0]
    }

    /// Number of ships not yet destroyed.
    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_destroyed()).count()
    }

    /// `true` once every placed ship is destroyed. A board without ships is
    /// never reported as destroyed.
    pub fn all_destroyed(&self) -> bool {
        self.all_destroyed
    }

    pub fn is_attacked(&self, coord: Coordinate) -> bool {
        self.cells[Self::slot(coord)].is_attacked()
    }

    pub fn cell_at(&self, coord: Coordinate) -> CellView<'_> {
        let cell = self.cells[Self::slot(coord)];
        CellView::new(cell, cell.ship().map(|id| &self.ships[id.0]))
    }

    /// Squares attacked so far.
    pub fn attacked_squares(&self) -> BB {
        Coordinate::all().filter(|&c| self.is_attacked(c)).collect()
    }

    /// Squares covered by ships.
    pub fn ship_squares(&self) -> BB {
        self.ships
            .iter()
            .flat_map(|s| s.occupied_coordinates())
            .collect()
    }

    fn check_placement(
        &self,
        origin: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if length == 0 || length > MAX_SHIP_LENGTH {
            return Err(BoardError::InvalidLength(length));
        }
        let end = origin.step(orientation.direction(), length as i32 - 1);
        if !origin.is_in_bounds() || !end.is_in_bounds() {
            return Err(BoardError::OutOfBounds { origin, length });
        }
        // footprint grown by one square on every side, clipped to the grid
        let (width, height) = match orientation {
            Orientation::Horizontal => (length as i32 + 2, 3),
            Orientation::Vertical => (3, length as i32 + 2),
        };
        for dy in 0..height {
            for dx in 0..width {
                let probe = Coordinate::new(origin.x - 1 + dx, origin.y - 1 + dy);
                if let Some(idx) = probe.index() {
                    if self.cells[idx].ship().is_some() {
                        return Err(BoardError::TooClose { origin, length });
                    }
                }
            }
        }
        Ok(())
    }

    /// Whether a ship of `length` fits at `origin` without leaving the grid
    /// or touching another ship, diagonals included.
    pub fn is_valid_placement(
        &self,
        origin: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> bool {
        self.check_placement(origin, length, orientation).is_ok()
    }

    /// Place a ship and register it in every square it covers.
    pub fn place_ship(
        &mut self,
        origin: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<ShipId, BoardError> {
        self.check_placement(origin, length, orientation)?;
        let id = ShipId(self.ships.len());
        let ship = Ship::new(origin, length, orientation);
        for c in ship.occupied_coordinates() {
            self.cells[Self::slot(c)].assign_ship(id);
        }
        self.ships.push(ship);
        debug!("placed {:?} as ship #{}", ship, id.0);
        Ok(id)
    }

    /// Returns a random valid `(origin, orientation)` for a ship of `length`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<(Coordinate, Orientation), BoardError> {
        if length == 0 || length > MAX_SHIP_LENGTH {
            return Err(BoardError::InvalidLength(length));
        }
        let span = GRID_SIZE - length as i32;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (span, GRID_SIZE - 1),
                Orientation::Vertical => (GRID_SIZE - 1, span),
            };
            let origin = Coordinate::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
            if self.is_valid_placement(origin, length, orientation) {
                return Ok((origin, orientation));
            }
        }
        Err(BoardError::PlacementExhausted {
            length,
            attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }

    /// Clear the board and place ships of the given lengths at random. On
    /// failure the board is left empty.
    pub fn place_lengths_randomly<R: Rng>(
        &mut self,
        lengths: &[usize],
        rng: &mut R,
    ) -> Result<(), BoardError> {
        self.reset();
        for &length in lengths {
            let placed = self
                .random_placement(rng, length)
                .and_then(|(origin, orientation)| self.place_ship(origin, length, orientation));
            if let Err(e) = placed {
                warn!("random fleet placement failed: {}", e);
                self.reset();
                return Err(e);
            }
        }
        Ok(())
    }

    /// Clear the board and place the standard fleet at random.
    pub fn place_fleet_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.place_lengths_randomly(&FLEET, rng)
    }

    /// Attack `coord`. Returns `true` on a hit.
    ///
    /// # Panics
    /// If `coord` is off the grid or was already attacked; check
    /// [`Board::is_attacked`] first.
    pub fn mark_coordinate(&mut self, coord: Coordinate) -> bool {
        let slot = Self::slot(coord);
        assert!(
            !self.cells[slot].is_attacked(),
            "square {} attacked twice",
            coord
        );
        let hit = match self.cells[slot].attack() {
            Some(id) => {
                self.ships[id.0].register_hit();
                true
            }
            None => false,
        };
        self.all_destroyed = !self.ships.is_empty() && self.ships.iter().all(Ship::is_destroyed);
        hit
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView for Board {
    fn is_attacked(&self, coord: Coordinate) -> bool {
        Board::is_attacked(self, coord)
    }

    fn cell_at(&self, coord: Coordinate) -> CellView<'_> {
        Board::cell_at(self, coord)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ships: {:?},\n  attacked: {:?},\n  all_destroyed: {}\n}}",
            self.ship_squares(),
            self.attacked_squares(),
            self.all_destroyed,
        )
    }
}

//! Per-square board state.

use crate::ship::{Ship, ShipId};

/// State of one square: the ship placed over it, if any, and whether it has
/// been attacked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    ship: Option<ShipId>,
    attacked: bool,
}

impl Cell {
    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }

    pub fn is_attacked(&self) -> bool {
        self.attacked
    }

    pub(crate) fn assign_ship(&mut self, id: ShipId) {
        debug_assert!(self.ship.is_none(), "square already holds a ship");
        self.ship = Some(id);
    }

    /// Mark the square attacked. Returns the ship hit, if any.
    pub(crate) fn attack(&mut self) -> Option<ShipId> {
        self.attacked = true;
        self.ship
    }
}

/// Read-only view of a square handed out by [`BoardView::cell_at`](crate::BoardView::cell_at).
#[derive(Debug, Clone, Copy)]
pub struct CellView<'a> {
    attacked: bool,
    ship: Option<(ShipId, &'a Ship)>,
}

impl<'a> CellView<'a> {
    pub(crate) fn new(cell: Cell, ship: Option<&'a Ship>) -> Self {
        Self {
            attacked: cell.attacked,
            ship: cell.ship.zip(ship),
        }
    }

    pub fn is_attacked(&self) -> bool {
        self.attacked
    }

    pub fn is_occupied(&self) -> bool {
        self.ship.is_some()
    }

    pub fn ship_id(&self) -> Option<ShipId> {
        self.ship.map(|(id, _)| id)
    }

    pub fn ship(&self) -> Option<&'a Ship> {
        self.ship.map(|(_, ship)| ship)
    }

    /// Attacked square holding a ship.
    pub fn is_hit(&self) -> bool {
        self.attacked && self.ship.is_some()
    }

    /// Attacked square with no ship.
    pub fn is_miss(&self) -> bool {
        self.attacked && self.ship.is_none()
    }

    /// Whether the ship on this square, if any, has been destroyed.
    pub fn is_ship_destroyed(&self) -> bool {
        self.ship().is_some_and(Ship::is_destroyed)
    }
}

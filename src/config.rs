/// Width and height of every board.
pub const GRID_SIZE: i32 = 10;
/// Number of squares on a board.
pub const CELL_COUNT: usize = (GRID_SIZE * GRID_SIZE) as usize;

pub const NUM_SHIPS: usize = 10;
/// Ship lengths placed on each board, largest first.
pub const FLEET: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];
pub const MAX_SHIP_LENGTH: usize = 4;

/// Total number of ship decks in the standard fleet.
pub const TOTAL_DECKS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Upper bound on rejection-sampling attempts for a single ship during
/// random fleet placement.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

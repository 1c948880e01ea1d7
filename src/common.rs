//! Error types shared by the board and the game controller.

use core::fmt;

use crate::coordinate::Coordinate;

/// Errors returned by board placement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Some square of the ship would fall outside the grid.
    OutOfBounds { origin: Coordinate, length: usize },
    /// The ship would overlap or touch an already placed ship.
    TooClose { origin: Coordinate, length: usize },
    /// Ship length is outside `1..=MAX_SHIP_LENGTH`.
    InvalidLength(usize),
    /// Random placement gave up on a ship after the retry budget ran out.
    PlacementExhausted { length: usize, attempts: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { origin, length } => {
                write!(f, "ship of length {} at {} leaves the grid", length, origin)
            }
            BoardError::TooClose { origin, length } => write!(
                f,
                "ship of length {} at {} overlaps or touches another ship",
                length, origin
            ),
            BoardError::InvalidLength(len) => write!(f, "invalid ship length {}", len),
            BoardError::PlacementExhausted { length, attempts } => write!(
                f,
                "could not place ship of length {} after {} attempts; fleet too large for grid",
                length, attempts
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned by the [`Game`](crate::Game) controller for player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Ship placement was requested outside the placement phase.
    NotPlacing,
    /// A shot was requested outside the playing phase.
    NotPlaying,
    /// The square was already attacked.
    AlreadyAttacked(Coordinate),
    /// The square is not on the grid.
    OutOfBounds(Coordinate),
    /// Underlying board error.
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotPlacing => write!(f, "all ships are already placed"),
            GameError::NotPlaying => write!(f, "the game is not in progress"),
            GameError::AlreadyAttacked(c) => write!(f, "square {} was already attacked", c),
            GameError::OutOfBounds(c) => write!(f, "square {} is off the grid", c),
            GameError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

//! Turn controller for a human versus computer game.

use alloc::boxed::Box;
use core::fmt;

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, GameError};
use crate::config::{FLEET, GRID_SIZE, NUM_SHIPS};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, ShipId};
use crate::strategy::{Difficulty, Strategy};

/// Who sank the other fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player,
    Computer,
}

/// Current phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The player is positioning the fleet ship by ship.
    PlacingShips,
    Playing,
    GameOver(Winner),
}

/// Outcome of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub target: Coordinate,
    pub hit: bool,
    /// The shot finished off the ship it hit.
    pub destroyed: bool,
}

impl fmt::Display for Shot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.hit { "hit" } else { "miss" };
        write!(f, "{} {}", outcome, self.target)?;
        if self.destroyed {
            write!(f, " (destroyed)")?;
        }
        Ok(())
    }
}

/// The player's shot and the computer's answer, if the game went on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub player: Shot,
    pub computer: Option<Shot>,
}

/// The ship the player is about to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview {
    /// Position in [`FLEET`].
    pub index: usize,
    pub length: usize,
    pub orientation: Orientation,
    /// Requested position pulled back so the ship stays on the grid.
    pub origin: Coordinate,
    /// Whether the ship may be placed at `origin`.
    pub valid: bool,
}

/// Human versus computer game: two boards, the computer's strategy and the
/// injected random source.
pub struct Game {
    computer_board: Board,
    player_board: Board,
    strategy: Box<dyn Strategy>,
    difficulty: Difficulty,
    rng: SmallRng,
    phase: Phase,
    placing: usize,
    orientation: Orientation,
    cursor: Coordinate,
}

/// Pull `target` back onto the grid for a ship of `length`.
fn clamp_origin(target: Coordinate, length: usize, orientation: Orientation) -> Coordinate {
    let last = GRID_SIZE - 1;
    let span = GRID_SIZE - length as i32;
    let (max_x, max_y) = match orientation {
        Orientation::Horizontal => (span, last),
        Orientation::Vertical => (last, span),
    };
    Coordinate::new(target.x.clamp(0, max_x), target.y.clamp(0, max_y))
}

impl Game {
    /// Start a game: the computer fleet is generated and the player is asked
    /// to place ships.
    pub fn new(difficulty: Difficulty, mut rng: SmallRng) -> Result<Self, BoardError> {
        let strategy = difficulty.strategy(&mut rng);
        let mut game = Self {
            computer_board: Board::new(),
            player_board: Board::new(),
            strategy,
            difficulty,
            rng,
            phase: Phase::PlacingShips,
            placing: 0,
            orientation: Orientation::Horizontal,
            cursor: Coordinate::ZERO,
        };
        game.reset()?;
        Ok(game)
    }

    /// Clear both boards, reset the opponent and start placement again. If
    /// the computer fleet cannot be generated the game is left untouched.
    pub fn reset(&mut self) -> Result<(), BoardError> {
        self.restart_with_fleet(&FLEET)
    }

    fn restart_with_fleet(&mut self, lengths: &[usize]) -> Result<(), BoardError> {
        let mut computer_board = Board::new();
        computer_board.place_lengths_randomly(lengths, &mut self.rng)?;
        self.computer_board = computer_board;
        self.player_board.reset();
        self.strategy.reset(&mut self.rng);
        self.phase = Phase::PlacingShips;
        self.placing = 0;
        self.orientation = Orientation::Horizontal;
        self.cursor = Coordinate::ZERO;
        info!("new game against {:?} opponent", self.difficulty);
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// The ship being positioned, or `None` once the fleet is placed.
    pub fn preview(&self) -> Option<Preview> {
        if self.phase != Phase::PlacingShips || self.placing >= NUM_SHIPS {
            return None;
        }
        let length = FLEET[self.placing];
        let origin = clamp_origin(self.cursor, length, self.orientation);
        Some(Preview {
            index: self.placing,
            length,
            orientation: self.orientation,
            origin,
            valid: self
                .player_board
                .is_valid_placement(origin, length, self.orientation),
        })
    }

    /// Move the preview towards `target`.
    pub fn move_preview(&mut self, target: Coordinate) -> Option<Preview> {
        self.cursor = target;
        self.preview()
    }

    /// Rotate the preview ship.
    pub fn flip_preview(&mut self) -> Option<Preview> {
        self.orientation = self.orientation.flipped();
        self.preview()
    }

    /// Place the current ship at `target` (clamped onto the grid).
    pub fn place_preview(&mut self, target: Coordinate) -> Result<ShipId, GameError> {
        let preview = self.move_preview(target).ok_or(GameError::NotPlacing)?;
        let id = self
            .player_board
            .place_ship(preview.origin, preview.length, preview.orientation)?;
        self.advance_placement();
        Ok(id)
    }

    /// Place every ship not yet positioned at random.
    pub fn place_remaining_randomly(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::PlacingShips {
            return Err(GameError::NotPlacing);
        }
        while self.placing < NUM_SHIPS {
            let length = FLEET[self.placing];
            let (origin, orientation) = self.player_board.random_placement(&mut self.rng, length)?;
            self.player_board.place_ship(origin, length, orientation)?;
            self.advance_placement();
        }
        Ok(())
    }

    fn advance_placement(&mut self) {
        self.placing += 1;
        if self.placing == NUM_SHIPS {
            debug!("player fleet placed, battle starts");
            self.phase = Phase::Playing;
        }
    }

    /// Fire at the computer's board. Unless that sinks the last computer ship,
    /// the computer fires back immediately.
    pub fn fire(&mut self, target: Coordinate) -> Result<Round, GameError> {
        if self.phase != Phase::Playing {
            return Err(GameError::NotPlaying);
        }
        if !target.is_in_bounds() {
            return Err(GameError::OutOfBounds(target));
        }
        if self.computer_board.is_attacked(target) {
            return Err(GameError::AlreadyAttacked(target));
        }
        let player = shoot(&mut self.computer_board, target);
        info!("player {}", player);
        if self.computer_board.all_destroyed() {
            self.phase = Phase::GameOver(Winner::Player);
            return Ok(Round {
                player,
                computer: None,
            });
        }

        let aim = self.strategy.select_move(&self.player_board, &mut self.rng);
        let computer = shoot(&mut self.player_board, aim);
        info!("computer {}", computer);
        if self.player_board.all_destroyed() {
            self.phase = Phase::GameOver(Winner::Computer);
        }
        Ok(Round {
            player,
            computer: Some(computer),
        })
    }
}

fn shoot(board: &mut Board, target: Coordinate) -> Shot {
    let hit = board.mark_coordinate(target);
    Shot {
        target,
        hit,
        destroyed: hit && board.cell_at(target).is_ship_destroyed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use rand::SeedableRng;

    #[test]
    fn failed_restart_keeps_running_game() {
        let mut game = Game::new(Difficulty::Normal, SmallRng::seed_from_u64(12)).unwrap();
        game.place_remaining_randomly().unwrap();
        game.fire(Coordinate::new(4, 4)).unwrap();
        let computer_ships: Vec<_> = game.computer_board().ships().to_vec();
        let player_ships: Vec<_> = game.player_board().ships().to_vec();
        let remaining = game.strategy.remaining_moves();

        // 26 separated single squares never fit
        let err = game.restart_with_fleet(&[1; 26]).unwrap_err();
        assert!(matches!(err, BoardError::PlacementExhausted { .. }));
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.computer_board().ships(), &computer_ships[..]);
        assert_eq!(game.player_board().ships(), &player_ships[..]);
        assert!(game.computer_board().is_attacked(Coordinate::new(4, 4)));
        assert_eq!(game.strategy.remaining_moves(), remaining);
    }
}

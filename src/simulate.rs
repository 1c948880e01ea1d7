//! Headless games of a computer strategy against a random fleet, used to
//! compare difficulties.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::common::BoardError;
use crate::strategy::Difficulty;

/// Number of shots `difficulty` needs to destroy a randomly placed fleet.
/// The same `seed` always yields the same fleet and the same shots.
pub fn shots_to_clear(difficulty: Difficulty, seed: u64) -> Result<usize, BoardError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_fleet_randomly(&mut rng)?;
    let mut strategy = difficulty.strategy(&mut rng);
    let mut shots = 0;
    while !board.all_destroyed() {
        let target = strategy.select_move(&board, &mut rng);
        board.mark_coordinate(target);
        shots += 1;
    }
    Ok(shots)
}

/// Aggregate over a batch of games.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BatchSummary {
    pub difficulty: Difficulty,
    pub games: usize,
    pub mean_shots: f64,
    pub min_shots: usize,
    pub max_shots: usize,
}

/// Play `games` games, game `i` seeded with `seed + i`.
pub fn run_batch(difficulty: Difficulty, games: usize, seed: u64) -> Result<BatchSummary, BoardError> {
    let mut total = 0usize;
    let mut min_shots = usize::MAX;
    let mut max_shots = 0usize;
    for i in 0..games {
        let shots = shots_to_clear(difficulty, seed.wrapping_add(i as u64))?;
        total += shots;
        min_shots = min_shots.min(shots);
        max_shots = max_shots.max(shots);
    }
    if games == 0 {
        min_shots = 0;
    }
    Ok(BatchSummary {
        difficulty,
        games,
        mean_shots: if games == 0 {
            0.0
        } else {
            total as f64 / games as f64
        },
        min_shots,
        max_shots,
    })
}

//! Computer opponents: a purely random searcher and the hunt/target searcher
//! with its two optional heuristics.

use alloc::boxed::Box;
use alloc::vec::Vec;

use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::board::{BoardView, BB};
use crate::config::CELL_COUNT;
use crate::coordinate::{Coordinate, Direction};

/// Interface implemented by every computer opponent.
pub trait Strategy: Send {
    /// Choose the next square to attack on `board`. The returned square is
    /// never offered again until [`Strategy::reset`].
    ///
    /// # Panics
    /// If every square has already been selected.
    fn select_move(&mut self, board: &dyn BoardView, rng: &mut SmallRng) -> Coordinate;

    /// Forget all history and start a new game.
    fn reset(&mut self, rng: &mut SmallRng);

    /// Number of squares not yet selected.
    fn remaining_moves(&self) -> usize;
}

/// Squares a strategy has not selected yet, in a fixed shuffled order.
///
/// Membership lives in a bitboard so lookups and removals are constant time;
/// removed squares stay in `order` and are skipped when iterating.
#[derive(Clone, Debug)]
pub struct MovePool {
    order: Vec<Coordinate>,
    cursor: usize,
    available: BB,
}

impl MovePool {
    /// Every square of the grid in random order.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut order: Vec<Coordinate> = Coordinate::all().collect();
        order.shuffle(rng);
        Self::from_order(order)
    }

    /// Pool holding exactly `order`, iterated in that order.
    pub fn from_order(order: Vec<Coordinate>) -> Self {
        let available = order.iter().copied().collect();
        Self {
            order,
            cursor: 0,
            available,
        }
    }

    pub fn len(&self) -> usize {
        self.available.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.available.contains(coord)
    }

    /// Next square in pool order.
    pub fn first(&self) -> Option<Coordinate> {
        self.iter().next()
    }

    /// Remaining squares in pool order.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.order[self.cursor..]
            .iter()
            .copied()
            .filter(|&c| self.available.contains(c))
    }

    /// Drop `coord` from the pool. Returns `true` if it was present.
    pub fn remove(&mut self, coord: Coordinate) -> bool {
        let removed = self.available.remove(coord);
        while self.cursor < self.order.len() && !self.available.contains(self.order[self.cursor]) {
            self.cursor += 1;
        }
        removed
    }
}

/// Lowest difficulty: fires at squares in shuffled order and ignores results.
#[derive(Clone, Debug)]
pub struct RandomSearch {
    pool: MovePool,
}

impl RandomSearch {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            pool: MovePool::shuffled(rng),
        }
    }
}

impl Strategy for RandomSearch {
    fn select_move(&mut self, _board: &dyn BoardView, _rng: &mut SmallRng) -> Coordinate {
        let next = self
            .pool
            .first()
            .unwrap_or_else(|| panic!("random search has no squares left to attack"));
        self.pool.remove(next);
        trace!("random search fires at {}", next);
        next
    }

    fn reset(&mut self, rng: &mut SmallRng) {
        self.pool = MovePool::shuffled(rng);
    }

    fn remaining_moves(&self) -> usize {
        self.pool.len()
    }
}

/// Optional heuristics of [`HuntTarget`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrategyConfig {
    /// In target mode, prefer a square that lines up with two pending hits.
    pub prefer_line_forming: bool,
    /// In hunt mode, prefer squares with the most unattacked neighbours
    /// instead of plain shuffled order.
    pub maximize_adjacent_randomization: bool,
}

/// Search phase of a [`HuntTarget`], derived from its pending hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No unresolved hits; explore.
    Hunt,
    /// At least one hit on a ship that is not fully hit yet.
    Target,
}

/// Direction order for the line-forming check.
const LINE_CHECK_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Down,
    Direction::Up,
];

/// Hunt/target searcher.
///
/// While no ship is partially hit it hunts: it takes the next square of its
/// shuffled pool, or with `maximize_adjacent_randomization` the square with the
/// most unattacked neighbours. After a hit it targets the neighbours of all
/// pending hits until every square of the hit ship has been found.
#[derive(Clone, Debug)]
pub struct HuntTarget {
    config: StrategyConfig,
    pool: MovePool,
    pending: Vec<Coordinate>,
}

impl HuntTarget {
    pub fn new<R: Rng>(config: StrategyConfig, rng: &mut R) -> Self {
        Self {
            config,
            pool: MovePool::shuffled(rng),
            pending: Vec::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        if self.pending.is_empty() {
            Mode::Hunt
        } else {
            Mode::Target
        }
    }

    /// Hits on ships not yet fully located, oldest first.
    pub fn pending_hits(&self) -> &[Coordinate] {
        &self.pending
    }

    pub fn pool(&self) -> &MovePool {
        &self.pool
    }

    /// Unselected neighbours of pending hits, first-seen order, no repeats.
    fn target_candidates(&self) -> Vec<Coordinate> {
        let mut seen = BB::new();
        let mut candidates = Vec::new();
        for &hit in &self.pending {
            for n in hit.neighbors() {
                if self.pool.contains(n) && seen.insert(n) {
                    candidates.push(n);
                }
            }
        }
        candidates
    }

    fn extends_line(&self, coord: Coordinate, dir: Direction) -> bool {
        self.pending.contains(&coord.step(dir, 1)) && self.pending.contains(&coord.step(dir, 2))
    }

    fn pick_target(&self, rng: &mut SmallRng) -> Option<Coordinate> {
        let candidates = self.target_candidates();
        if self.config.prefer_line_forming {
            let in_line = candidates
                .iter()
                .copied()
                .find(|&c| LINE_CHECK_ORDER.iter().any(|&d| self.extends_line(c, d)));
            if let Some(c) = in_line {
                trace!("line-forming target {}", c);
                return Some(c);
            }
        }
        candidates.choose(rng).copied()
    }

    fn pick_hunt(&self, board: &dyn BoardView) -> Coordinate {
        let first = self
            .pool
            .first()
            .unwrap_or_else(|| panic!("hunt/target search has no squares left to attack"));
        if !self.config.maximize_adjacent_randomization {
            return first;
        }
        let mut best = first;
        let mut best_open = None;
        for c in self.pool.iter() {
            let open = c.neighbors().filter(|&n| !board.is_attacked(n)).count();
            if open == 4 {
                return c;
            }
            if best_open.map_or(true, |b| open > b) {
                best_open = Some(open);
                best = c;
            }
        }
        best
    }

    /// Track hits by square: once every square of the hit ship is pending,
    /// that ship is resolved and its squares leave the pending list.
    fn record_outcome(&mut self, board: &dyn BoardView, coord: Coordinate) {
        let cell = board.cell_at(coord);
        let Some(ship) = cell.ship() else {
            return;
        };
        if self.pending.is_empty() {
            debug!("hit at {}, switching to target mode", coord);
        }
        self.pending.push(coord);
        let squares: Vec<Coordinate> = ship.occupied_coordinates().collect();
        if squares.iter().all(|s| self.pending.contains(s)) {
            self.pending.retain(|p| !squares.contains(p));
            debug!(
                "ship of length {} at {} fully hit, {} hits still pending",
                ship.length(),
                ship.origin(),
                self.pending.len()
            );
            if self.pending.is_empty() {
                debug!("no pending hits, back to hunt mode");
            }
        }
    }
}

impl Strategy for HuntTarget {
    fn select_move(&mut self, board: &dyn BoardView, rng: &mut SmallRng) -> Coordinate {
        let choice = match self.mode() {
            Mode::Target => self
                .pick_target(rng)
                .unwrap_or_else(|| self.pick_hunt(board)),
            Mode::Hunt => self.pick_hunt(board),
        };
        self.record_outcome(board, choice);
        self.pool.remove(choice);
        trace!("{:?} mode fires at {}", self.mode(), choice);
        choice
    }

    fn reset(&mut self, rng: &mut SmallRng) {
        self.pool = MovePool::shuffled(rng);
        self.pending.clear();
        debug_assert_eq!(self.pool.len(), CELL_COUNT);
    }

    fn remaining_moves(&self) -> usize {
        self.pool.len()
    }
}

/// Opponent strength offered to the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// [`RandomSearch`].
    Easy,
    /// [`HuntTarget`] without heuristics.
    #[default]
    Normal,
    /// [`HuntTarget`] with line forming and adjacency maximisation.
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Build a fresh opponent of this strength.
    pub fn strategy<R: Rng>(self, rng: &mut R) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(RandomSearch::new(rng)),
            Difficulty::Normal => Box::new(HuntTarget::new(StrategyConfig::default(), rng)),
            Difficulty::Hard => Box::new(HuntTarget::new(
                StrategyConfig {
                    prefer_line_forming: true,
                    maximize_adjacent_randomization: true,
                },
                rng,
            )),
        }
    }
}

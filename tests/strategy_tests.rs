use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    Board, Coordinate, Difficulty, HuntTarget, Mode, Orientation, RandomSearch, Strategy,
    StrategyConfig, CELL_COUNT,
};

fn configs() -> [StrategyConfig; 4] {
    let mut out = [StrategyConfig::default(); 4];
    for (i, cfg) in out.iter_mut().enumerate() {
        cfg.prefer_line_forming = i & 1 != 0;
        cfg.maximize_adjacent_randomization = i & 2 != 0;
    }
    out
}

/// Let `strategy` fire until the board's fleet is gone, marking as it goes.
fn play_out(strategy: &mut dyn Strategy, board: &mut Board, rng: &mut SmallRng) -> Vec<Coordinate> {
    let mut shots = Vec::new();
    while !board.all_destroyed() {
        let c = strategy.select_move(&*board, rng);
        assert!(!board.is_attacked(c), "strategy repeated {:?}", c);
        board.mark_coordinate(c);
        shots.push(c);
    }
    shots
}

#[test]
fn test_hundred_moves_cover_grid_once() {
    for (i, cfg) in configs().into_iter().enumerate() {
        let mut rng = SmallRng::seed_from_u64(i as u64);
        let mut board = Board::new();
        let mut ai = HuntTarget::new(cfg, &mut rng);
        let mut seen = HashSet::new();
        for _ in 0..CELL_COUNT {
            let c = ai.select_move(&board, &mut rng);
            assert!(c.is_in_bounds());
            board.mark_coordinate(c);
            assert!(seen.insert(c), "{:?} selected twice", c);
        }
        assert_eq!(seen.len(), CELL_COUNT);
        assert_eq!(ai.remaining_moves(), 0);
    }
}

#[test]
fn test_random_search_covers_grid_once() {
    let mut rng = SmallRng::seed_from_u64(11);
    let board = Board::new();
    let mut ai = RandomSearch::new(&mut rng);
    let seen: HashSet<Coordinate> = (0..CELL_COUNT)
        .map(|_| ai.select_move(&board, &mut rng))
        .collect();
    assert_eq!(seen.len(), CELL_COUNT);
}

#[test]
#[should_panic(expected = "no squares left")]
fn test_select_after_exhaustion_panics() {
    let mut rng = SmallRng::seed_from_u64(2);
    let board = Board::new();
    let mut ai = RandomSearch::new(&mut rng);
    for _ in 0..=CELL_COUNT {
        ai.select_move(&board, &mut rng);
    }
}

#[test]
fn test_hit_switches_to_target_and_back() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut board = Board::new();
    board
        .place_ship(Coordinate::new(4, 4), 2, Orientation::Horizontal)
        .unwrap();
    let mut ai = HuntTarget::new(StrategyConfig::default(), &mut rng);
    assert_eq!(ai.mode(), Mode::Hunt);

    let mut hits = 0;
    while hits < 2 {
        let c = ai.select_move(&board, &mut rng);
        if board.mark_coordinate(c) {
            hits += 1;
            if hits == 1 {
                assert_eq!(ai.mode(), Mode::Target);
                assert_eq!(ai.pending_hits(), &[c]);
            }
        } else if hits == 1 {
            // misses in target mode stay next to the first hit
            let first = ai.pending_hits()[0];
            assert!(first.neighbors().any(|n| n == c));
        }
    }
    assert!(board.all_destroyed());
    assert_eq!(ai.mode(), Mode::Hunt);
    assert!(ai.pending_hits().is_empty());
}

#[test]
fn test_reset_restores_full_pool() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut board = Board::new();
    board.place_fleet_randomly(&mut rng).unwrap();
    let mut ai = HuntTarget::new(StrategyConfig::default(), &mut rng);
    for _ in 0..30 {
        let c = ai.select_move(&board, &mut rng);
        board.mark_coordinate(c);
    }
    ai.reset(&mut rng);
    assert_eq!(ai.remaining_moves(), CELL_COUNT);
    assert_eq!(ai.pool().len(), CELL_COUNT);
    assert!(ai.pending_hits().is_empty());
    assert_eq!(ai.mode(), Mode::Hunt);
}

#[test]
fn test_same_seed_same_moves() {
    let run = || {
        let mut rng = SmallRng::seed_from_u64(77);
        let mut board = Board::new();
        board.place_fleet_randomly(&mut rng).unwrap();
        let mut ai = Difficulty::Hard.strategy(&mut rng);
        play_out(ai.as_mut(), &mut board, &mut rng)
    };
    assert_eq!(run(), run());
}

#[test]
fn test_sink_detection_uses_coordinates_only() {
    // two touching-free ships in a row; the first one resolves on its own
    let mut rng = SmallRng::seed_from_u64(21);
    let mut board = Board::new();
    board
        .place_ship(Coordinate::new(0, 0), 3, Orientation::Vertical)
        .unwrap();
    board
        .place_ship(Coordinate::new(0, 4), 1, Orientation::Vertical)
        .unwrap();
    let mut ai = HuntTarget::new(
        StrategyConfig {
            prefer_line_forming: true,
            maximize_adjacent_randomization: false,
        },
        &mut rng,
    );
    play_out(&mut ai, &mut board, &mut rng);
    assert!(ai.pending_hits().is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn every_configuration_clears_a_fleet(seed in any::<u64>()) {
        for cfg in configs() {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut board = Board::new();
            board.place_fleet_randomly(&mut rng).unwrap();
            let mut ai = HuntTarget::new(cfg, &mut rng);
            let shots = play_out(&mut ai, &mut board, &mut rng);
            prop_assert!(shots.len() <= CELL_COUNT);
            prop_assert!(ai.pending_hits().is_empty());
            prop_assert_eq!(ai.mode(), Mode::Hunt);
        }
    }

    #[test]
    fn pending_hits_are_unresolved_ship_squares(seed in any::<u64>(), turns in 1usize..80) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.place_fleet_randomly(&mut rng).unwrap();
        let mut ai = HuntTarget::new(StrategyConfig::default(), &mut rng);
        for _ in 0..turns {
            if board.all_destroyed() {
                break;
            }
            let c = ai.select_move(&board, &mut rng);
            board.mark_coordinate(c);
        }
        for &p in ai.pending_hits() {
            let cell = board.cell_at(p);
            prop_assert!(cell.is_hit());
            prop_assert!(!cell.is_ship_destroyed());
        }
    }
}

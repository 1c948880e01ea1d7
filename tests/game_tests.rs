use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    Coordinate, Difficulty, Game, GameError, Orientation, Phase, Winner, FLEET, NUM_SHIPS,
};

fn new_game(seed: u64) -> Game {
    Game::new(Difficulty::Hard, SmallRng::seed_from_u64(seed)).unwrap()
}

#[test]
fn test_new_game_starts_in_placement() {
    let game = new_game(1);
    assert_eq!(game.phase(), Phase::PlacingShips);
    assert_eq!(game.computer_board().ships().len(), NUM_SHIPS);
    assert!(game.player_board().ships().is_empty());

    let preview = game.preview().unwrap();
    assert_eq!(preview.index, 0);
    assert_eq!(preview.length, FLEET[0]);
    assert_eq!(preview.orientation, Orientation::Horizontal);
    assert!(preview.valid);
}

#[test]
fn test_preview_is_clamped_onto_grid() {
    let mut game = new_game(2);
    let preview = game.move_preview(Coordinate::new(9, 9)).unwrap();
    assert_eq!(preview.origin, Coordinate::new(6, 9));
    let flipped = game.flip_preview().unwrap();
    assert_eq!(flipped.orientation, Orientation::Vertical);
    assert_eq!(flipped.origin, Coordinate::new(9, 6));
}

#[test]
fn test_manual_placement_advances_and_rejects_contact() {
    let mut game = new_game(3);
    game.place_preview(Coordinate::new(0, 0)).unwrap();
    let next = game.preview().unwrap();
    assert_eq!(next.index, 1);
    assert_eq!(next.length, FLEET[1]);

    // touching the first ship diagonally
    let err = game.place_preview(Coordinate::new(4, 1)).unwrap_err();
    assert!(matches!(err, GameError::Board(_)));
    assert_eq!(game.preview().unwrap().index, 1);
    assert!(!game.move_preview(Coordinate::new(4, 1)).unwrap().valid);
}

#[test]
fn test_cannot_fire_while_placing() {
    let mut game = new_game(4);
    assert_eq!(
        game.fire(Coordinate::new(0, 0)).unwrap_err(),
        GameError::NotPlaying
    );
}

#[test]
fn test_random_placement_finishes_setup() {
    let mut game = new_game(5);
    game.place_preview(Coordinate::new(0, 0)).unwrap();
    game.place_remaining_randomly().unwrap();
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.player_board().ships().len(), NUM_SHIPS);
    assert!(game.preview().is_none());
    assert_eq!(
        game.place_remaining_randomly().unwrap_err(),
        GameError::NotPlacing
    );
}

#[test]
fn test_fire_reports_both_shots() {
    let mut game = new_game(6);
    game.place_remaining_randomly().unwrap();
    let target = Coordinate::new(3, 3);
    let round = game.fire(target).unwrap();
    assert_eq!(round.player.target, target);
    assert_eq!(
        round.player.hit,
        game.computer_board().cell_at(target).is_occupied()
    );
    let answer = round.computer.unwrap();
    assert!(game.player_board().is_attacked(answer.target));

    assert_eq!(
        game.fire(target).unwrap_err(),
        GameError::AlreadyAttacked(target)
    );
    assert_eq!(
        game.fire(Coordinate::new(10, 0)).unwrap_err(),
        GameError::OutOfBounds(Coordinate::new(10, 0))
    );
}

#[test]
fn test_game_runs_to_completion() {
    let mut game = new_game(7);
    game.place_remaining_randomly().unwrap();
    let mut targets = Coordinate::all();
    while game.phase() == Phase::Playing {
        let target = targets.next().expect("grid exhausted before game over");
        let round = game.fire(target).unwrap();
        if round.computer.is_none() {
            assert_eq!(game.phase(), Phase::GameOver(Winner::Player));
        }
    }
    match game.phase() {
        Phase::GameOver(Winner::Player) => assert!(game.computer_board().all_destroyed()),
        Phase::GameOver(Winner::Computer) => assert!(game.player_board().all_destroyed()),
        other => panic!("unexpected phase {:?}", other),
    }
    assert!(game.fire(Coordinate::new(9, 9)).is_err());
}

#[test]
fn test_reset_starts_over() {
    let mut game = new_game(8);
    game.place_remaining_randomly().unwrap();
    game.fire(Coordinate::new(0, 0)).unwrap();
    game.reset().unwrap();
    assert_eq!(game.phase(), Phase::PlacingShips);
    assert!(game.player_board().ships().is_empty());
    assert!(game.computer_board().attacked_squares().is_empty());
    assert_eq!(game.computer_board().ships().len(), NUM_SHIPS);
}

#[test]
fn test_destroyed_flag_in_shot() {
    let mut game = new_game(9);
    game.place_remaining_randomly().unwrap();
    // find a single-deck computer ship and sink it
    let single = game
        .computer_board()
        .ships()
        .iter()
        .find(|s| s.length() == 1)
        .map(|s| s.origin())
        .unwrap();
    let round = game.fire(single).unwrap();
    assert!(round.player.hit);
    assert!(round.player.destroyed);
    assert!(round.player.to_string().ends_with("(destroyed)"));
}

use battleships::{BoardSide, Game, GameManager, Orientation};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SIDE: BoardSide = BoardSide::PlayerOne;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

/// A default game with up to 20 random placement attempts applied to
/// player one's board. Failed attempts are simply dropped.
fn random_game(seed: u64) -> (GameManager, Game) {
    let manager = GameManager::new();
    let mut game = manager.create_game("one", "two");
    let mut rng = SmallRng::seed_from_u64(seed);
    for _ in 0..20 {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let x = rng.random_range(0..10);
        let y = rng.random_range(0..10);
        let length = rng.random_range(1..=5);
        let _ = manager.add_ship(&mut game, SIDE, x, y, orientation, length);
    }
    (manager, game)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// On an empty default board, placement succeeds exactly when the length
    /// is within 1..=5 and every segment lies on the board.
    #[test]
    fn placement_matches_bounds_and_containment(
        x in -2..12i32,
        y in -2..12i32,
        length in -1..8i32,
        orientation in orientation(),
    ) {
        let manager = GameManager::new();
        let mut game = manager.create_game("one", "two");
        let (last_x, last_y) = orientation.offset(x, y, length - 1);
        let expected = (1..=5).contains(&length)
            && x >= 0
            && y >= 0
            && last_x < 10
            && last_y < 10;
        let added = manager.add_ship(&mut game, SIDE, x, y, orientation, length);
        prop_assert_eq!(added, expected);
        prop_assert_eq!(game.board(SIDE).ships().len(), expected as usize);
    }

    /// A rejected placement never mutates the game; an accepted one appends
    /// exactly one ship.
    #[test]
    fn failed_placement_leaves_game_unchanged(
        seed in any::<u64>(),
        x in -2..12i32,
        y in -2..12i32,
        length in -1..8i32,
        orientation in orientation(),
    ) {
        let (manager, mut game) = random_game(seed);
        let before = game.clone();
        let added = manager.add_ship(&mut game, SIDE, x, y, orientation, length);
        if added {
            prop_assert_eq!(
                game.board(SIDE).ships().len(),
                before.board(SIDE).ships().len() + 1
            );
            prop_assert_eq!(&game.board(SIDE).ships()[..before.board(SIDE).ships().len()],
                before.board(SIDE).ships());
        } else {
            prop_assert_eq!(&game, &before);
        }
    }

    /// Attacking the same cell twice yields the same result and the same
    /// board state both times.
    #[test]
    fn attack_idempotent(seed in any::<u64>(), x in 0..10i32, y in 0..10i32) {
        let (manager, mut game) = random_game(seed);
        let first = manager.attack(&mut game, SIDE, x, y);
        let state = game.clone();
        let second = manager.attack(&mut game, SIDE, x, y);
        prop_assert_eq!(first, second);
        prop_assert_eq!(&game, &state);
    }

    /// A lone ship sinks exactly on the hit that strikes its final
    /// unhit segment, in whatever order the segments are attacked.
    #[test]
    fn ship_sinks_exactly_on_last_segment(
        seed in any::<u64>(),
        length in 1..=5i32,
        orientation in orientation(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let manager = GameManager::new();
        let mut game = manager.create_game("one", "two");
        let x = rng.random_range(0..=(10 - length));
        let y = rng.random_range(0..=(10 - length));
        prop_assert!(manager.add_ship(&mut game, SIDE, x, y, orientation, length));

        let mut cells: Vec<(i32, i32)> =
            (0..length).map(|i| orientation.offset(x, y, i)).collect();
        cells.shuffle(&mut rng);
        for (i, (cx, cy)) in cells.iter().enumerate() {
            let last = i == cells.len() - 1;
            let result = manager.attack(&mut game, SIDE, *cx, *cy);
            prop_assert!(result.is_hit);
            prop_assert_eq!(result.is_ship_sunk, last);
            prop_assert_eq!(result.is_game_over, last);
            prop_assert_eq!(game.board(SIDE).ships()[0].is_sunk(), last);
        }
    }

    /// Sweeping every cell of the board: each hit reports game-over exactly
    /// when the whole board is sunk, and the hit count equals the number of
    /// placed segments.
    #[test]
    fn game_over_iff_all_ships_sunk(seed in any::<u64>()) {
        let (manager, mut game) = random_game(seed);
        let segment_count: usize = game
            .board(SIDE)
            .ships()
            .iter()
            .map(|ship| ship.length())
            .sum();

        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        let mut cells: Vec<(i32, i32)> = (0..10)
            .flat_map(|x| (0..10).map(move |y| (x, y)))
            .collect();
        cells.shuffle(&mut rng);

        let mut hits = 0;
        for (x, y) in cells {
            let result = manager.attack(&mut game, SIDE, x, y);
            if result.is_hit {
                hits += 1;
            }
            prop_assert_eq!(
                result.is_game_over,
                result.is_hit && game.board(SIDE).all_ships_sunk()
            );
        }
        prop_assert_eq!(hits, segment_count);
        prop_assert!(game.board(SIDE).all_ships_sunk());
    }
}

use anyhow::{bail, Result};
use battleships::{init_logging, BoardSide, Game, GameConfig, GameManager, Orientation};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::json;

/// Play out a random game between two players and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fix player one's RNG seed for reproducible games.
    #[arg(long)]
    seed1: Option<u64>,
    /// Fix player two's RNG seed for reproducible games.
    #[arg(long)]
    seed2: Option<u64>,
    /// Board width and height in cells.
    #[arg(long, default_value_t = 10)]
    board_size: i32,
}

/// Classic fleet: carrier, battleship, cruiser, submarine, destroyer.
const FLEET: [i32; 5] = [5, 4, 3, 3, 2];

/// Place the fleet on `side` by rejection sampling random placements.
fn place_fleet(
    manager: &GameManager,
    game: &mut Game,
    side: BoardSide,
    rng: &mut SmallRng,
) -> Result<()> {
    let width = game.board(side).width();
    let height = game.board(side).height();
    for length in FLEET {
        let mut attempts = 0;
        loop {
            attempts += 1;
            if attempts > 1000 {
                bail!("unable to place ship of length {} on {:?}", length, side);
            }
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let x = rng.random_range(0..width);
            let y = rng.random_range(0..height);
            if manager.add_ship(game, side, x, y, orientation, length) {
                break;
            }
        }
    }
    Ok(())
}

/// Every board coordinate in a random order, used as an attack queue.
fn target_queue(width: i32, height: i32, rng: &mut SmallRng) -> Vec<(i32, i32)> {
    let mut targets: Vec<(i32, i32)> = (0..width)
        .flat_map(|x| (0..height).map(move |y| (x, y)))
        .collect();
    targets.shuffle(rng);
    targets
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut seed_rng = rand::rng();
    let seed1 = cli.seed1.unwrap_or_else(|| seed_rng.random());
    let seed2 = cli.seed2.unwrap_or_else(|| seed_rng.random());
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let manager = GameManager::new();
    let config = GameConfig {
        board_width: cli.board_size,
        board_height: cli.board_size,
        ..GameConfig::default()
    };
    let mut game = manager.create_game_with("Player One", "Player Two", config);

    place_fleet(&manager, &mut game, BoardSide::PlayerOne, &mut rng1)?;
    place_fleet(&manager, &mut game, BoardSide::PlayerTwo, &mut rng2)?;

    let mut queue1 = target_queue(cli.board_size, cli.board_size, &mut rng1);
    let mut queue2 = target_queue(cli.board_size, cli.board_size, &mut rng2);

    let mut attacks = [0usize; 2];
    let mut hits = [0usize; 2];

    // Alternate attacks until one fleet is fully sunk. Turn order is the
    // simulation's choice; the engine does not enforce one.
    let mut attacker = BoardSide::PlayerOne;
    let winner = loop {
        let (queue, index) = match attacker {
            BoardSide::PlayerOne => (&mut queue1, 0),
            BoardSide::PlayerTwo => (&mut queue2, 1),
        };
        let Some((x, y)) = queue.pop() else {
            bail!("target queue exhausted before the game ended");
        };
        attacks[index] += 1;
        let result = manager.attack(&mut game, attacker.opponent(), x, y);
        if result.is_hit {
            hits[index] += 1;
            log::debug!("{:?} hit at ({}, {})", attacker, x, y);
        }
        if result.is_ship_sunk {
            log::info!("{:?} sank a ship at ({}, {})", attacker, x, y);
        }
        if result.is_game_over {
            break attacker;
        }
        attacker = attacker.opponent();
    };

    let winner_name = match winner {
        BoardSide::PlayerOne => game.player_one().name(),
        BoardSide::PlayerTwo => game.player_two().name(),
    };
    let summary = json!({
        "player1": {"name": game.player_one().name(), "attacks": attacks[0], "hits": hits[0]},
        "player2": {"name": game.player_two().name(), "attacks": attacks[1], "hits": hits[1]},
        "winner": winner_name,
        "seeds": [seed1, seed2],
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

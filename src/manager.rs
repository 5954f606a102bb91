//! Stateless service that creates games, places ships, and resolves attacks.

use crate::common::{AttackResult, PlacementError};
use crate::config::GameConfig;
use crate::game::{BoardSide, Game};
use crate::ship::Orientation;

/// Management service for game state. Holds no state of its own; every
/// operation acts on a caller-owned [`Game`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GameManager;

impl GameManager {
    pub fn new() -> Self {
        GameManager
    }

    /// Create a new game with the default 10x10 boards and ship lengths 1-5.
    pub fn create_game(&self, player_one_name: &str, player_two_name: &str) -> Game {
        self.create_game_with(player_one_name, player_two_name, GameConfig::default())
    }

    /// Create a new game with explicit board dimensions and length bounds.
    /// Pure construction: `config` is not validated and the call always
    /// succeeds.
    pub fn create_game_with(
        &self,
        player_one_name: &str,
        player_two_name: &str,
        config: GameConfig,
    ) -> Game {
        Game::new(player_one_name, player_two_name, config)
    }

    /// Add a ship of `length` segments to the board on `side`, starting at
    /// `(x, y)` and extending along `orientation`. Returns `true` if the ship
    /// was placed; `false` leaves the board exactly as it was.
    pub fn add_ship(
        &self,
        game: &mut Game,
        side: BoardSide,
        x: i32,
        y: i32,
        orientation: Orientation,
        length: i32,
    ) -> bool {
        self.try_add_ship(game, side, x, y, orientation, length)
            .is_ok()
    }

    /// [`add_ship`](Self::add_ship) with the rejection reason reported.
    pub fn try_add_ship(
        &self,
        game: &mut Game,
        side: BoardSide,
        x: i32,
        y: i32,
        orientation: Orientation,
        length: i32,
    ) -> Result<(), PlacementError> {
        if length < game.min_ship_length() || length > game.max_ship_length() {
            return Err(PlacementError::LengthOutOfRange);
        }
        game.board_mut(side).place_ship(x, y, orientation, length)
    }

    /// Attack the board on `side` at `(x, y)`, returning whether the attack
    /// hit, sank the struck ship, and ended the game. Which board to target
    /// is entirely the caller's choice; no turn order is enforced.
    pub fn attack(&self, game: &mut Game, side: BoardSide, x: i32, y: i32) -> AttackResult {
        game.board_mut(side).attack(x, y)
    }
}

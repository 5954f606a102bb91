//! Game and player state: the arena that owns both boards.

use alloc::string::String;

use crate::board::Board;
use crate::config::GameConfig;

/// Addresses one of the two boards owned by a [`Game`]. Engine operations
/// take `(&mut Game, BoardSide)` instead of a raw board reference, so length
/// bounds are always looked up from the owning game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardSide {
    PlayerOne,
    PlayerTwo,
}

impl BoardSide {
    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            BoardSide::PlayerOne => BoardSide::PlayerTwo,
            BoardSide::PlayerTwo => BoardSide::PlayerOne,
        }
    }
}

/// A player: a display name and exclusive ownership of one board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    name: String,
    board: Board,
}

impl Player {
    fn new(name: &str, board: Board) -> Self {
        Self {
            name: String::from(name),
            board,
        }
    }

    /// Player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Player's board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// The state of one game: two players and the inclusive ship-length bounds
/// applied to every placement on either board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    player_one: Player,
    player_two: Player,
    min_ship_length: i32,
    max_ship_length: i32,
}

impl Game {
    pub(crate) fn new(player_one_name: &str, player_two_name: &str, config: GameConfig) -> Self {
        Self {
            player_one: Player::new(
                player_one_name,
                Board::new(config.board_width, config.board_height),
            ),
            player_two: Player::new(
                player_two_name,
                Board::new(config.board_width, config.board_height),
            ),
            min_ship_length: config.min_ship_length,
            max_ship_length: config.max_ship_length,
        }
    }

    pub fn player_one(&self) -> &Player {
        &self.player_one
    }

    pub fn player_two(&self) -> &Player {
        &self.player_two
    }

    /// Minimum length of any ship placed on either board.
    pub fn min_ship_length(&self) -> i32 {
        self.min_ship_length
    }

    /// Maximum length of any ship placed on either board.
    pub fn max_ship_length(&self) -> i32 {
        self.max_ship_length
    }

    /// Board belonging to `side`.
    pub fn board(&self, side: BoardSide) -> &Board {
        match side {
            BoardSide::PlayerOne => &self.player_one.board,
            BoardSide::PlayerTwo => &self.player_two.board,
        }
    }

    pub(crate) fn board_mut(&mut self, side: BoardSide) -> &mut Board {
        match side {
            BoardSide::PlayerOne => &mut self.player_one.board,
            BoardSide::PlayerTwo => &mut self.player_two.board,
        }
    }
}

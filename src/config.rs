//! Default game parameters and the creation-time configuration value.

pub const DEFAULT_BOARD_WIDTH: i32 = 10;
pub const DEFAULT_BOARD_HEIGHT: i32 = 10;
pub const DEFAULT_MIN_SHIP_LENGTH: i32 = 1;
pub const DEFAULT_MAX_SHIP_LENGTH: i32 = 5;

/// Board dimensions and ship-length bounds applied when creating a game.
///
/// None of the fields are validated: non-positive dimensions or
/// `min_ship_length > max_ship_length` are accepted as given and are the
/// caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub board_width: i32,
    pub board_height: i32,
    pub min_ship_length: i32,
    pub max_ship_length: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            min_ship_length: DEFAULT_MIN_SHIP_LENGTH,
            max_ship_length: DEFAULT_MAX_SHIP_LENGTH,
        }
    }
}

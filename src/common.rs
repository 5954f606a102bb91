//! Shared result and error types for the placement and attack engine.

/// Outcome of a single attack on a board.
///
/// `Default` is the miss result: nothing hit, nothing sunk, game not over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    /// Whether the attack struck a ship segment.
    pub is_hit: bool,
    /// Whether the attack sank the struck ship.
    pub is_ship_sunk: bool,
    /// Whether every ship on the attacked board is now sunk.
    pub is_game_over: bool,
}

/// Reasons a ship placement can be rejected.
///
/// The primary placement contract is boolean; this enum is the additive
/// reason-reporting extension surfaced by `try_add_ship`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Ship length falls outside the game's inclusive length bounds.
    LengthOutOfRange,
    /// A segment would fall outside the board.
    OutOfBounds,
    /// A segment would occupy a cell already owned by another ship.
    Overlap,
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::LengthOutOfRange => {
                write!(f, "Ship length is outside the game's length bounds")
            }
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Overlap => write!(f, "Ship placement overlaps with another ship"),
        }
    }
}

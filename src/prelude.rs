//! Commonly used types and utilities for ease of import.

pub use crate::{
    AttackResult, Board, BoardSide, Game, GameConfig, GameManager, Orientation, PlacementError,
    Player, Ship, ShipSegment,
};

#[cfg(feature = "std")]
pub use crate::init_logging;

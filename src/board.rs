//! Board state: dimensions, placed ships, and the placement/attack rules.

use alloc::vec::Vec;

use crate::common::{AttackResult, PlacementError};
use crate::ship::{Orientation, Ship, ShipSegment};

/// A single player's board. Dimensions are fixed at creation; ships are
/// appended in placement order and never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    width: i32,
    height: i32,
    ships: Vec<Ship>,
}

impl Board {
    pub(crate) fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ships: Vec::new(),
        }
    }

    /// Board width in cells.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Whether `(x, y)` lies inside the board.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Returns `true` when every ship on the board is sunk. Vacuously `true`
    /// for a board with no ships.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    fn has_segment_at(&self, x: i32, y: i32) -> bool {
        self.ships.iter().any(|ship| ship.contains(x, y))
    }

    /// Build and append a ship starting at `(x, y)`, stepping one cell per
    /// segment along `orientation`. All-or-nothing: the first segment that is
    /// out of bounds or overlaps an existing ship rejects the whole placement
    /// and leaves the board untouched. Length bounds are checked by the caller.
    pub(crate) fn place_ship(
        &mut self,
        x: i32,
        y: i32,
        orientation: Orientation,
        length: i32,
    ) -> Result<(), PlacementError> {
        let mut segments = Vec::with_capacity(length.max(0) as usize);
        for i in 0..length {
            let (sx, sy) = orientation.offset(x, y, i);
            if !self.contains(sx, sy) {
                return Err(PlacementError::OutOfBounds);
            }
            if self.has_segment_at(sx, sy) {
                return Err(PlacementError::Overlap);
            }
            segments.push(ShipSegment::new(sx, sy));
        }
        self.ships.push(Ship::new(orientation, segments));
        Ok(())
    }

    /// Resolve an attack at `(x, y)`. A miss leaves the board untouched and
    /// returns the all-false result; a hit marks the segment, refreshes the
    /// owning ship's sunk flag, and reports whether the whole board is now
    /// sunk. Re-attacking the same cell yields the same result both times.
    pub(crate) fn attack(&mut self, x: i32, y: i32) -> AttackResult {
        let Some(index) = self.ships.iter().position(|ship| ship.contains(x, y)) else {
            return AttackResult::default();
        };
        self.ships[index].mark_hit(x, y);
        AttackResult {
            is_hit: true,
            is_ship_sunk: self.ships[index].is_sunk(),
            is_game_over: self.all_ships_sunk(),
        }
    }
}

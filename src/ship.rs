//! Ship, segment, and orientation types.

use alloc::vec::Vec;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Coordinate of the cell `offset` steps from `(x, y)` along this axis.
    /// Horizontal steps along X, Vertical along Y.
    pub fn offset(self, x: i32, y: i32, offset: i32) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (x + offset, y),
            Orientation::Vertical => (x, y + offset),
        }
    }
}

/// One cell of a placed ship: a fixed board coordinate and its hit flag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipSegment {
    x_index: i32,
    y_index: i32,
    is_hit: bool,
}

impl ShipSegment {
    pub(crate) fn new(x_index: i32, y_index: i32) -> Self {
        Self {
            x_index,
            y_index,
            is_hit: false,
        }
    }

    /// Segment position on the X-axis of the board.
    pub fn x_index(&self) -> i32 {
        self.x_index
    }

    /// Segment position on the Y-axis of the board.
    pub fn y_index(&self) -> i32 {
        self.y_index
    }

    /// Whether this segment has been hit. Never resets once set.
    pub fn is_hit(&self) -> bool {
        self.is_hit
    }

    pub(crate) fn mark_hit(&mut self) {
        self.is_hit = true;
    }
}

/// A ship placed on a board, owning its segments in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    orientation: Orientation,
    segments: Vec<ShipSegment>,
    sunk: bool,
}

impl Ship {
    pub(crate) fn new(orientation: Orientation, segments: Vec<ShipSegment>) -> Self {
        Self {
            orientation,
            segments,
            sunk: false,
        }
    }

    /// Orientation of the ship on its board.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments in placement order. Length is fixed at placement.
    pub fn segments(&self) -> &[ShipSegment] {
        &self.segments
    }

    /// Number of segments.
    pub fn length(&self) -> usize {
        self.segments.len()
    }

    /// Whether every segment has been hit. Recomputed eagerly after each hit,
    /// so a freshly placed ship reports `false` even with zero segments.
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Whether the ship owns a segment at `(x, y)`.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.segments
            .iter()
            .any(|s| s.x_index == x && s.y_index == y)
    }

    /// Mark the segment at `(x, y)` as hit and refresh the sunk flag.
    /// Safe to call again for an already-hit segment.
    pub(crate) fn mark_hit(&mut self, x: i32, y: i32) {
        if let Some(segment) = self
            .segments
            .iter_mut()
            .find(|s| s.x_index == x && s.y_index == y)
        {
            segment.mark_hit();
        }
        self.sunk = self.segments.iter().all(ShipSegment::is_hit);
    }
}

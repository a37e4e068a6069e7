//! # Grid Cells
//!
//! The leaf data entity of the search space.

use super::{GridPos, WorldPos};

/// A single addressable point of the discretized search space.
///
/// Coordinates and world position are fixed when the grid is built. Search
/// bookkeeping is not stored here; every search keeps its own records.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pos: GridPos,
    world: WorldPos,
    /// Whether the search may traverse this cell
    pub walkable: bool,
}

impl GridCell {
    /// Creates a new cell.
    pub fn new(pos: GridPos, world: WorldPos, walkable: bool) -> Self {
        Self {
            pos,
            world,
            walkable,
        }
    }

    /// Grid coordinates of this cell.
    pub fn pos(&self) -> GridPos {
        self.pos
    }

    /// World-space centre of this cell.
    pub fn world(&self) -> WorldPos {
        self.world
    }

    /// Returns true if an obstacle blocks this cell.
    pub fn is_blocked(&self) -> bool {
        !self.walkable
    }
}

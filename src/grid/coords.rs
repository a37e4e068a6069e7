//! # Coordinates
//!
//! World-space and grid-space coordinate types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in continuous world space.
///
/// # Examples
///
/// ```
/// use gridseek::WorldPos;
///
/// let pos = WorldPos::new(1.5, -2.0);
/// assert_eq!(pos + WorldPos::new(0.5, 0.5), WorldPos::new(2.0, -1.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    /// The world origin.
    pub const ZERO: WorldPos = WorldPos { x: 0.0, y: 0.0 };

    /// Creates a new world position.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns true if both components are finite numbers.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Calculates the Euclidean distance to another position.
    pub fn distance(self, other: WorldPos) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::ops::Add for WorldPos {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for WorldPos {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for WorldPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Integer coordinates of a cell within the grid.
///
/// `y` grows upwards, so `(0, 0)` is the bottom-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    /// Creates a new grid position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the 4 axis-aligned neighbours in search order: up, down, right, left.
    ///
    /// Positions outside the grid are included; callers filter them.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridseek::GridPos;
    ///
    /// let around = GridPos::new(2, 2).cardinal_neighbors();
    /// assert_eq!(around[0], GridPos::new(2, 3));
    /// assert_eq!(around[3], GridPos::new(1, 2));
    /// ```
    pub fn cardinal_neighbors(self) -> [GridPos; 4] {
        [
            GridPos::new(self.x, self.y + 1), // up
            GridPos::new(self.x, self.y - 1), // down
            GridPos::new(self.x + 1, self.y), // right
            GridPos::new(self.x - 1, self.y), // left
        ]
    }

    /// Calculates the Manhattan distance to another position.
    pub fn manhattan_distance(self, other: GridPos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl std::ops::Add for GridPos {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for GridPos {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

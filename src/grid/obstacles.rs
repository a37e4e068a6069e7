//! # Obstacle Sources
//!
//! The query surface a grid is built from.

use super::WorldPos;

/// Answers whether a world position is blocked.
///
/// The grid is centred on [`ObstacleSource::anchor`] and samples
/// [`ObstacleSource::has_obstacle_at`] once per cell centre when it is built.
pub trait ObstacleSource {
    /// Returns true if an obstacle occupies the given world position.
    fn has_obstacle_at(&self, pos: WorldPos) -> bool;

    /// World-space centre of the area covered by this source.
    fn anchor(&self) -> WorldPos {
        WorldPos::ZERO
    }
}

impl<S: ObstacleSource + ?Sized> ObstacleSource for &S {
    fn has_obstacle_at(&self, pos: WorldPos) -> bool {
        (**self).has_obstacle_at(pos)
    }

    fn anchor(&self) -> WorldPos {
        (**self).anchor()
    }
}

/// Adapts a closure into an obstacle source anchored at the world origin.
///
/// # Examples
///
/// ```
/// use gridseek::{FnObstacles, ObstacleSource, WorldPos};
///
/// let walls = FnObstacles(|pos: WorldPos| pos.x > 2.0);
/// assert!(walls.has_obstacle_at(WorldPos::new(3.0, 0.0)));
/// assert!(!walls.has_obstacle_at(WorldPos::new(1.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnObstacles<F>(pub F);

impl<F> ObstacleSource for FnObstacles<F>
where
    F: Fn(WorldPos) -> bool,
{
    fn has_obstacle_at(&self, pos: WorldPos) -> bool {
        (self.0)(pos)
    }
}

/// An obstacle source with nothing in it.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenField;

impl ObstacleSource for OpenField {
    fn has_obstacle_at(&self, _pos: WorldPos) -> bool {
        false
    }
}

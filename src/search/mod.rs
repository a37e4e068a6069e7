//! # Search Module
//!
//! The pathfinding engine and the values it hands back to callers.
//!
//! The engine owns the grid and runs A* between two world positions. Each
//! search keeps its own bookkeeping, so searches never observe each other's
//! costs or back-links.

mod astar;
pub mod engine;
mod frontier;
mod records;

pub use engine::*;

use crate::config::{DIAGONAL_STEP_COST, STRAIGHT_STEP_COST};
use crate::{GridCell, GridPos, WorldPos};

/// Movement cost between two cells, also used as the search heuristic.
///
/// Octile distance scaled by 10: a straight step costs 10 and a diagonal
/// step 14.
///
/// # Examples
///
/// ```
/// use gridseek::{step_cost, GridPos};
///
/// assert_eq!(step_cost(GridPos::new(0, 0), GridPos::new(3, 0)), 30);
/// assert_eq!(step_cost(GridPos::new(0, 0), GridPos::new(2, 3)), 38);
/// ```
pub fn step_cost(a: GridPos, b: GridPos) -> u32 {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);
    let diagonal = dx.min(dy);
    let straight = dx.max(dy) - diagonal;
    DIAGONAL_STEP_COST * diagonal + STRAIGHT_STEP_COST * straight
}

/// One step of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// Grid coordinates of the cell
    pub pos: GridPos,
    /// World-space centre of the cell
    pub world: WorldPos,
}

impl From<&GridCell> for Waypoint {
    fn from(cell: &GridCell) -> Self {
        Self {
            pos: cell.pos(),
            world: cell.world(),
        }
    }
}

/// An ordered route from near the start to the goal, goal inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    waypoints: Vec<Waypoint>,
    cost: u32,
}

impl Path {
    pub(crate) fn new(waypoints: Vec<Waypoint>, cost: u32) -> Self {
        Self { waypoints, cost }
    }

    /// Accumulated cost of the goal cell.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// The waypoint a subject should head for next.
    pub fn next_waypoint(&self) -> Option<&Waypoint> {
        self.waypoints.first()
    }

    pub fn goal(&self) -> Option<&Waypoint> {
        self.waypoints.last()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Returns true if the path passes through the given cell.
    pub fn contains(&self, pos: GridPos) -> bool {
        self.waypoints.iter().any(|w| w.pos == pos)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Waypoint> {
        self.waypoints.iter()
    }

    pub fn into_waypoints(self) -> Vec<Waypoint> {
        self.waypoints
    }
}

impl IntoIterator for Path {
    type Item = Waypoint;
    type IntoIter = std::vec::IntoIter<Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Waypoint;
    type IntoIter = std::slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}

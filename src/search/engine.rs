//! # Pathfinding Engine
//!
//! Owns the grid and answers path queries between world positions.

use super::astar::run_astar;
use super::{Path, Waypoint};
use crate::{EngineConfig, Grid, GridPos, GridseekError, GridseekResult, ObstacleSource, WorldPos};
use log::{debug, info, warn};

/// Grid owner and A* search front end.
///
/// Lifecycle is `new → load_map → (search)* → load_map | drop`. Loading a map
/// takes `&mut self` and searching takes `&self`, so a rebuild can never
/// interleave with a search.
///
/// # Examples
///
/// ```
/// use gridseek::{EngineConfig, GridPos, OpenField, PathfindingEngine, WorldPos};
///
/// let mut engine = PathfindingEngine::new(EngineConfig::default());
/// engine.load_map(&OpenField, 10.0, 10.0).unwrap();
///
/// let path = engine.search(WorldPos::new(-4.5, -4.5), WorldPos::new(-1.5, -4.5)).unwrap();
/// assert_eq!(path.cost(), 30);
/// assert_eq!(path.goal().unwrap().pos, GridPos::new(3, 0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathfindingEngine {
    config: EngineConfig,
    grid: Option<Grid>,
}

impl PathfindingEngine {
    /// Creates an engine with no grid loaded.
    pub fn new(config: EngineConfig) -> Self {
        Self { config, grid: None }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The current grid, if a map has been loaded.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Returns true once a map has been loaded.
    pub fn is_ready(&self) -> bool {
        self.grid.is_some()
    }

    /// Rebuilds the grid from an obstacle source.
    ///
    /// The previous grid is discarded wholesale. On error the previous grid
    /// stays in place.
    pub fn load_map<S>(&mut self, source: &S, width: f32, height: f32) -> GridseekResult<()>
    where
        S: ObstacleSource + ?Sized,
    {
        let grid = Grid::build(source, width, height, &self.config)?;
        info!(
            "Built {}x{} grid over {}x{} world units at {} ({} blocked cells)",
            grid.size_x(),
            grid.size_y(),
            width,
            height,
            grid.origin(),
            grid.blocked_count()
        );
        self.grid = Some(grid);
        Ok(())
    }

    /// Maps a subject's world position to grid coordinates.
    pub fn world_to_grid(&self, world: WorldPos) -> Option<GridPos> {
        self.grid.as_ref()?.world_to_grid(world)
    }

    /// Finds the cheapest walkable path between two world positions.
    ///
    /// The path starts at the first cell after the start cell and ends at
    /// the goal cell. A waypoint sitting exactly on `start` is dropped; if
    /// that leaves nothing, the goal cell is returned on its own.
    pub fn search(&self, start: WorldPos, end: WorldPos) -> GridseekResult<Path> {
        let grid = self.grid.as_ref().ok_or(GridseekError::GridNotReady)?;
        let start_pos = grid
            .world_to_grid(start)
            .ok_or(GridseekError::StartOutOfBounds(start))?;
        let goal_pos = grid
            .world_to_grid(end)
            .ok_or(GridseekError::GoalOutOfBounds(end))?;

        let run = run_astar(grid, start_pos, goal_pos);
        let route = match run.route {
            Some(route) => route,
            None => {
                debug!(
                    "No path from {} to {} after expanding {} cells",
                    start_pos, goal_pos, run.expanded
                );
                return Err(GridseekError::NoPath {
                    start: start_pos,
                    goal: goal_pos,
                });
            }
        };

        let mut waypoints: Vec<Waypoint> = route
            .cells
            .iter()
            .filter_map(|&pos| grid.cell(pos))
            .map(Waypoint::from)
            .filter(|waypoint| waypoint.world != start)
            .collect();
        if waypoints.is_empty() {
            if let Some(goal) = grid.cell(goal_pos) {
                waypoints.push(Waypoint::from(goal));
            }
        }

        debug!(
            "Path from {} to {}: {} waypoints, cost {}, {} cells expanded",
            start_pos,
            goal_pos,
            waypoints.len(),
            route.cost,
            run.expanded
        );
        Ok(Path::new(waypoints, route.cost))
    }

    /// Fail-soft path query for per-frame callers.
    ///
    /// Returns an empty list when no map is loaded, the goal is outside the
    /// grid, or no path exists. When the start is outside the grid the list
    /// holds only the cell the world origin maps to; treat that as a marker,
    /// not a route. Use [`PathfindingEngine::search`] to tell these apart.
    pub fn find_path(&self, start: WorldPos, end: WorldPos) -> Vec<Waypoint> {
        match self.search(start, end) {
            Ok(path) => path.into_waypoints(),
            Err(GridseekError::StartOutOfBounds(pos)) => {
                warn!("Start position {} is outside the grid", pos);
                self.origin_marker().into_iter().collect()
            }
            Err(err) => {
                debug!("{}", err);
                Vec::new()
            }
        }
    }

    fn origin_marker(&self) -> Option<Waypoint> {
        self.grid
            .as_ref()?
            .cell_at_world(WorldPos::ZERO)
            .map(Waypoint::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FnObstacles, OpenField};

    fn engine_with(source: &dyn ObstacleSource, size: f32) -> PathfindingEngine {
        let mut engine = PathfindingEngine::new(EngineConfig::default());
        engine.load_map(source, size, size).unwrap();
        engine
    }

    fn world_of(engine: &PathfindingEngine, x: i32, y: i32) -> WorldPos {
        engine
            .grid()
            .unwrap()
            .cell(GridPos::new(x, y))
            .unwrap()
            .world()
    }

    #[test]
    fn test_not_ready() {
        let engine = PathfindingEngine::new(EngineConfig::default());
        assert!(!engine.is_ready());
        assert!(matches!(
            engine.search(WorldPos::ZERO, WorldPos::ZERO),
            Err(GridseekError::GridNotReady)
        ));
        assert!(engine.find_path(WorldPos::ZERO, WorldPos::ZERO).is_empty());
        assert_eq!(engine.world_to_grid(WorldPos::ZERO), None);
    }

    #[test]
    fn test_straight_path() {
        let engine = engine_with(&OpenField, 10.0);
        let path = engine
            .search(world_of(&engine, 0, 0), world_of(&engine, 3, 0))
            .unwrap();
        let cells: Vec<GridPos> = path.iter().map(|w| w.pos).collect();
        assert_eq!(
            cells,
            vec![GridPos::new(1, 0), GridPos::new(2, 0), GridPos::new(3, 0)]
        );
        assert_eq!(path.cost(), 30);
    }

    #[test]
    fn test_start_equals_goal() {
        let engine = engine_with(&OpenField, 10.0);
        let here = world_of(&engine, 4, 4);
        let path = engine.search(here, here).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.goal().unwrap().pos, GridPos::new(4, 4));
        assert_eq!(path.cost(), 0);
    }

    #[test]
    fn test_goal_out_of_bounds() {
        let engine = engine_with(&OpenField, 10.0);
        let far = WorldPos::new(100.0, 100.0);
        assert!(matches!(
            engine.search(WorldPos::ZERO, far),
            Err(GridseekError::GoalOutOfBounds(_))
        ));
        assert!(engine.find_path(WorldPos::ZERO, far).is_empty());
    }

    #[test]
    fn test_start_out_of_bounds_marker() {
        let engine = engine_with(&OpenField, 10.0);
        let far = WorldPos::new(-100.0, 0.0);
        assert!(matches!(
            engine.search(far, WorldPos::ZERO),
            Err(GridseekError::StartOutOfBounds(_))
        ));

        let marker = engine.find_path(far, WorldPos::ZERO);
        assert_eq!(marker.len(), 1);
        assert_eq!(Some(marker[0].pos), engine.world_to_grid(WorldPos::ZERO));
    }

    #[test]
    fn test_start_out_of_bounds_marker_outside_grid() {
        // A grid far away from the origin has no cell for the marker.
        struct FarAway;
        impl ObstacleSource for FarAway {
            fn has_obstacle_at(&self, _pos: WorldPos) -> bool {
                false
            }
            fn anchor(&self) -> WorldPos {
                WorldPos::new(500.0, 500.0)
            }
        }

        let engine = engine_with(&FarAway, 10.0);
        assert!(engine
            .find_path(WorldPos::ZERO, WorldPos::new(500.0, 500.0))
            .is_empty());
    }

    #[test]
    fn test_no_path() {
        let walls = FnObstacles(|pos: WorldPos| pos.x == -2.5);
        let engine = engine_with(&walls, 10.0);
        let start = world_of(&engine, 0, 0);
        let goal = world_of(&engine, 5, 0);
        assert!(matches!(
            engine.search(start, goal),
            Err(GridseekError::NoPath { .. })
        ));
        assert!(engine.find_path(start, goal).is_empty());
    }

    #[test]
    fn test_failed_reload_keeps_grid() {
        let mut engine = engine_with(&OpenField, 10.0);
        assert!(engine.load_map(&OpenField, -1.0, 10.0).is_err());
        assert_eq!(engine.grid().unwrap().size_x(), 10);
    }

    #[test]
    fn test_unusable_cell_counts_keep_grid() {
        let mut engine = engine_with(&OpenField, 10.0);
        assert!(matches!(
            engine.load_map(&OpenField, 1.0e30, 1.0e30),
            Err(GridseekError::InvalidMap(_))
        ));
        assert!(matches!(
            engine.load_map(&OpenField, 0.4, 0.4),
            Err(GridseekError::InvalidMap(_))
        ));

        let grid = engine.grid().unwrap();
        assert_eq!((grid.size_x(), grid.size_y()), (10, 10));
        assert_eq!(engine.find_path(WorldPos::ZERO, WorldPos::ZERO).len(), 1);
    }

    #[test]
    fn test_unusable_first_map_leaves_engine_unready() {
        let mut engine = PathfindingEngine::new(EngineConfig::default());
        assert!(engine.load_map(&OpenField, 0.4, 0.4).is_err());
        assert!(!engine.is_ready());
    }

    #[test]
    fn test_reload_replaces_grid() {
        let mut engine = engine_with(&OpenField, 10.0);
        let start = world_of(&engine, 0, 0);
        let goal = world_of(&engine, 5, 0);
        assert!(engine.search(start, goal).is_ok());

        let walls = FnObstacles(|pos: WorldPos| pos.x == -2.5);
        engine.load_map(&walls, 10.0, 10.0).unwrap();
        assert!(engine.search(start, goal).is_err());
    }
}

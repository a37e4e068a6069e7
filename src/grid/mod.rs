//! # Grid Module
//!
//! The static occupancy grid the search runs on.
//!
//! This module contains the building blocks of the search space:
//! - World-space and grid-space coordinates
//! - Grid cells with their walkable flag
//! - The obstacle query surface grids are built from
//! - The grid itself, with world ↔ grid coordinate mapping

pub mod cell;
pub mod coords;
pub mod obstacles;

pub use cell::*;
pub use coords::*;
pub use obstacles::*;

use crate::config::MAX_GRID_CELLS;
use crate::{EngineConfig, GridseekError, GridseekResult};

/// A fixed-size 2D array of cells laid over a bounded world area.
///
/// The grid is centred on the anchor of the obstacle source it was built
/// from. Cell `(0, 0)` sits at the bottom-left corner; cells are stored
/// row-major with `x` varying fastest.
#[derive(Debug, Clone)]
pub struct Grid {
    size_x: usize,
    size_y: usize,
    world_width: f32,
    world_height: f32,
    cell_radius: f32,
    anchor: WorldPos,
    origin: WorldPos,
    subject_offset: WorldPos,
    cells: Vec<GridCell>,
}

impl Grid {
    /// Builds a grid covering `width` × `height` world units around the
    /// source's anchor, sampling the source once per cell centre.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridseek::{EngineConfig, FnObstacles, Grid, GridPos, WorldPos};
    ///
    /// let source = FnObstacles(|pos: WorldPos| pos.x > 0.0);
    /// let grid = Grid::build(&source, 4.0, 2.0, &EngineConfig::default()).unwrap();
    ///
    /// assert_eq!((grid.size_x(), grid.size_y()), (4, 2));
    /// assert!(grid.cell(GridPos::new(1, 0)).unwrap().walkable);
    /// assert!(!grid.cell(GridPos::new(2, 0)).unwrap().walkable);
    /// ```
    pub fn build<S>(source: &S, width: f32, height: f32, config: &EngineConfig) -> GridseekResult<Self>
    where
        S: ObstacleSource + ?Sized,
    {
        config.validate()?;
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(GridseekError::InvalidMap(format!(
                "world size must be positive and finite, got {} x {}",
                width, height
            )));
        }

        let cell_radius = config.cell_radius;
        let diameter = cell_radius * 2.0;
        // Float to int casts saturate, so oversized counts fail the limit below.
        let size_x = (width / diameter).round_ties_even() as usize;
        let size_y = (height / diameter).round_ties_even() as usize;
        if size_x == 0 || size_y == 0 {
            return Err(GridseekError::InvalidMap(format!(
                "{} x {} world units is smaller than one cell of diameter {}",
                width, height, diameter
            )));
        }
        let cell_count = size_x
            .checked_mul(size_y)
            .filter(|&count| count <= MAX_GRID_CELLS)
            .ok_or_else(|| {
                GridseekError::InvalidMap(format!(
                    "{} x {} world units at cell diameter {} exceeds {} cells",
                    width, height, diameter, MAX_GRID_CELLS
                ))
            })?;

        let anchor = source.anchor();
        let origin = anchor - WorldPos::new(width / 2.0, height / 2.0);

        let mut cells = Vec::with_capacity(cell_count);
        for y in 0..size_y {
            for x in 0..size_x {
                let world = origin
                    + WorldPos::new(
                        x as f32 * diameter + cell_radius,
                        y as f32 * diameter + cell_radius,
                    );
                let walkable = !source.has_obstacle_at(world);
                cells.push(GridCell::new(GridPos::new(x as i32, y as i32), world, walkable));
            }
        }

        Ok(Self {
            size_x,
            size_y,
            world_width: width,
            world_height: height,
            cell_radius,
            anchor,
            origin,
            subject_offset: config.subject_offset,
            cells,
        })
    }

    /// Number of cells along the x axis.
    pub fn size_x(&self) -> usize {
        self.size_x
    }

    /// Number of cells along the y axis.
    pub fn size_y(&self) -> usize {
        self.size_y
    }

    /// World width the grid was built for.
    pub fn world_width(&self) -> f32 {
        self.world_width
    }

    /// World height the grid was built for.
    pub fn world_height(&self) -> f32 {
        self.world_height
    }

    pub fn cell_radius(&self) -> f32 {
        self.cell_radius
    }

    pub fn cell_diameter(&self) -> f32 {
        self.cell_radius * 2.0
    }

    /// Centre of the covered area, taken from the obstacle source.
    pub fn anchor(&self) -> WorldPos {
        self.anchor
    }

    /// World-space bottom-left corner of the grid.
    pub fn origin(&self) -> WorldPos {
        self.origin
    }

    /// Returns true if the position addresses a cell of this grid.
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.size_x && (pos.y as usize) < self.size_y
    }

    fn index(&self, pos: GridPos) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.y as usize * self.size_x + pos.x as usize)
        } else {
            None
        }
    }

    /// Gets the cell at the given grid position.
    pub fn cell(&self, pos: GridPos) -> Option<&GridCell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// All cells, row-major from the bottom-left corner.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Returns true if the position is inside the grid and walkable.
    pub fn is_walkable(&self, pos: GridPos) -> bool {
        self.cell(pos).is_some_and(|cell| cell.walkable)
    }

    /// Number of cells blocked by obstacles.
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_blocked()).count()
    }

    /// Maps a subject's world position to the grid cell it occupies.
    ///
    /// The subject pivot offset is subtracted before rounding, so a subject
    /// maps to the cell it visually stands in. Returns `None` outside the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridseek::{EngineConfig, Grid, GridPos, OpenField, WorldPos};
    ///
    /// let grid = Grid::build(&OpenField, 10.0, 10.0, &EngineConfig::default()).unwrap();
    /// assert_eq!(grid.world_to_grid(WorldPos::new(-4.5, -4.5)), Some(GridPos::new(0, 0)));
    /// assert_eq!(grid.world_to_grid(WorldPos::new(-20.0, 0.0)), None);
    /// ```
    pub fn world_to_grid(&self, world: WorldPos) -> Option<GridPos> {
        let diameter = self.cell_diameter();
        let local = world - self.anchor - self.subject_offset;
        let x = (local.x / diameter + self.size_x as f32 / 2.0).round_ties_even();
        let y = (local.y / diameter + self.size_y as f32 / 2.0).round_ties_even();

        if !(x.is_finite() && y.is_finite()) {
            return None;
        }
        if x < 0.0 || y < 0.0 || x >= self.size_x as f32 || y >= self.size_y as f32 {
            return None;
        }
        Some(GridPos::new(x as i32, y as i32))
    }

    /// Gets the cell a subject at the given world position occupies.
    pub fn cell_at_world(&self, world: WorldPos) -> Option<&GridCell> {
        self.world_to_grid(world).and_then(|pos| self.cell(pos))
    }

    /// Returns the in-bounds 4-connected neighbours of a cell.
    pub fn neighbors(&self, pos: GridPos) -> impl Iterator<Item = &GridCell> + '_ {
        pos.cardinal_neighbors()
            .into_iter()
            .filter_map(move |n| self.cell(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(width: f32, height: f32) -> Grid {
        Grid::build(&OpenField, width, height, &EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_grid_dimensions() {
        let grid = open_grid(10.0, 6.0);
        assert_eq!(grid.size_x(), 10);
        assert_eq!(grid.size_y(), 6);
        assert_eq!(grid.cells().len(), 60);
        assert_eq!(grid.origin(), WorldPos::new(-5.0, -3.0));
    }

    #[test]
    fn test_grid_dimension_rounding() {
        // 2.5 cells rounds half to even
        let grid = open_grid(2.5, 3.5);
        assert_eq!(grid.size_x(), 2);
        assert_eq!(grid.size_y(), 4);
    }

    #[test]
    fn test_cell_world_positions() {
        let grid = open_grid(10.0, 10.0);
        let cell = grid.cell(GridPos::new(0, 0)).unwrap();
        assert_eq!(cell.world(), WorldPos::new(-4.5, -4.5));
        let cell = grid.cell(GridPos::new(9, 3)).unwrap();
        assert_eq!(cell.world(), WorldPos::new(4.5, -1.5));
    }

    #[test]
    fn test_obstacles_sampled_at_cell_centres() {
        let source = FnObstacles(|pos: WorldPos| pos == WorldPos::new(-2.5, 0.5));
        let grid = Grid::build(&source, 10.0, 10.0, &EngineConfig::default()).unwrap();
        assert_eq!(grid.blocked_count(), 1);
        assert!(!grid.is_walkable(GridPos::new(2, 5)));
        assert!(grid.is_walkable(GridPos::new(2, 4)));
    }

    #[test]
    fn test_anchor_shifts_origin() {
        struct Anchored;
        impl ObstacleSource for Anchored {
            fn has_obstacle_at(&self, _pos: WorldPos) -> bool {
                false
            }
            fn anchor(&self) -> WorldPos {
                WorldPos::new(100.0, 50.0)
            }
        }

        let grid = Grid::build(&Anchored, 4.0, 4.0, &EngineConfig::default()).unwrap();
        assert_eq!(grid.origin(), WorldPos::new(98.0, 48.0));
        let corner = grid.cell(GridPos::new(0, 0)).unwrap().world();
        assert_eq!(grid.world_to_grid(corner), Some(GridPos::new(0, 0)));
    }

    #[test]
    fn test_world_to_grid_matches_offset_formula() {
        let grid = open_grid(10.0, 10.0);
        for &(wx, wy) in &[(0.0f32, 0.0f32), (1.3, -2.2), (-4.0, 4.0), (3.75, 0.5)] {
            let expected_x = (wx - 0.25 + 5.0).round_ties_even() as i32;
            let expected_y = (wy - 0.5 + 5.0).round_ties_even() as i32;
            assert_eq!(
                grid.world_to_grid(WorldPos::new(wx, wy)),
                Some(GridPos::new(expected_x, expected_y))
            );
        }
    }

    #[test]
    fn test_world_to_grid_rounds_half_to_even() {
        let grid = open_grid(10.0, 10.0);
        // y = 0 - 0.5 + 5 = 4.5 rounds to 4
        assert_eq!(grid.world_to_grid(WorldPos::ZERO), Some(GridPos::new(5, 4)));
    }

    #[test]
    fn test_every_cell_maps_back_to_itself() {
        let grid = open_grid(8.0, 5.0);
        for cell in grid.cells() {
            assert_eq!(grid.world_to_grid(cell.world()), Some(cell.pos()));
        }
    }

    #[test]
    fn test_world_to_grid_out_of_bounds() {
        let grid = open_grid(10.0, 10.0);
        assert_eq!(grid.world_to_grid(WorldPos::new(-100.0, 0.0)), None);
        assert_eq!(grid.world_to_grid(WorldPos::new(0.0, 100.0)), None);
        assert_eq!(grid.world_to_grid(WorldPos::new(5.0, 0.0)), None);
        assert_eq!(grid.world_to_grid(WorldPos::new(f32::NAN, 0.0)), None);
    }

    #[test]
    fn test_neighbors_clipped_at_edges() {
        let grid = open_grid(3.0, 3.0);
        let corner: Vec<GridPos> = grid.neighbors(GridPos::new(0, 0)).map(|c| c.pos()).collect();
        assert_eq!(corner, vec![GridPos::new(0, 1), GridPos::new(1, 0)]);
        assert_eq!(grid.neighbors(GridPos::new(1, 1)).count(), 4);
    }

    #[test]
    fn test_invalid_world_size() {
        let config = EngineConfig::default();
        assert!(matches!(
            Grid::build(&OpenField, 0.0, 10.0, &config),
            Err(GridseekError::InvalidMap(_))
        ));
        assert!(matches!(
            Grid::build(&OpenField, 10.0, f32::NAN, &config),
            Err(GridseekError::InvalidMap(_))
        ));
    }

    #[test]
    fn test_world_smaller_than_one_cell() {
        let config = EngineConfig::default();
        assert!(matches!(
            Grid::build(&OpenField, 0.4, 0.4, &config),
            Err(GridseekError::InvalidMap(_))
        ));
        // 0.5 cells rounds to zero
        assert!(matches!(
            Grid::build(&OpenField, 10.0, 0.5, &config),
            Err(GridseekError::InvalidMap(_))
        ));
        assert_eq!(open_grid(0.6, 0.6).cells().len(), 1);
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let config = EngineConfig::default();
        assert!(matches!(
            Grid::build(&OpenField, 1.0e30, 1.0e30, &config),
            Err(GridseekError::InvalidMap(_))
        ));
        assert!(matches!(
            Grid::build(&OpenField, 8192.0, 8192.0, &config),
            Err(GridseekError::InvalidMap(_))
        ));

        let tiny_cells = EngineConfig {
            cell_radius: 1.0e-30,
            ..EngineConfig::default()
        };
        assert!(matches!(
            Grid::build(&OpenField, 10.0, 10.0, &tiny_cells),
            Err(GridseekError::InvalidMap(_))
        ));
    }
}

//! # Gridseek
//!
//! Grid-based A* pathfinding for 2D game worlds.
//!
//! ## Architecture Overview
//!
//! The crate is built bottom-up around a handful of concepts:
//!
//! - **Grid**: a static occupancy grid laid over a bounded world area, built
//!   from an injected [`ObstacleSource`]
//! - **Search**: the [`PathfindingEngine`], which owns the grid and runs A*
//!   between two world positions
//! - **Tile maps**: a ready-made obstacle source that can be loaded from ASCII
//!   text or generated from a seed
//! - **Rendering**: debug views of grid occupancy and computed paths
//!
//! ## Usage
//!
//! ```
//! use gridseek::{EngineConfig, PathfindingEngine, TileMap, WorldPos};
//!
//! let map = TileMap::from_ascii("....\n.##.\n....\n....").unwrap();
//! let mut engine = PathfindingEngine::new(EngineConfig::default());
//! engine.load_map(&map, 4.0, 4.0).unwrap();
//!
//! let path = engine.find_path(WorldPos::new(-1.5, -1.5), WorldPos::new(1.5, -1.5));
//! assert!(!path.is_empty());
//! ```

pub mod grid;
pub mod rendering;
pub mod search;
pub mod settings;
pub mod tilemap;

pub use grid::*;
pub use rendering::*;
pub use search::*;
pub use settings::*;
pub use tilemap::*;

/// Core error type for the gridseek engine.
#[derive(thiserror::Error, Debug)]
pub enum GridseekError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Engine configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Map dimensions or map data are invalid
    #[error("Invalid map: {0}")]
    InvalidMap(String),

    /// A search was requested before any map was loaded
    #[error("Grid has not been built yet")]
    GridNotReady,

    /// The start position maps outside the grid
    #[error("Start position {0} is outside the grid")]
    StartOutOfBounds(WorldPos),

    /// The goal position maps outside the grid
    #[error("Goal position {0} is outside the grid")]
    GoalOutOfBounds(WorldPos),

    /// The open set was exhausted without reaching the goal
    #[error("No walkable path from {start} to {goal}")]
    NoPath { start: GridPos, goal: GridPos },
}

/// Result type used throughout the gridseek codebase.
pub type GridseekResult<T> = Result<T, GridseekError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine configuration constants.
pub mod config {
    /// Default radius of a grid cell in world units
    pub const DEFAULT_CELL_RADIUS: f32 = 0.5;

    /// Default horizontal pivot offset of a search subject
    pub const DEFAULT_SUBJECT_OFFSET_X: f32 = 0.25;

    /// Default vertical pivot offset of a search subject
    pub const DEFAULT_SUBJECT_OFFSET_Y: f32 = 0.5;

    /// Cost of one axis-aligned step
    pub const STRAIGHT_STEP_COST: u32 = 10;

    /// Cost of one diagonal step, used only by the heuristic
    pub const DIAGONAL_STEP_COST: u32 = 14;

    /// Recommended interval between path queries of a moving subject
    pub const DEFAULT_REPATH_INTERVAL_MS: u64 = 100;

    /// Upper bound on the number of cells in one grid
    pub const MAX_GRID_CELLS: usize = 1 << 24;

    /// Default width in tiles of a map generated by the viewer
    pub const DEFAULT_MAP_WIDTH: u32 = 32;

    /// Default height in tiles of a map generated by the viewer
    pub const DEFAULT_MAP_HEIGHT: u32 = 24;
}

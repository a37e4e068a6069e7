//! # Tile Map Module
//!
//! A ready-made obstacle source: a set of blocked square tiles laid out
//! around an anchor point.
//!
//! Tile `(0, 0)` covers the world square whose bottom-left corner is the
//! anchor, so a map loaded from text or generated from a seed is centred on
//! the anchor. Maps can be parsed from ASCII text or generated from a seed
//! for demos and benchmarks.

use crate::{GridPos, GridseekError, GridseekResult, ObstacleSource, WorldPos};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Character marking a blocked tile in ASCII maps
pub const BLOCKED_TILE: char = '#';

/// Character marking an open tile in ASCII maps
pub const OPEN_TILE: char = '.';

/// Blocked tiles around an anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct TileMap {
    /// World position of the corner shared by tiles (-1, -1) and (0, 0)
    anchor: WorldPos,
    /// Edge length of a tile in world units
    tile_size: f32,
    /// Nominal width in tiles
    width: u32,
    /// Nominal height in tiles
    height: u32,
    blocked: HashSet<GridPos>,
}

impl TileMap {
    /// Creates an empty map of `width` × `height` unit tiles centred on the
    /// world origin.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            anchor: WorldPos::ZERO,
            tile_size: 1.0,
            width,
            height,
            blocked: HashSet::new(),
        }
    }

    /// Moves the map so it is centred on `anchor`.
    pub fn with_anchor(mut self, anchor: WorldPos) -> Self {
        self.anchor = anchor;
        self
    }

    /// Parses a map from text, one row per line with the top row first.
    ///
    /// `#` marks a blocked tile and `.` an open one. All rows must have the
    /// same length.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridseek::{ObstacleSource, TileMap, WorldPos};
    ///
    /// let map = TileMap::from_ascii("#..\n...").unwrap();
    /// assert_eq!((map.width(), map.height()), (3, 2));
    /// assert!(map.has_obstacle_at(WorldPos::new(-0.5, 0.5)));
    /// assert!(!map.has_obstacle_at(WorldPos::new(-0.5, -0.5)));
    /// ```
    pub fn from_ascii(text: &str) -> GridseekResult<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .collect();

        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(GridseekError::InvalidMap("map text is empty".to_string()));
        }

        let mut map = Self::new(width as u32, height as u32);
        for (row_index, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(GridseekError::InvalidMap(format!(
                    "row {} has {} tiles, expected {}",
                    row_index + 1,
                    row.chars().count(),
                    width
                )));
            }

            let y = (height - 1 - row_index) as i32 - height as i32 / 2;
            for (column, ch) in row.chars().enumerate() {
                let x = column as i32 - width as i32 / 2;
                match ch {
                    BLOCKED_TILE => map.set_blocked(GridPos::new(x, y), true),
                    OPEN_TILE => {}
                    other => {
                        return Err(GridseekError::InvalidMap(format!(
                            "unexpected tile '{}' at row {}, column {}",
                            other,
                            row_index + 1,
                            column + 1
                        )))
                    }
                }
            }
        }

        Ok(map)
    }

    /// Loads an ASCII map from a file.
    pub fn load(path: impl AsRef<Path>) -> GridseekResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_ascii(&text)
    }

    /// Generates a map where each tile is blocked with probability `density`.
    ///
    /// The same seed always yields the same map.
    pub fn random(width: u32, height: u32, density: f64, seed: u64) -> GridseekResult<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridseekError::InvalidMap(format!(
                "obstacle density must be within 0.0..=1.0, got {}",
                density
            )));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut map = Self::new(width, height);
        let (min_x, min_y) = (-(width as i32 / 2), -(height as i32 / 2));
        for y in min_y..min_y + height as i32 {
            for x in min_x..min_x + width as i32 {
                if rng.gen_bool(density) {
                    map.set_blocked(GridPos::new(x, y), true);
                }
            }
        }
        Ok(map)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// World width covered by the nominal map size.
    pub fn world_width(&self) -> f32 {
        self.width as f32 * self.tile_size
    }

    /// World height covered by the nominal map size.
    pub fn world_height(&self) -> f32 {
        self.height as f32 * self.tile_size
    }

    /// Maps a world position to the tile containing it.
    pub fn world_to_tile(&self, pos: WorldPos) -> GridPos {
        let local = pos - self.anchor;
        GridPos::new(
            (local.x / self.tile_size).floor() as i32,
            (local.y / self.tile_size).floor() as i32,
        )
    }

    pub fn set_blocked(&mut self, tile: GridPos, blocked: bool) {
        if blocked {
            self.blocked.insert(tile);
        } else {
            self.blocked.remove(&tile);
        }
    }

    pub fn is_blocked(&self, tile: GridPos) -> bool {
        self.blocked.contains(&tile)
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.len()
    }
}

impl ObstacleSource for TileMap {
    fn has_obstacle_at(&self, pos: WorldPos) -> bool {
        self.is_blocked(self.world_to_tile(pos))
    }

    fn anchor(&self) -> WorldPos {
        self.anchor
    }
}

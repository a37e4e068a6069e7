//! # ASCII Rendering
//!
//! Plain-text snapshots of grid occupancy and paths.

use crate::{Grid, GridPos, Waypoint};
use std::collections::HashSet;

/// Glyph for a path cell
pub const PATH_GLYPH: char = '*';
/// Glyph for a blocked cell
pub const BLOCKED_GLYPH: char = '#';
/// Glyph for a walkable cell
pub const WALKABLE_GLYPH: char = '.';

/// Renders the grid as text, top row first, one line per row.
///
/// Path cells are drawn over whatever they sit on.
///
/// # Examples
///
/// ```
/// use gridseek::{render_ascii, EngineConfig, Grid, TileMap};
///
/// let map = TileMap::from_ascii("..#\n...").unwrap();
/// let grid = Grid::build(&map, 3.0, 2.0, &EngineConfig::default()).unwrap();
/// assert_eq!(render_ascii(&grid, &[]), "..#\n...\n");
/// ```
pub fn render_ascii(grid: &Grid, path: &[Waypoint]) -> String {
    let on_path: HashSet<GridPos> = path.iter().map(|w| w.pos).collect();
    let mut out = String::with_capacity((grid.size_x() + 1) * grid.size_y());

    for y in (0..grid.size_y() as i32).rev() {
        for x in 0..grid.size_x() as i32 {
            let pos = GridPos::new(x, y);
            let glyph = if on_path.contains(&pos) {
                PATH_GLYPH
            } else if grid.is_walkable(pos) {
                WALKABLE_GLYPH
            } else {
                BLOCKED_GLYPH
            };
            out.push(glyph);
        }
        out.push('\n');
    }

    out
}

//! # Grid Display
//!
//! 2D debug rendering of grid occupancy and paths using macroquad.

use crate::{Grid, GridPos, Waypoint, WorldPos};
use macroquad::prelude::*;
use std::collections::HashSet;

/// Maps the world area of a grid onto the screen and draws it.
///
/// World `y` grows upwards while screen `y` grows downwards, so the view
/// flips the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridView {
    /// World-space bottom-left corner of the grid
    pub origin: WorldPos,
    /// Pixels per world unit
    pub scale: f32,
    /// Screen x of the grid's left edge
    pub left: f32,
    /// Screen y of the grid's bottom edge
    pub bottom: f32,
}

impl GridView {
    /// Fits the grid into a screen of the given size, keeping `margin`
    /// pixels free on every side.
    pub fn fit(grid: &Grid, screen_width: f32, screen_height: f32, margin: f32) -> Self {
        let usable_width = (screen_width - 2.0 * margin).max(1.0);
        let usable_height = (screen_height - 2.0 * margin).max(1.0);
        let scale = (usable_width / grid.world_width()).min(usable_height / grid.world_height());

        let drawn_width = grid.world_width() * scale;
        let drawn_height = grid.world_height() * scale;
        Self {
            origin: grid.origin(),
            scale,
            left: (screen_width - drawn_width) / 2.0,
            bottom: (screen_height + drawn_height) / 2.0,
        }
    }

    pub fn world_to_screen(&self, world: WorldPos) -> Vec2 {
        vec2(
            self.left + (world.x - self.origin.x) * self.scale,
            self.bottom - (world.y - self.origin.y) * self.scale,
        )
    }

    pub fn screen_to_world(&self, screen: Vec2) -> WorldPos {
        WorldPos::new(
            self.origin.x + (screen.x - self.left) / self.scale,
            self.origin.y + (self.bottom - screen.y) / self.scale,
        )
    }

    /// Draws the grid bounds, blocked cells and path cells.
    pub fn draw(&self, grid: &Grid, path: &[Waypoint]) {
        let on_path: HashSet<GridPos> = path.iter().map(|w| w.pos).collect();
        let marker = grid.cell_radius() * self.scale;

        let top_left = self.world_to_screen(WorldPos::new(
            grid.origin().x,
            grid.origin().y + grid.world_height(),
        ));
        draw_rectangle_lines(
            top_left.x,
            top_left.y,
            grid.world_width() * self.scale,
            grid.world_height() * self.scale,
            2.0,
            DARKGRAY,
        );

        for cell in grid.cells() {
            let color = if on_path.contains(&cell.pos()) {
                BLACK
            } else if cell.is_blocked() {
                RED
            } else {
                continue;
            };
            let centre = self.world_to_screen(cell.world());
            draw_rectangle(
                centre.x - marker / 2.0,
                centre.y - marker / 2.0,
                marker,
                marker,
                color,
            );
        }
    }

    /// Draws a round marker at a world position.
    pub fn draw_marker(&self, world: WorldPos, color: Color) {
        let centre = self.world_to_screen(world);
        draw_circle(centre.x, centre.y, (self.scale * 0.3).max(2.0), color);
    }
}

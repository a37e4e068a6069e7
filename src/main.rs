//! # Gridseek Viewer Entry Point
//!
//! Loads or generates an obstacle map, builds the search grid, and runs an
//! interactive macroquad view of the paths the engine finds.

use clap::Parser;
use gridseek::config::{DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH};
use gridseek::{
    render_ascii, EngineConfig, GridView, GridseekError, GridseekResult, PathfindingEngine,
    TileMap, WorldPos,
};
use log::{debug, info};
use macroquad::prelude::*;
use std::path::PathBuf;

/// Command line arguments for the gridseek viewer.
#[derive(Parser, Debug)]
#[command(name = "gridseek")]
#[command(about = "Interactive viewer for grid-based A* pathfinding")]
#[command(version)]
struct Args {
    /// ASCII map file ('#' blocked, '.' open); a map is generated when omitted
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Random seed for map generation
    #[arg(short, long, default_value_t = 12345)]
    seed: u64,

    /// Width of a generated map in tiles
    #[arg(long, default_value_t = DEFAULT_MAP_WIDTH)]
    width: u32,

    /// Height of a generated map in tiles
    #[arg(long, default_value_t = DEFAULT_MAP_HEIGHT)]
    height: u32,

    /// Probability that a generated tile is blocked
    #[arg(long, default_value_t = 0.25)]
    density: f64,

    /// Engine configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[macroquad::main("Gridseek")]
async fn main() -> GridseekResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting gridseek viewer v{}", gridseek::VERSION);

    let config = match &args.config {
        Some(path) => {
            info!("Loading engine configuration from {}", path.display());
            EngineConfig::load(path)?
        }
        None => EngineConfig::default(),
    };

    let map = load_map(&args)?;
    let mut engine = PathfindingEngine::new(config);
    engine.load_map(&map, map.world_width(), map.world_height())?;

    if let Some(grid) = engine.grid() {
        debug!("Grid occupancy:\n{}", render_ascii(grid, &[]));
    }

    run_viewer(&engine).await
}

/// Initializes env_logger, using the given level unless RUST_LOG is set.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();
}

/// Reads the map file if one was given, otherwise generates a map.
fn load_map(args: &Args) -> GridseekResult<TileMap> {
    match &args.map {
        Some(path) => {
            info!("Loading map from {}", path.display());
            TileMap::load(path)
        }
        None => {
            info!(
                "Generating {}x{} map with seed {} and density {}",
                args.width, args.height, args.seed, args.density
            );
            TileMap::random(args.width, args.height, args.density, args.seed)
        }
    }
}

/// Runs the viewer loop.
///
/// The cursor is the goal, a left click moves the start. The path is
/// re-queried on the engine's repath interval, like a moving subject would.
async fn run_viewer(engine: &PathfindingEngine) -> GridseekResult<()> {
    let grid = engine.grid().ok_or(GridseekError::GridNotReady)?;
    let repath_interval = engine.config().repath_interval_ms as f64 / 1000.0;

    let mut start = grid
        .cells()
        .iter()
        .find(|cell| cell.walkable)
        .map(|cell| cell.world())
        .unwrap_or(WorldPos::ZERO);
    let mut path = Vec::new();
    let mut last_query = f64::NEG_INFINITY;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            info!("Viewer closed");
            break;
        }

        let view = GridView::fit(grid, screen_width(), screen_height(), 24.0);
        let (mouse_x, mouse_y) = mouse_position();
        let cursor = view.screen_to_world(vec2(mouse_x, mouse_y));

        if is_mouse_button_pressed(MouseButton::Left) {
            start = cursor;
            last_query = f64::NEG_INFINITY;
        }

        if get_time() - last_query >= repath_interval {
            path = engine.find_path(start, cursor);
            last_query = get_time();
        }

        clear_background(LIGHTGRAY);
        view.draw(grid, &path);
        view.draw_marker(start, BLUE);
        view.draw_marker(cursor, DARKGREEN);
        draw_text(
            &format!(
                "{} waypoints | left click: move start | esc: quit",
                path.len()
            ),
            24.0,
            18.0,
            20.0,
            BLACK,
        );

        next_frame().await;
    }

    Ok(())
}

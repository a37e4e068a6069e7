//! # Rendering Module
//!
//! Debug views of grid occupancy and computed paths: plain text for logs and
//! tests, and a macroquad view for the interactive viewer.

pub mod ascii;
pub mod display;

pub use ascii::*;
pub use display::*;

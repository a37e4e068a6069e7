//! # Settings Module
//!
//! Runtime configuration for the pathfinding engine.
//!
//! Defaults come from the constants in [`crate::config`]. A configuration can
//! also be loaded from and saved to JSON files; missing fields fall back to
//! their defaults.

use crate::config::{
    DEFAULT_CELL_RADIUS, DEFAULT_REPATH_INTERVAL_MS, DEFAULT_SUBJECT_OFFSET_X,
    DEFAULT_SUBJECT_OFFSET_Y,
};
use crate::{GridseekError, GridseekResult, WorldPos};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for grid construction and coordinate mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Radius of a grid cell in world units
    pub cell_radius: f32,
    /// Offset between a subject's pivot and the centre of the cell it stands in
    pub subject_offset: WorldPos,
    /// Recommended interval between path queries of a moving subject
    pub repath_interval_ms: u64,
}

impl EngineConfig {
    /// Creates the default engine configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridseek::EngineConfig;
    ///
    /// let config = EngineConfig::new();
    /// assert_eq!(config.cell_radius, 0.5);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new() -> Self {
        Self {
            cell_radius: DEFAULT_CELL_RADIUS,
            subject_offset: WorldPos::new(DEFAULT_SUBJECT_OFFSET_X, DEFAULT_SUBJECT_OFFSET_Y),
            repath_interval_ms: DEFAULT_REPATH_INTERVAL_MS,
        }
    }

    /// Creates a configuration for testing where a subject standing on a
    /// cell centre maps exactly onto that cell.
    pub fn for_testing() -> Self {
        Self {
            subject_offset: WorldPos::new(DEFAULT_CELL_RADIUS, DEFAULT_CELL_RADIUS),
            ..Self::new()
        }
    }

    /// Parses a configuration from JSON text.
    pub fn from_json_str(json: &str) -> GridseekResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> GridseekResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Writes this configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> GridseekResult<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Checks that the configuration can build a usable grid.
    pub fn validate(&self) -> GridseekResult<()> {
        if !(self.cell_radius.is_finite() && self.cell_radius > 0.0) {
            return Err(GridseekError::InvalidConfig(format!(
                "cell_radius must be positive and finite, got {}",
                self.cell_radius
            )));
        }
        if !self.subject_offset.is_finite() {
            return Err(GridseekError::InvalidConfig(
                "subject_offset must be finite".to_string(),
            ));
        }
        if self.repath_interval_ms == 0 {
            return Err(GridseekError::InvalidConfig(
                "repath_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

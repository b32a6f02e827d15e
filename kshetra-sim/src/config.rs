//! Configuration loading for the simulator.

use serde::Deserialize;
use std::path::Path;

use kshetra_arena::{ArenaShape, GenerationPolicy, GeneratorConfig, DEFAULT_MAX_DIMENSION};

use crate::error::{Result, SimError};

/// Main configuration structure.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SimConfig {
    /// Seed for a deterministic run; omitted means fresh entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub arena: ArenaConfig,

    #[serde(default)]
    pub agent: AgentConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Arena sizing and generation settings.
#[derive(Clone, Debug, Deserialize)]
pub struct ArenaConfig {
    /// Fixed width in tiles; omitted means a random dimension.
    #[serde(default)]
    pub width: Option<usize>,

    /// Fixed height in tiles; omitted means a random dimension.
    #[serde(default)]
    pub height: Option<usize>,

    /// Upper bound on either dimension (default: 40).
    #[serde(default = "default_max_dimension")]
    pub max_dimension: usize,

    /// Interior silhouette; omitted means a random shape.
    #[serde(default)]
    pub shape: Option<ArenaShape>,

    /// Obstacles to scatter, upper bound (default: 6).
    #[serde(default = "default_obstacle_count")]
    pub obstacle_count: usize,

    /// Markers to scatter, upper bound (default: 5).
    #[serde(default = "default_marker_count")]
    pub marker_count: usize,

    /// Placement strategy (default: verified_scatter).
    #[serde(default)]
    pub policy: GenerationPolicy,
}

/// Agent start settings.
#[derive(Clone, Debug, Deserialize)]
pub struct AgentConfig {
    /// Fixed start column; omitted means random placement.
    #[serde(default)]
    pub start_x: Option<i32>,

    /// Fixed start row; omitted means random placement.
    #[serde(default)]
    pub start_y: Option<i32>,

    /// Pause after each committed step, in milliseconds (default: 0).
    #[serde(default)]
    pub step_delay_ms: u64,
}

/// Output settings.
#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    /// Path to save the SVG report (default: output/run.svg).
    #[serde(default = "default_svg_path")]
    pub svg_path: String,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            max_dimension: default_max_dimension(),
            shape: None,
            obstacle_count: default_obstacle_count(),
            marker_count: default_marker_count(),
            policy: GenerationPolicy::default(),
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            start_x: None,
            start_y: None,
            step_delay_ms: 0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            svg_path: default_svg_path(),
        }
    }
}

// Default value functions
fn default_max_dimension() -> usize {
    DEFAULT_MAX_DIMENSION
}
fn default_obstacle_count() -> usize {
    6
}
fn default_marker_count() -> usize {
    5
}
fn default_svg_path() -> String {
    "output/run.svg".to_string()
}

impl SimConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("failed to read config file: {}", e)))?;
        let config: SimConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl ArenaConfig {
    /// The generation parameters this configuration asks for, with the
    /// silhouette already resolved by the caller.
    pub fn generator(&self, shape: ArenaShape) -> GeneratorConfig {
        GeneratorConfig {
            shape,
            obstacle_count: self.obstacle_count,
            marker_count: self.marker_count,
            policy: self.policy,
        }
    }
}

impl AgentConfig {
    /// The fixed start tile, when both coordinates are given.
    pub fn fixed_start(&self) -> Option<(i32, i32)> {
        match (self.start_x, self.start_y) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }
}

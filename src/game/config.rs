use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cell::{Cell, Direction};

/// Largest window side accepted, in pixels
pub const MAX_WINDOW_SIZE: i64 = 16_384;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("grid size must be positive, got {0}")]
    GridSize(i32),
    #[error("cell size and offset must be positive, got cell size {cell_size} and offset {offset}")]
    Layout { cell_size: i32, offset: i32 },
    #[error("window of {0} pixels per side is larger than {max}", max = MAX_WINDOW_SIZE)]
    WindowTooLarge(i64),
    #[error("tick interval must be a positive number of seconds, got {0}")]
    TickInterval(f64),
    #[error("target fps must be positive")]
    TargetFps,
    #[error("initial snake body is empty")]
    EmptyBody,
    #[error("initial snake cell ({x}, {y}) is outside the {grid_size}x{grid_size} grid")]
    BodyOutsideGrid { x: i32, y: i32, grid_size: i32 },
    #[error("initial snake cells ({0}, {1}) and ({2}, {3}) are not adjacent")]
    BodyNotContiguous(i32, i32, i32, i32),
    #[error("initial snake body visits ({0}, {1}) twice")]
    BodyOverlaps(i32, i32),
    #[error("initial snake of {len} cells leaves no room for food on a {grid_size}x{grid_size} grid")]
    NoRoomForFood { len: usize, grid_size: i32 },
    #[error("initial direction {0:?} points the head into the second segment")]
    DirectionIntoBody(Direction),
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per side of the square grid
    pub grid_size: i32,
    /// Side of one cell in pixels
    pub cell_size: i32,
    /// Margin between the window edge and the board in pixels
    pub offset: i32,
    /// Seconds between two snake advances
    pub tick_interval: f64,
    pub target_fps: u32,
    /// Starting segments, head first
    pub initial_body: Vec<Cell>,
    pub initial_direction: Direction,
    /// Fixed seed for food placement; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            cell_size: 30,
            offset: 75,
            tick_interval: 0.2,
            target_fps: 60,
            initial_body: vec![Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)],
            initial_direction: Direction::Right,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Read a config from a JSON file. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Window side length in pixels: the board plus a margin on both sides
    pub fn window_size(&self) -> f32 {
        self.window_pixels() as f32
    }

    fn window_pixels(&self) -> i64 {
        2 * i64::from(self.offset) + i64::from(self.cell_size) * i64::from(self.grid_size)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size <= 0 {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if self.cell_size <= 0 || self.offset <= 0 {
            return Err(ConfigError::Layout {
                cell_size: self.cell_size,
                offset: self.offset,
            });
        }
        if self.window_pixels() > MAX_WINDOW_SIZE {
            return Err(ConfigError::WindowTooLarge(self.window_pixels()));
        }
        if !(self.tick_interval.is_finite() && self.tick_interval > 0.0) {
            return Err(ConfigError::TickInterval(self.tick_interval));
        }
        if self.target_fps == 0 {
            return Err(ConfigError::TargetFps);
        }

        let body = &self.initial_body;
        if body.is_empty() {
            return Err(ConfigError::EmptyBody);
        }

        if body.len() as i64 >= i64::from(self.grid_size) * i64::from(self.grid_size) {
            return Err(ConfigError::NoRoomForFood {
                len: body.len(),
                grid_size: self.grid_size,
            });
        }

        let mut seen = HashSet::new();
        for cell in body {
            if !cell.is_within(self.grid_size) {
                return Err(ConfigError::BodyOutsideGrid {
                    x: cell.x,
                    y: cell.y,
                    grid_size: self.grid_size,
                });
            }
            if !seen.insert(*cell) {
                return Err(ConfigError::BodyOverlaps(cell.x, cell.y));
            }
        }

        for pair in body.windows(2) {
            if !pair[0].is_adjacent(pair[1]) {
                return Err(ConfigError::BodyNotContiguous(
                    pair[0].x, pair[0].y, pair[1].x, pair[1].y,
                ));
            }
        }

        if body.len() > 1 && body[0].step(self.initial_direction) == body[1] {
            return Err(ConfigError::DirectionIntoBody(self.initial_direction));
        }

        Ok(())
    }
}

//! Core rules of the game: the snake, the food and the collision checks.
//!
//! Nothing in here touches a window, a sound device or the system clock, so the
//! whole simulation can be driven step by step from tests.

pub mod cell;
pub mod clock;
pub mod config;
pub mod engine;
pub mod food;
pub mod rng;
pub mod snake;

pub use cell::{contains, Cell, Direction};
pub use clock::{Clock, ManualClock};
pub use config::{ConfigError, GameConfig};
pub use engine::{Collision, Game, GameEvent};
pub use food::Food;
pub use rng::{game_rng, RandomSource};
pub use snake::Snake;

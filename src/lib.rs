//! Retro Snake - a single-screen snake game
//!
//! - `game`: the rules, independent of any window or audio device
//! - `app`: the ggez front end that draws the board, plays sounds and reads keys
//! - `logging`: logger setup for the binary

pub mod app;
pub mod game;
pub mod logging;

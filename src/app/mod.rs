//! ggez front end: window loop, drawing, sound and keyboard.

pub mod audio;
pub mod input;
pub mod render;

use ggez::event::EventHandler;
use ggez::input::keyboard::KeyInput;
use ggez::{graphics, Context, GameError, GameResult};
use log::info;

use crate::game::{Clock, Game, GameConfig};
use audio::Sounds;
use input::{action_for_key, KeyAction};
use render::{Board, BACKGROUND_COLOR};

/// Game time as reported by ggez
struct ContextClock<'a>(&'a Context);

impl Clock for ContextClock<'_> {
    fn now(&self) -> f64 {
        self.0.time.time_since_start().as_secs_f64()
    }
}

pub struct RetroSnake {
    game: Game,
    board: Board,
    sounds: Sounds,
    target_fps: u32,
}

impl RetroSnake {
    pub fn new(ctx: &mut Context, config: &GameConfig) -> GameResult<Self> {
        let game = Game::new(config).map_err(|e| GameError::ConfigError(e.to_string()))?;
        let board = Board::new(ctx, config);
        let sounds = Sounds::load(ctx);

        Ok(RetroSnake {
            game,
            board,
            sounds,
            target_fps: config.target_fps,
        })
    }
}

impl EventHandler for RetroSnake {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while ctx.time.check_update_time(self.target_fps) {
            self.game.tick(&ContextClock(ctx));

            for event in self.game.drain_events() {
                self.sounds.play(ctx, &event)?;
            }
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, BACKGROUND_COLOR);
        self.board.draw(ctx, &mut canvas, &self.game)?;
        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeat: bool) -> GameResult {
        if repeat {
            return Ok(());
        }

        if let Some(keycode) = input.keycode {
            match action_for_key(keycode) {
                KeyAction::Steer(direction) => {
                    self.game.handle_input(direction);
                }
                KeyAction::Quit => {
                    info!("quitting with score {}", self.game.score());
                    ctx.request_quit();
                }
                KeyAction::None => {}
            }
        }

        Ok(())
    }
}

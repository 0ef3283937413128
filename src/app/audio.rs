use ggez::audio::{self, SoundSource};
use ggez::{Context, GameResult};
use log::warn;

use crate::game::GameEvent;

const EAT_SOUND: &str = "/eat.mp3";
const WALL_SOUND: &str = "/wall.mp3";

/// Which sound a game event asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Eat,
    Wall,
}

impl From<&GameEvent> for Cue {
    fn from(event: &GameEvent) -> Self {
        match event {
            GameEvent::FoodEaten { .. } => Cue::Eat,
            GameEvent::GameOver { .. } => Cue::Wall,
        }
    }
}

/// Sound effects, loaded once and dropped with the app.
///
/// A sound that fails to load stays silent instead of stopping the game.
pub struct Sounds {
    eat: Option<audio::Source>,
    wall: Option<audio::Source>,
}

impl Sounds {
    pub fn load(ctx: &mut Context) -> Self {
        Self {
            eat: load_source(ctx, EAT_SOUND),
            wall: load_source(ctx, WALL_SOUND),
        }
    }

    pub fn play(&mut self, ctx: &mut Context, event: &GameEvent) -> GameResult {
        let source = match Cue::from(event) {
            Cue::Eat => self.eat.as_mut(),
            Cue::Wall => self.wall.as_mut(),
        };
        if let Some(source) = source {
            source.play_detached(ctx)?;
        }
        Ok(())
    }
}

fn load_source(ctx: &mut Context, path: &str) -> Option<audio::Source> {
    match audio::Source::new(ctx, path) {
        Ok(source) => Some(source),
        Err(e) => {
            warn!("sound {} unavailable, playing nothing instead: {}", path, e);
            None
        }
    }
}

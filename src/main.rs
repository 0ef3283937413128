use std::path::PathBuf;

use clap::Parser;
use ggez::{event, GameError, GameResult};
use log::{error, info, LevelFilter};

use retro_snake::app::RetroSnake;
use retro_snake::game::{ConfigError, GameConfig};
use retro_snake::logging;

#[derive(Parser)]
#[command(name = "retro_snake")]
#[command(version, about = "Single-screen snake game")]
struct Cli {
    /// JSON file overriding any of the game settings
    #[arg(long, default_value = "retro_snake.json")]
    config: PathBuf,

    /// Seed for food placement, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// One of off, error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Directory holding food.png, eat.mp3 and wall.mp3
    #[arg(long, default_value = "./resources")]
    resources: PathBuf,
}

fn config_error(e: ConfigError) -> GameError {
    error!("{}", e);
    GameError::ConfigError(e.to_string())
}

fn main() -> GameResult {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let mut config = GameConfig::load(&cli.config).map_err(config_error)?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate().map_err(config_error)?;

    info!(
        "starting: {0}x{0} grid, {1}s per tick, {2} fps, resources in {3}",
        config.grid_size,
        config.tick_interval,
        config.target_fps,
        cli.resources.display()
    );

    let window_setup = ggez::conf::WindowSetup::default()
        .title("Retro Snake")
        .vsync(true);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(config.window_size(), config.window_size())
        .resizable(false);

    let (mut ctx, event_loop) = ggez::ContextBuilder::new("retro_snake", "retro_snake")
        .add_resource_path(cli.resources)
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()?;

    let app = RetroSnake::new(&mut ctx, &config)?;
    event::run(ctx, event_loop, app)
}

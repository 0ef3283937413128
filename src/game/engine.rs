use std::mem;

use log::{debug, info};
use rand::rngs::StdRng;

use super::{
    cell::{Cell, Direction},
    clock::Clock,
    config::{ConfigError, GameConfig},
    food::Food,
    rng::{game_rng, RandomSource},
    snake::Snake,
};

/// What ended a life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the grid
    Edge,
    /// Head ran into the rest of the body
    Tail,
}

/// Signals for the presentation layer, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    FoodEaten { at: Cell, score: u32 },
    GameOver { cause: Collision, final_score: u32 },
}

/// Owns the snake and the food and applies the rules between them
pub struct Game<R = StdRng> {
    snake: Snake,
    food: Food,
    rng: R,
    grid_size: i32,
    tick_interval: f64,
    last_tick: f64,
    score: u32,
    running: bool,
    events: Vec<GameEvent>,
}

impl Game<StdRng> {
    /// Start a game, seeding food placement from `config.seed`
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, game_rng(config.seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Start a game that draws food cells from `rng`.
    ///
    /// The configuration is validated first, so a bad start layout is an error
    /// rather than a broken snake.
    pub fn with_rng(config: &GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let snake = Snake::new(config.initial_body.clone(), config.initial_direction);
        let food = Food::new(&mut rng, config.grid_size, snake.body());

        info!(
            "new game on a {0}x{0} grid, food at ({1}, {2})",
            config.grid_size,
            food.position().x,
            food.position().y
        );

        Ok(Self {
            snake,
            food,
            rng,
            grid_size: config.grid_size,
            tick_interval: config.tick_interval,
            last_tick: 0.0,
            score: 0,
            running: true,
            events: Vec::new(),
        })
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    /// Steer the snake. An accepted direction also resumes a stopped game.
    pub fn handle_input(&mut self, direction: Direction) -> bool {
        if !self.snake.set_direction(direction) {
            return false;
        }
        debug!("heading {:?}", direction);
        self.running = true;
        true
    }

    /// One frame of simulation.
    ///
    /// Advances the snake when a full tick interval has passed since the last
    /// advance, then resolves food, edge and tail collisions in that order.
    pub fn tick(&mut self, clock: &impl Clock) {
        if !self.running {
            return;
        }

        let now = clock.now();
        if now - self.last_tick >= self.tick_interval {
            self.last_tick = now;
            self.snake.advance();
        }

        self.check_food_collision();
        self.check_edge_collision();
        self.check_tail_collision();
    }

    fn check_food_collision(&mut self) {
        let head = self.snake.head();
        if head != self.food.position() {
            return;
        }

        self.food
            .relocate(&mut self.rng, self.grid_size, self.snake.body());
        self.snake.request_growth();
        self.score += 1;

        debug!(
            "ate food at ({}, {}), score {}, next food at ({}, {})",
            head.x,
            head.y,
            self.score,
            self.food.position().x,
            self.food.position().y
        );
        self.events.push(GameEvent::FoodEaten {
            at: head,
            score: self.score,
        });
    }

    fn check_edge_collision(&mut self) {
        if !self.snake.head().is_within(self.grid_size) {
            self.game_over(Collision::Edge);
        }
    }

    fn check_tail_collision(&mut self) {
        if self.snake.head_hits_body() {
            self.game_over(Collision::Tail);
        }
    }

    fn game_over(&mut self, cause: Collision) {
        let final_score = self.score;
        info!("game over ({:?}), final score {}", cause, final_score);

        self.snake.reset();
        self.food
            .relocate(&mut self.rng, self.grid_size, self.snake.body());
        self.running = false;
        self.score = 0;

        self.events.push(GameEvent::GameOver { cause, final_score });
    }
}

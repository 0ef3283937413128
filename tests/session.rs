use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use retro_snake::game::{contains, Cell, Direction, Game, GameConfig, GameEvent, ManualClock};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// Totals collected over a session
#[derive(Default)]
struct Tally {
    eaten: u32,
    games_over: u32,
}

fn new_game(seed: u64) -> Game {
    let config = GameConfig {
        seed: Some(seed),
        ..Default::default()
    };
    Game::new(&config).unwrap()
}

/// Run one frame a full tick interval after the previous one and check every
/// rule that must hold afterwards
fn run_frame(game: &mut Game, clock: &ManualClock, tally: &mut Tally) {
    let config = GameConfig::default();
    let len_before = game.snake().len();
    let growing = game.snake().growth_pending();
    let was_running = game.is_running();
    let score_before = game.score();
    let head_before = game.snake().head();
    let heading = game.snake().direction();

    clock.advance(0.25);
    game.tick(clock);
    let events = game.drain_events();

    let game_over = events
        .iter()
        .any(|e| matches!(e, GameEvent::GameOver { .. }));
    let ate = events
        .iter()
        .any(|e| matches!(e, GameEvent::FoodEaten { .. }));

    if !was_running {
        assert!(events.is_empty());
        assert_eq!(game.snake().head(), head_before);
        return;
    }

    if game_over {
        tally.games_over += 1;
        let body: Vec<Cell> = game.snake().body().iter().copied().collect();
        assert_eq!(body, config.initial_body);
        assert_eq!(game.snake().direction(), config.initial_direction);
        assert_eq!(game.score(), 0);
        assert!(!game.is_running());
    } else {
        assert_eq!(game.snake().head(), head_before.step(heading));
        assert_eq!(game.snake().len(), len_before + usize::from(growing));

        let distinct: HashSet<Cell> = game.snake().body().iter().copied().collect();
        assert_eq!(distinct.len(), game.snake().len());
        assert!(game.snake().head().is_within(game.grid_size()));

        if ate {
            tally.eaten += 1;
            assert_eq!(game.score(), score_before + 1);
            assert!(game.snake().growth_pending());
        } else {
            assert_eq!(game.score(), score_before);
        }
    }

    assert!(!contains(game.snake().body(), game.food().position()));
    assert!(game.food().position().is_within(game.grid_size()));
}

/// Directions that bring the head closer to the food, best first
fn toward_food(game: &Game) -> Vec<Direction> {
    let head = game.snake().head();
    let food = game.food().position();
    let mut preferred = Vec::new();

    if food.x > head.x {
        preferred.push(Direction::Right);
    } else if food.x < head.x {
        preferred.push(Direction::Left);
    }
    if food.y > head.y {
        preferred.push(Direction::Down);
    } else if food.y < head.y {
        preferred.push(Direction::Up);
    }
    for d in DIRECTIONS {
        if !preferred.contains(&d) {
            preferred.push(d);
        }
    }
    preferred
}

#[test]
fn test_chasing_food_scores_and_grows() {
    let mut game = new_game(2024);
    let clock = ManualClock::new();
    let mut tally = Tally::default();

    for _ in 0..3000 {
        for d in toward_food(&game) {
            if game.handle_input(d) {
                break;
            }
        }
        run_frame(&mut game, &clock, &mut tally);
    }

    assert!(tally.eaten > 0);
}

#[test]
fn test_random_steering_keeps_rules() {
    let mut game = new_game(7);
    let clock = ManualClock::new();
    let mut steering = StdRng::seed_from_u64(99);
    let mut tally = Tally::default();

    for frame in 0..5000 {
        if frame % 3 == 0 {
            let d = DIRECTIONS[steering.gen_range(0..DIRECTIONS.len())];
            let before = game.snake().direction();
            if game.handle_input(d) {
                assert!(!d.is_opposite(before));
                assert!(game.is_running());
            } else {
                assert_eq!(game.snake().direction(), before);
            }
        }
        run_frame(&mut game, &clock, &mut tally);
    }

    assert!(tally.games_over > 0);
}

#[test]
fn test_game_stays_stopped_until_steered() {
    let mut game = new_game(1);
    let clock = ManualClock::new();
    let mut tally = Tally::default();

    // Straight right from x = 6 leaves the 20-wide grid on the 14th advance
    while tally.games_over == 0 {
        run_frame(&mut game, &clock, &mut tally);
    }
    assert!(!game.is_running());

    for _ in 0..20 {
        run_frame(&mut game, &clock, &mut tally);
    }
    assert_eq!(game.snake().head(), Cell::new(6, 9));

    assert!(game.handle_input(Direction::Up));
    run_frame(&mut game, &clock, &mut tally);
    assert_eq!(game.snake().head(), Cell::new(6, 8));
}

use std::collections::HashSet;

use log::warn;

use super::cell::{contains, Cell};
use super::rng::RandomSource;

/// The single piece of food on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    /// Place food on a random cell not covered by `snake_body`
    pub fn new<'a, R, I>(rng: &mut R, grid_size: i32, snake_body: I) -> Self
    where
        R: RandomSource + ?Sized,
        I: IntoIterator<Item = &'a Cell> + Clone,
    {
        let mut food = Self {
            position: Cell::new(0, 0),
        };
        food.relocate(rng, grid_size, snake_body);
        food
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Move the food to a uniformly random free cell of the grid.
    ///
    /// Samples until it hits a cell outside `snake_body`. When the snake covers
    /// every cell there is nowhere to go, so the position is kept and `false`
    /// is returned.
    pub fn relocate<'a, R, I>(&mut self, rng: &mut R, grid_size: i32, snake_body: I) -> bool
    where
        R: RandomSource + ?Sized,
        I: IntoIterator<Item = &'a Cell> + Clone,
    {
        if !has_free_cell(grid_size, snake_body.clone()) {
            warn!("no free cell left on the {0}x{0} grid, food stays put", grid_size);
            return false;
        }

        loop {
            let candidate = Cell::new(
                rng.uniform_int(0, grid_size - 1),
                rng.uniform_int(0, grid_size - 1),
            );
            if !contains(snake_body.clone(), candidate) {
                self.position = candidate;
                return true;
            }
        }
    }
}

fn has_free_cell<'a, I>(grid_size: i32, snake_body: I) -> bool
where
    I: IntoIterator<Item = &'a Cell>,
{
    let occupied: HashSet<Cell> = snake_body
        .into_iter()
        .filter(|c| c.is_within(grid_size))
        .copied()
        .collect();
    (occupied.len() as i64) < i64::from(grid_size) * i64::from(grid_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rng::game_rng;
    use std::collections::VecDeque;

    /// Replays a fixed list of values, then repeats the last one
    struct Scripted {
        values: VecDeque<i32>,
        last: i32,
    }

    impl Scripted {
        fn new(values: &[i32]) -> Self {
            Self {
                values: values.iter().copied().collect(),
                last: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
            if let Some(v) = self.values.pop_front() {
                self.last = v;
            }
            self.last.clamp(min, max)
        }
    }

    fn start_body() -> Vec<Cell> {
        vec![Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)]
    }

    #[test]
    fn test_occupied_samples_are_skipped() {
        // (5,9) and (4,9) are taken, (3,9) is free
        let mut rng = Scripted::new(&[5, 9, 4, 9, 3, 9]);
        let food = Food::new(&mut rng, 20, &start_body());
        assert_eq!(food.position(), Cell::new(3, 9));
    }

    #[test]
    fn test_food_never_on_snake() {
        let mut rng = game_rng(Some(3));
        let body = start_body();
        let mut food = Food::new(&mut rng, 20, &body);

        for _ in 0..500 {
            assert!(food.relocate(&mut rng, 20, &body));
            assert!(!contains(&body, food.position()));
            assert!(food.position().is_within(20));
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let body: Vec<Cell> = (0..3)
            .flat_map(|y| (0..3).map(move |x| Cell::new(x, y)))
            .filter(|c| *c != Cell::new(2, 1))
            .collect();
        let mut rng = game_rng(Some(11));

        let food = Food::new(&mut rng, 3, &body);

        assert_eq!(food.position(), Cell::new(2, 1));
    }

    #[test]
    fn test_full_grid_keeps_position() {
        let mut rng = game_rng(Some(5));
        let mut food = Food::new(&mut rng, 2, &[Cell::new(0, 0)]);
        let before = food.position();
        let full = vec![
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(0, 1),
        ];

        assert!(!food.relocate(&mut rng, 2, &full));
        assert_eq!(food.position(), before);
    }

    #[test]
    fn test_cells_off_grid_do_not_count_as_occupied() {
        let body = vec![Cell::new(-1, 0), Cell::new(0, 0)];
        let mut rng = game_rng(Some(9));
        let food = Food::new(&mut rng, 2, &body);
        assert_ne!(food.position(), Cell::new(0, 0));
    }
}

use std::collections::VecDeque;

use super::cell::{contains, Cell, Direction};

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at the front
    body: VecDeque<Cell>,
    /// Current heading, changed only through `set_direction`
    direction: Direction,
    growth_pending: bool,
    start_body: Vec<Cell>,
    start_direction: Direction,
}

impl Snake {
    /// Create a snake from its starting segments (head first) and heading.
    ///
    /// `start_body` must not be empty; `GameConfig::validate` guarantees this for
    /// configured games. The same layout is restored by `reset`.
    pub fn new(start_body: Vec<Cell>, start_direction: Direction) -> Self {
        assert!(!start_body.is_empty(), "snake body must not be empty");
        Self {
            body: start_body.iter().copied().collect(),
            direction: start_direction,
            growth_pending: false,
            start_body,
            start_direction,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    /// Body segments excluding the head
    pub fn segments_behind_head(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter().skip(1)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn growth_pending(&self) -> bool {
        self.growth_pending
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least one segment
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Move one cell along the current heading.
    ///
    /// A pending growth keeps the old tail in place, so the body ends one segment longer.
    pub fn advance(&mut self) {
        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);

        if self.growth_pending {
            self.growth_pending = false;
        } else {
            self.body.pop_back();
        }
    }

    pub fn request_growth(&mut self) {
        self.growth_pending = true;
    }

    /// Change heading unless `direction` is the exact opposite of the current one.
    ///
    /// Returns whether the new heading was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// True if the head shares a cell with any other segment
    pub fn head_hits_body(&self) -> bool {
        contains(self.segments_behind_head(), self.head())
    }

    pub fn reset(&mut self) {
        self.body = self.start_body.iter().copied().collect();
        self.direction = self.start_direction;
        self.growth_pending = false;
    }
}

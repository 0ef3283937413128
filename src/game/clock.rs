use std::cell::Cell;

/// Monotonic time source, in seconds since some fixed start
pub trait Clock {
    fn now(&self) -> f64;
}

/// A clock that only moves when told to.
///
/// Drives the game without a window, one explicit step at a time.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }

    pub fn set(&self, seconds: f64) {
        self.now.set(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

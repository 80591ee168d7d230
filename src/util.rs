use std::time::{Duration, SystemTime};

/// Polled by long running computations between independent units of work.
pub trait Stopper {
    fn stop(&mut self) -> bool;
    fn init(&mut self);
}

pub struct Timer {
    timer: SystemTime,
    duration: Duration,
}

impl Timer {
    pub fn new(duration: Duration) -> Self {
        Self {
            timer: SystemTime::now(),
            duration,
        }
    }
}

impl Stopper for Timer {
    fn stop(&mut self) -> bool {
        // a clock that went backwards counts as not elapsed
        self.timer
            .elapsed()
            .map(|elapsed| elapsed > self.duration)
            .unwrap_or(false)
    }

    fn init(&mut self) {
        self.timer = SystemTime::now();
    }
}

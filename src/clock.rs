//! Time sources
//!
//! The buff timers run on elapsed seconds, so the driver reads time through a
//! `Clock` and tests can swap in a `ManualClock` that never really sleeps.

use std::cell::Cell;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Seconds since an arbitrary fixed origin
    fn now(&self) -> f64;

    /// Wait before the next frame
    fn sleep(&self, secs: f32);
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }

    fn sleep(&self, secs: f32) {
        (**self).sleep(secs)
    }
}

/// Wall clock, origin at construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    fn sleep(&self, secs: f32) {
        if secs > 0.0 {
            std::thread::sleep(Duration::from_secs_f32(secs));
        }
    }
}

/// Hand-driven clock; `sleep` just moves time forward
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }

    fn sleep(&self, secs: f32) {
        self.advance(secs as f64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(1.0);
        assert_eq!(clock.now(), 1.0);
        clock.advance(0.5);
        assert_eq!(clock.now(), 1.5);
        clock.sleep(0.25);
        assert_eq!(clock.now(), 1.75);
        clock.set(10.0);
        assert_eq!((&clock).now(), 10.0);
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock::new();
        let a = clock.now();
        clock.sleep(0.001);
        assert!(clock.now() > a);
    }
}

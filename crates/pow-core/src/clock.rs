//! Wall-clock sources for timing searches.

use std::time::Instant;

/// A monotonic source of seconds.
///
/// Searches only ever subtract two readings, so the epoch is arbitrary.
pub trait Clock {
    /// Seconds elapsed since some fixed point in the past.
    fn now_seconds(&self) -> f64;
}

/// Clock backed by [`std::time::Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_seconds(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_seconds(&self) -> f64 {
        (**self).now_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.now_seconds();
        let second = clock.now_seconds();
        assert!(first >= 0.0);
        assert!(second >= first);
    }
}

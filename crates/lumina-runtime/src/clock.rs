//! Frame clock with delta clamping

use std::time::Instant;

/// Tracks elapsed time between display frames
pub struct FrameClock {
    /// Total elapsed time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Frames ticked so far
    pub frame: u64,
    /// Longest delta a single frame may report
    max_delta: f64,
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick
    first_tick: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            frame: 0,
            max_delta: 0.25,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock with a custom per-frame delta clamp
    pub fn with_max_delta(max_delta: f64) -> Self {
        Self {
            max_delta,
            ..Self::default()
        }
    }

    /// Advance from the wall clock. Call once per frame; returns the delta.
    ///
    /// Used by hosts with a real display loop, e.g. `lumina play --realtime`.
    /// The first call only starts the clock and reports zero.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = 0.0;
            self.frame += 1;
            return 0.0;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.advance(elapsed)
    }

    /// Advance by an explicit delta (headless or scripted runs).
    pub fn advance(&mut self, elapsed: f64) -> f64 {
        // Clamp to avoid a huge jump after a stall (max 250ms frame time by default)
        self.delta_time = elapsed.clamp(0.0, self.max_delta);
        self.total_time += self.delta_time;
        self.frame += 1;
        self.delta_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_defaults() {
        let clock = FrameClock::new();
        assert_eq!(clock.total_time, 0.0);
        assert_eq!(clock.delta_time, 0.0);
        assert_eq!(clock.frame, 0);
    }

    #[test]
    fn test_first_tick_zero_delta() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(), 0.0);
        assert_eq!(clock.frame, 1);
    }

    #[test]
    fn test_advance_accumulates() {
        let mut clock = FrameClock::new();
        for _ in 0..10 {
            clock.advance(0.1);
        }
        assert!((clock.total_time - 1.0).abs() < 1e-9);
        assert_eq!(clock.frame, 10);
    }

    #[test]
    fn test_tick_measures_elapsed_time() {
        let mut clock = FrameClock::new();
        clock.tick();
        std::thread::sleep(std::time::Duration::from_millis(20));
        let dt = clock.tick();
        assert!((0.02..=0.25).contains(&dt));
        assert_eq!(clock.frame, 2);
        assert_eq!(clock.total_time, dt);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut clock = FrameClock::with_max_delta(0.1);
        assert_eq!(clock.advance(3.0), 0.1);
        assert_eq!(clock.advance(-1.0), 0.0);
        assert!((clock.total_time - 0.1).abs() < 1e-12);
    }
}

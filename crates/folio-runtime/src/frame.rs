#![forbid(unsafe_code)]

//! Animation frame timing.
//!
//! Hosts report a monotonic timestamp per animation frame (the value a
//! `requestAnimationFrame` callback receives). [`FrameClock`] turns those
//! into per-frame deltas for spring integration. The first frame yields a
//! zero delta; a stalled tab that resumes after seconds yields at most
//! `max_dt`, so springs continue from where they were instead of jumping.

use std::time::Duration;

/// Default cap on a single frame delta.
pub const DEFAULT_MAX_FRAME_DT: Duration = Duration::from_millis(64);

/// Converts host frame timestamps into capped deltas.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Duration>,
    max_dt: Duration,
    frames: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FRAME_DT)
    }
}

impl FrameClock {
    #[must_use]
    pub const fn new(max_dt: Duration) -> Self {
        Self {
            last: None,
            max_dt,
            frames: 0,
        }
    }

    /// Record a frame at monotonic time `now` and return the delta since the
    /// previous frame. Timestamps that go backwards yield zero.
    pub fn frame(&mut self, now: Duration) -> Duration {
        self.frames += 1;
        let dt = match self.last {
            Some(prev) => now.saturating_sub(prev).min(self.max_dt),
            None => Duration::ZERO,
        };
        self.last = Some(self.last.map_or(now, |prev| prev.max(now)));
        dt
    }

    /// Number of frames recorded so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub const fn max_dt(&self) -> Duration {
        self.max_dt
    }

    /// Forget the last timestamp; the next frame yields zero.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn first_frame_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.frame(ms(1000)), Duration::ZERO);
        assert_eq!(clock.frame(ms(1016)), ms(16));
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn stalled_frames_are_capped() {
        let mut clock = FrameClock::new(ms(50));
        clock.frame(ms(0));
        assert_eq!(clock.frame(ms(5000)), ms(50));
    }

    #[test]
    fn backwards_time_yields_zero() {
        let mut clock = FrameClock::default();
        clock.frame(ms(100));
        assert_eq!(clock.frame(ms(90)), Duration::ZERO);
        assert_eq!(clock.frame(ms(116)), ms(16));
    }

    #[test]
    fn reset_restarts() {
        let mut clock = FrameClock::default();
        clock.frame(ms(0));
        clock.reset();
        assert_eq!(clock.frame(ms(500)), Duration::ZERO);
    }
}

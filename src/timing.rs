//! Fixed frame-rate pacing.

use std::time::{Duration, Instant};

use crate::error::{FoucaultError, Result};

/// Tracks the current frame and how much of its time budget is left.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    frame: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    /// Create a limiter targeting `fps` frames per second.
    pub fn new(fps: u32) -> Result<Self> {
        if fps == 0 {
            return Err(FoucaultError::invalid_config("target FPS must be at least 1"));
        }
        Ok(Self {
            frame: Duration::from_secs(1) / fps,
            frame_start: Instant::now(),
        })
    }

    /// Mark the start of a frame.
    pub fn begin_frame(&mut self, now: Instant) {
        self.frame_start = now;
    }

    /// Time left in the current frame at `now`.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.frame
            .saturating_sub(now.saturating_duration_since(self.frame_start))
    }

    /// Length of one frame.
    pub fn frame_duration(&self) -> Duration {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_counts_down_to_zero() {
        let mut limiter = FrameLimiter::new(50).unwrap();
        let start = Instant::now();
        limiter.begin_frame(start);

        assert_eq!(limiter.frame_duration(), Duration::from_millis(20));
        assert_eq!(limiter.remaining(start), Duration::from_millis(20));
        assert_eq!(limiter.remaining(start + Duration::from_millis(15)), Duration::from_millis(5));
        assert_eq!(limiter.remaining(start + Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn zero_fps_is_rejected() {
        assert!(FrameLimiter::new(0).is_err());
    }
}

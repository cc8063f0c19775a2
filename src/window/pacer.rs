//! Frame pacing
//!
//! One frame per interval, with no catch-up: a late frame makes the next one
//! start immediately, and the schedule restarts from there.

use std::time::{Duration, Instant};

/// Schedules redraws at a fixed frame rate.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next_frame: Option<Instant>,
}

impl FramePacer {
    /// Pace to `frame_rate` frames per second. Non-positive rates disable
    /// pacing.
    pub fn new(frame_rate: f64) -> Self {
        let interval = if frame_rate > 0.0 {
            Duration::from_secs_f64(1.0 / frame_rate)
        } else {
            Duration::ZERO
        };
        Self {
            interval,
            next_frame: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next frame should start. None until the first frame.
    pub fn deadline(&self) -> Option<Instant> {
        self.next_frame
    }

    /// Whether a frame should start at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        self.next_frame.map_or(true, |deadline| now >= deadline)
    }

    /// Record that a frame started at `now`.
    pub fn begin_frame(&mut self, now: Instant) {
        self.next_frame = Some(now + self.interval);
    }
}

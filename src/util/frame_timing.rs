use web_time::{Duration, Instant};

/// Interval between FPS log lines.
const LOG_INTERVAL: Duration = Duration::from_secs(5);

/// Wall-clock frame delta and smoothed FPS.
#[derive(Debug)]
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Last time the FPS was logged
    last_log: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer starting now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            last_log: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Mark the start of a frame and return seconds since the previous one.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed);

        if now.duration_since(self.last_log) >= LOG_INTERVAL {
            self.last_log = now;
            log::debug!("{:.1} fps", self.smoothed_fps);
        }
        elapsed.as_secs_f32()
    }

    /// Fold one frame duration into the smoothed FPS.
    pub fn record(&mut self, elapsed: Duration) {
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steady_frames_converge_to_their_rate() {
        let mut timing = FrameTiming::new();
        for _ in 0..500 {
            timing.record(Duration::from_millis(10));
        }
        assert!((timing.fps() - 100.0).abs() < 0.5);
    }

    #[test]
    fn zero_length_frame_is_ignored() {
        let mut timing = FrameTiming::new();
        timing.record(Duration::ZERO);
        assert_eq!(timing.fps(), 60.0);
    }

    #[test]
    fn tick_returns_non_negative_delta() {
        let mut timing = FrameTiming::new();
        assert!(timing.tick() >= 0.0);
    }
}

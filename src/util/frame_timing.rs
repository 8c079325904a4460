use web_time::{Duration, Instant};

/// Frame pacing and a smoothed FPS readout.
///
/// The animation advances one frame per rendered frame, so pacing the
/// renderer also fixes the animation speed.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Last time [`report_due`](Self::report_due) fired
    last_report: Instant,
    /// Exponential moving average of the frame rate
    smoothed_fps: f32,
    /// Weight of the newest sample (0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Timer targeting `target_fps` frames per second (0 = unlimited).
    pub fn new(target_fps: u32) -> Self {
        let now = Instant::now();
        Self {
            target_fps,
            min_frame_duration: Self::frame_duration(target_fps),
            last_frame: now,
            last_report: now,
            smoothed_fps: target_fps.max(1) as f32,
            smoothing: 0.05,
        }
    }

    fn frame_duration(target_fps: u32) -> Duration {
        if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        }
    }

    /// Change the target rate.
    pub fn set_target_fps(&mut self, target_fps: u32) {
        self.target_fps = target_fps;
        self.min_frame_duration = Self::frame_duration(target_fps);
    }

    /// Whether enough time has passed since the last frame to render
    /// another.
    pub fn should_render(&self) -> bool {
        self.target_fps == 0 || self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Call after rendering to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if frame_time > 0.0 {
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + (1.0 / frame_time) * self.smoothing;
        }
    }

    /// Smoothed frames per second.
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// `true` at most once per `interval`, for throttled status output.
    pub fn report_due(&mut self, interval: Duration) -> bool {
        let now = Instant::now();
        if now.duration_since(self.last_report) >= interval {
            self.last_report = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
    }

    #[test]
    fn limited_waits_for_the_frame_budget() {
        let mut timing = FrameTiming::new(1);
        timing.end_frame();
        assert!(!timing.should_render());
        timing.set_target_fps(0);
        assert!(timing.should_render());
    }

    #[test]
    fn report_is_throttled() {
        let mut timing = FrameTiming::new(60);
        assert!(timing.report_due(Duration::ZERO));
        assert!(!timing.report_due(Duration::from_secs(3600)));
    }

    #[test]
    fn fps_starts_at_target() {
        assert_eq!(FrameTiming::new(60).fps(), 60.0);
    }
}

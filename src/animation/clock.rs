use crate::options::AnimationOptions;

/// Looping frame counter.
///
/// While running, each [`tick`](Self::tick) advances `time` by one frame
/// until it reaches `frames`; the tick after that wraps back to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationClock {
    time: u32,
    frames: u32,
    running: bool,
}

impl AnimationClock {
    /// Clock at frame 0.
    #[must_use]
    pub fn new(options: &AnimationOptions) -> Self {
        Self {
            time: 0,
            frames: options.frames.max(1),
            running: options.run_on_start,
        }
    }

    /// Current frame, in `0..=frames`.
    #[must_use]
    pub fn time(&self) -> u32 {
        self.time
    }

    /// Loop length.
    #[must_use]
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Whether ticks advance the clock.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start or stop the clock. The current frame is kept.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Change the loop length, pulling `time` back into range.
    pub fn set_frames(&mut self, frames: u32) {
        self.frames = frames.max(1);
        self.time = self.time.min(self.frames);
    }

    /// Advance one frame if running. Returns whether the frame changed.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.time = if self.time < self.frames {
            self.time + 1
        } else {
            0
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(frames: u32) -> AnimationClock {
        AnimationClock::new(&AnimationOptions {
            frames,
            run_on_start: true,
        })
    }

    #[test]
    fn stopped_clock_does_not_advance() {
        let mut c = AnimationClock::new(&AnimationOptions::default());
        assert!(!c.is_running());
        assert!(!c.tick());
        assert_eq!(c.time(), 0);
    }

    #[test]
    fn wraps_after_reaching_frames() {
        let mut c = clock(3);
        let seen: Vec<u32> = (0..5)
            .map(|_| {
                let _ = c.tick();
                c.time()
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 3, 0, 1]);
    }

    #[test]
    fn toggle_keeps_position() {
        let mut c = clock(600);
        let _ = c.tick();
        let _ = c.tick();
        c.toggle();
        assert!(!c.tick());
        assert_eq!(c.time(), 2);
        c.toggle();
        assert!(c.tick());
        assert_eq!(c.time(), 3);
    }

    #[test]
    fn shrinking_the_loop_clamps_time() {
        let mut c = clock(600);
        for _ in 0..10 {
            let _ = c.tick();
        }
        c.set_frames(4);
        assert_eq!(c.time(), 4);
        let _ = c.tick();
        assert_eq!(c.time(), 0);
    }

    #[test]
    fn zero_frames_is_treated_as_one() {
        let c = clock(0);
        assert_eq!(c.frames(), 1);
    }
}

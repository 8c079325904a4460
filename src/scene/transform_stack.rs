use glam::Mat4;

/// Scoped model-transform stack.
///
/// A local frame can only be entered through [`with_local`](Self::with_local),
/// which restores the parent frame when the closure returns. Pushes and pops
/// therefore always pair up; the counters exist so callers can assert it.
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: Mat4,
    depth: usize,
    enters: usize,
    exits: usize,
}

impl TransformStack {
    /// Stack at the identity frame.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Mat4::IDENTITY,
            depth: 0,
            enters: 0,
            exits: 0,
        }
    }

    /// Model matrix of the current frame.
    #[must_use]
    pub fn current(&self) -> Mat4 {
        self.current
    }

    /// Nesting depth (0 at the root).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Total frames entered so far.
    #[must_use]
    pub fn enters(&self) -> usize {
        self.enters
    }

    /// Total frames exited so far.
    #[must_use]
    pub fn exits(&self) -> usize {
        self.exits
    }

    /// Run `f` inside the frame `current * local`, then restore the parent.
    pub fn with_local<R>(&mut self, local: Mat4, f: impl FnOnce(&mut Self) -> R) -> R {
        let parent = self.current;
        self.current = parent * local;
        self.depth += 1;
        self.enters += 1;

        let result = f(self);

        self.current = parent;
        self.depth -= 1;
        self.exits += 1;
        result
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

//! Discrete-time exponential smoothing of wheel input.
//!
//! `target` accumulates raw deltas without bounds. Over very long sessions it
//! can grow large enough to lose f32 precision in `current`; nothing wraps or
//! clamps it here.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Backward,
    Forward,
}

impl ScrollDirection {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            ScrollDirection::Backward => -1.0,
            ScrollDirection::Forward => 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScrollState {
    target: f32,
    current: f32,
    direction: ScrollDirection,
    speed: f32,
    lerp: f32,
    decay: f32,
}

impl ScrollState {
    pub fn new(lerp: f32, decay: f32) -> Self {
        Self {
            target: 0.0,
            current: 0.0,
            direction: ScrollDirection::Backward,
            speed: 0.0,
            lerp,
            decay,
        }
    }

    /// Apply one normalized input delta.
    pub fn push(&mut self, delta: f32) {
        if !delta.is_finite() {
            log::warn!("[scroll] ignoring non-finite delta {delta}");
            return;
        }
        self.target += delta;
        self.speed += delta;
        if delta > 0.0 {
            self.direction = ScrollDirection::Forward;
        } else if delta < 0.0 {
            self.direction = ScrollDirection::Backward;
        }
    }

    /// Advance one rendered frame.
    pub fn tick(&mut self) {
        self.current = lerp(self.current, self.target, self.lerp);
        self.speed *= self.decay;
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out, fast start and gentle landing.
    #[default]
    QuadOut,
    CubicInOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) * 0.5
                }
            }
        }
    }
}

/// Time-based interpolation between two scalars.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    ease: Ease,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            ease,
        }
    }

    /// Advance by `dt` and return the eased value.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// The `[0, 1]` reveal scalar behind `uProgress`.
#[derive(Clone, Debug, Default)]
pub struct IntroProgress {
    value: f32,
    tween: Option<Tween>,
}

impl IntroProgress {
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.tween.is_some()
    }

    /// Direct override; cancels a running tween.
    pub fn set(&mut self, value: f32) {
        self.tween = None;
        self.value = value.clamp(0.0, 1.0);
    }

    pub fn reset(&mut self) {
        self.set(0.0);
    }

    /// Start animating from the current value to 1.
    pub fn play(&mut self, duration: Duration, ease: Ease) {
        self.tween = Some(Tween::new(self.value, 1.0, duration, ease));
    }

    /// Step the running tween. Returns true on the frame it completes.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        self.value = tween.advance(dt).clamp(0.0, 1.0);
        if tween.is_finished() {
            self.tween = None;
            return true;
        }
        false
    }
}

use std::time::{Duration, Instant};

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// A vertical offset (in lines) animating from `from` towards `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: i32,
    pub to: i32,
    pub start: Instant,
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    pub fn new(from: i32, to: i32, start: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Progress in `[0, 1]` at `now`. Zero-length transitions are complete.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Interpolated value at `now`, rounded to whole lines.
    pub fn value(&self, now: Instant) -> i32 {
        let t = self.easing.apply(self.progress(now));
        let value = self.from as f32 + (self.to - self.from) as f32 * t;
        value.round() as i32
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

//! Easing curves and single-value interpolation.

#[cfg(test)]
#[path = "tween_test.rs"]
mod tween_test;

use std::f64::consts::PI;

/// Easing curve applied to linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Slow start and end: `0.5 - cos(p * pi) / 2`.
    #[default]
    Swing,
    /// Constant speed.
    Linear,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, p: f64) -> f64 {
        match self {
            Self::Swing => 0.5 - (p * PI).cos() / 2.0,
            Self::Linear => p,
        }
    }
}

/// A value moving from `from` to `to` over `duration_ms`, starting at `start_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    /// Linear progress at `now_ms`, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Interpolated value at `now_ms`. Exactly `to` once finished.
    #[must_use]
    pub fn value_at(&self, now_ms: f64) -> f64 {
        let p = self.progress(now_ms);
        if p >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(p)
    }

    #[must_use]
    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

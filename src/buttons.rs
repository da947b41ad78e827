//! Project buttons: the label slides open on hover and closes on leave.
//!
//! Every transition stops the label's running animation before starting the
//! next, so fast enter/leave toggling never builds a backlog.

#[cfg(test)]
#[path = "buttons_test.rs"]
mod buttons_test;

use crate::consts::LABEL_CLOSED_WIDTH_PX;
use crate::timeline::{AnimationId, Target, Timeline};
use crate::tween::Easing;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectButtons {
    count: usize,
    open_px: f64,
    duration_ms: f64,
}

impl ProjectButtons {
    #[must_use]
    pub fn new(count: usize, open_px: f64, duration_ms: f64) -> Self {
        Self { count, open_px, duration_ms }
    }

    /// Seed the timeline with the measured label widths.
    pub fn seed(&self, timeline: &mut Timeline, widths: &[f64]) {
        for index in 0..self.count {
            let width = widths.get(index).copied().unwrap_or(LABEL_CLOSED_WIDTH_PX);
            timeline.set_value(Target::Label(index), width);
        }
    }

    pub fn enter(&self, timeline: &mut Timeline, index: usize, now_ms: f64) -> Option<AnimationId> {
        self.restart(timeline, index, self.open_px, now_ms)
    }

    pub fn leave(&self, timeline: &mut Timeline, index: usize, now_ms: f64) -> Option<AnimationId> {
        self.restart(timeline, index, LABEL_CLOSED_WIDTH_PX, now_ms)
    }

    fn restart(&self, timeline: &mut Timeline, index: usize, to: f64, now_ms: f64) -> Option<AnimationId> {
        if index >= self.count {
            return None;
        }
        let target = Target::Label(index);
        if let Some(cancelled) = timeline.stop(target, now_ms) {
            log::trace!("label {index} animation {} interrupted", cancelled.id);
        }
        Some(timeline.animate(target, to, self.duration_ms, Easing::Swing, now_ms))
    }
}

//! Full-page scrolling: one wheel gesture moves the viewport by one page.
//!
//! The scroll lock is private to [`FullPageScroller`]. It is taken when a
//! gesture starts a page animation and given back only by that animation's
//! completion event, so at most one page animation is ever in flight.
//! Gestures arriving while the lock is held are dropped, not queued.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::timeline::{AnimationId, CompletionEvent, Target, Timeline};
use crate::tween::Easing;

/// Scroll intent of a wheel gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Offset one page away from `scroll_top`. Not clamped to the document.
    #[must_use]
    pub fn step(self, scroll_top: f64, page_height: f64) -> f64 {
        match self {
            Self::Up => scroll_top - page_height,
            Self::Down => scroll_top + page_height,
        }
    }
}

/// Wheel input as reported by the browser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelInput {
    /// `mousewheel` / `DOMMouseScroll`: `wheelDelta` is positive and `detail`
    /// negative when scrolling up.
    Legacy { wheel_delta: f64, detail: f64 },
    /// `wheel`: `deltaY` is negative when scrolling up.
    Standard { delta_y: f64 },
}

impl WheelInput {
    /// Anything that is not clearly upward counts as downward.
    #[must_use]
    pub fn direction(self) -> Direction {
        let up = match self {
            Self::Legacy { wheel_delta, detail } => wheel_delta > 0.0 || detail < 0.0,
            Self::Standard { delta_y } => delta_y < 0.0,
        };
        if up { Direction::Up } else { Direction::Down }
    }
}

/// What a wheel gesture did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelOutcome {
    /// A page animation started towards `to`.
    Started { id: AnimationId, to: f64 },
    /// The lock was held; the gesture was discarded.
    Dropped,
}

#[derive(Debug, Default)]
struct ScrollLock {
    holder: Option<AnimationId>,
}

/// Owner of the scroll lock and the wheel-to-animation transition.
#[derive(Debug, Default)]
pub struct FullPageScroller {
    lock: ScrollLock,
}

impl FullPageScroller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.lock.holder.is_some()
    }

    /// Handle one wheel gesture: start a page animation if the lock is free.
    ///
    /// `scroll_top` is the window offset the browser reports at gesture time.
    /// The step starts from it, since the browser clamps offsets past either
    /// end of the document without reporting a scroll.
    pub fn on_wheel(
        &mut self,
        timeline: &mut Timeline,
        input: WheelInput,
        scroll_top: f64,
        page_height: f64,
        duration_ms: f64,
        now_ms: f64,
    ) -> WheelOutcome {
        if let Some(holder) = self.lock.holder {
            log::debug!("wheel dropped: page animation {holder} in flight");
            return WheelOutcome::Dropped;
        }
        if !timeline.is_running(Target::Scroll) {
            timeline.set_value(Target::Scroll, scroll_top);
        }
        let to = input.direction().step(scroll_top, page_height);
        let id = timeline.animate(Target::Scroll, to, duration_ms, Easing::Swing, now_ms);
        self.lock.holder = Some(id);
        log::debug!("page animation {id} started: {scroll_top} -> {to}");
        WheelOutcome::Started { id, to }
    }

    /// Release the lock if `event` ends the animation that holds it.
    ///
    /// Returns `true` when the lock was released.
    pub fn on_completion(&mut self, event: &CompletionEvent) -> bool {
        if self.lock.holder != Some(event.id) {
            return false;
        }
        self.lock.holder = None;
        log::debug!("page animation {} ended ({:?}), lock released", event.id, event.completion);
        true
    }
}

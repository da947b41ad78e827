//! Per-target animation queues with explicit completion events.
//!
//! Each animated property (the page scroll offset, a project label's width)
//! is a [`Target`] with its own queue. Only the head of a queue runs; its
//! start value is read from the target's current value at the moment it
//! starts, not when it was enqueued. Every animation ends in exactly one
//! [`CompletionEvent`]: `Finished` when it reaches its end value, `Cancelled`
//! when [`Timeline::stop`] abandons it mid-flight.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use std::collections::{BTreeMap, VecDeque};

use crate::tween::{Easing, Tween};

/// Identifier handed out by [`Timeline::animate`].
pub type AnimationId = u64;

/// An animated property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Target {
    /// The window's vertical scroll offset.
    Scroll,
    /// Width of the label inside project button `n`.
    Label(usize),
}

/// How an animation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Finished,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionEvent {
    pub id: AnimationId,
    pub target: Target,
    pub completion: Completion,
}

/// Result of advancing the timeline to a point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameUpdate {
    /// New values for targets that moved, in target order.
    pub values: Vec<(Target, f64)>,
    /// Animations that finished during this frame.
    pub completed: Vec<CompletionEvent>,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    id: AnimationId,
    to: f64,
    duration_ms: f64,
    easing: Easing,
}

#[derive(Debug, Clone, Default)]
struct Track {
    value: f64,
    running: Option<(AnimationId, Tween)>,
    queue: VecDeque<Pending>,
}

impl Track {
    fn start_next(&mut self, now_ms: f64) {
        if self.running.is_some() {
            return;
        }
        if let Some(next) = self.queue.pop_front() {
            let tween = Tween {
                from: self.value,
                to: next.to,
                start_ms: now_ms,
                duration_ms: next.duration_ms,
                easing: next.easing,
            };
            self.running = Some((next.id, tween));
        }
    }
}

/// All running and queued animations, keyed by target.
#[derive(Debug, Default)]
pub struct Timeline {
    tracks: BTreeMap<Target, Track>,
    next_id: AnimationId,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value observed outside the timeline (a measured width, a
    /// scroll offset reported by the browser).
    pub fn set_value(&mut self, target: Target, value: f64) {
        self.tracks.entry(target).or_default().value = value;
    }

    /// Last known value of `target`, if it was ever set or animated.
    #[must_use]
    pub fn value(&self, target: Target) -> Option<f64> {
        self.tracks.get(&target).map(|track| track.value)
    }

    /// Queue an animation of `target` towards `to`. Starts immediately when
    /// nothing is running on that target.
    pub fn animate(&mut self, target: Target, to: f64, duration_ms: f64, easing: Easing, now_ms: f64) -> AnimationId {
        self.next_id += 1;
        let id = self.next_id;
        let track = self.tracks.entry(target).or_default();
        track.queue.push_back(Pending { id, to, duration_ms, easing });
        track.start_next(now_ms);
        id
    }

    /// Abandon the running animation on `target`, leaving the value where it
    /// is, and start the next queued one.
    pub fn stop(&mut self, target: Target, now_ms: f64) -> Option<CompletionEvent> {
        let track = self.tracks.get_mut(&target)?;
        let (id, tween) = track.running.take()?;
        track.value = tween.value_at(now_ms);
        track.start_next(now_ms);
        Some(CompletionEvent { id, target, completion: Completion::Cancelled })
    }

    /// Advance every running animation to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> FrameUpdate {
        let mut update = FrameUpdate::default();
        for (target, track) in &mut self.tracks {
            let Some((id, tween)) = track.running else {
                continue;
            };
            track.value = tween.value_at(now_ms);
            update.values.push((*target, track.value));
            if tween.is_finished(now_ms) {
                track.running = None;
                update.completed.push(CompletionEvent { id, target: *target, completion: Completion::Finished });
                track.start_next(now_ms);
            }
        }
        update
    }

    /// Whether `target` has an animation in flight.
    #[must_use]
    pub fn is_running(&self, target: Target) -> bool {
        self.tracks.get(&target).is_some_and(|track| track.running.is_some())
    }

    /// Whether nothing is running or queued on any target.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.tracks.values().all(|track| track.running.is_none() && track.queue.is_empty())
    }

    /// End value of the animation in flight on `target`.
    #[must_use]
    pub fn destination(&self, target: Target) -> Option<f64> {
        self.tracks.get(&target)?.running.map(|(_, tween)| tween.to)
    }
}

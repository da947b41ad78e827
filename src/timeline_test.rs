#![allow(clippy::float_cmp)]

use super::*;

fn linear(timeline: &mut Timeline, target: Target, to: f64, duration_ms: f64, now_ms: f64) -> AnimationId {
    timeline.animate(target, to, duration_ms, Easing::Linear, now_ms)
}

// =============================================================
// Values
// =============================================================

#[test]
fn unknown_target_has_no_value() {
    let timeline = Timeline::new();
    assert_eq!(timeline.value(Target::Scroll), None);
}

#[test]
fn set_value_is_visible() {
    let mut timeline = Timeline::new();
    timeline.set_value(Target::Label(2), 42.0);
    assert_eq!(timeline.value(Target::Label(2)), Some(42.0));
}

#[test]
fn new_timeline_is_idle() {
    assert!(Timeline::new().is_idle());
}

// =============================================================
// Animate / tick
// =============================================================

#[test]
fn animate_starts_from_current_value() {
    let mut timeline = Timeline::new();
    timeline.set_value(Target::Scroll, 200.0);
    linear(&mut timeline, Target::Scroll, 1000.0, 1000.0, 0.0);

    let update = timeline.tick(500.0);
    assert_eq!(update.values, vec![(Target::Scroll, 600.0)]);
    assert!(update.completed.is_empty());
    assert!(timeline.is_running(Target::Scroll));
}

#[test]
fn tick_reports_finished_once_with_exact_value() {
    let mut timeline = Timeline::new();
    let id = linear(&mut timeline, Target::Scroll, 800.0, 1000.0, 0.0);

    let update = timeline.tick(1200.0);
    assert_eq!(update.values, vec![(Target::Scroll, 800.0)]);
    assert_eq!(
        update.completed,
        vec![CompletionEvent { id, target: Target::Scroll, completion: Completion::Finished }]
    );
    assert!(timeline.is_idle());

    let again = timeline.tick(1300.0);
    assert!(again.values.is_empty());
    assert!(again.completed.is_empty());
}

#[test]
fn ids_are_unique() {
    let mut timeline = Timeline::new();
    let a = linear(&mut timeline, Target::Scroll, 1.0, 10.0, 0.0);
    let b = linear(&mut timeline, Target::Label(0), 1.0, 10.0, 0.0);
    assert_ne!(a, b);
}

#[test]
fn targets_animate_independently() {
    let mut timeline = Timeline::new();
    linear(&mut timeline, Target::Scroll, 1000.0, 1000.0, 0.0);
    linear(&mut timeline, Target::Label(1), 100.0, 500.0, 0.0);

    let update = timeline.tick(500.0);
    assert_eq!(update.values, vec![(Target::Scroll, 500.0), (Target::Label(1), 100.0)]);
    assert_eq!(update.completed.len(), 1);
    assert_eq!(update.completed[0].target, Target::Label(1));
}

#[test]
fn second_animation_queues_behind_first() {
    let mut timeline = Timeline::new();
    let first = linear(&mut timeline, Target::Scroll, 400.0, 400.0, 0.0);
    let second = linear(&mut timeline, Target::Scroll, 1200.0, 800.0, 100.0);

    assert_eq!(timeline.destination(Target::Scroll), Some(400.0));

    let update = timeline.tick(400.0);
    assert_eq!(update.completed[0].id, first);
    assert_eq!(timeline.destination(Target::Scroll), Some(1200.0));

    // Second starts at t=400 from 400.
    let update = timeline.tick(800.0);
    assert_eq!(update.values, vec![(Target::Scroll, 800.0)]);

    let update = timeline.tick(1200.0);
    assert_eq!(update.completed[0].id, second);
    assert_eq!(timeline.value(Target::Scroll), Some(1200.0));
}

// =============================================================
// Stop
// =============================================================

#[test]
fn stop_idle_target_is_none() {
    let mut timeline = Timeline::new();
    assert_eq!(timeline.stop(Target::Scroll, 0.0), None);
    timeline.set_value(Target::Scroll, 5.0);
    assert_eq!(timeline.stop(Target::Scroll, 0.0), None);
}

#[test]
fn stop_cancels_and_freezes_value() {
    let mut timeline = Timeline::new();
    let id = linear(&mut timeline, Target::Label(0), 100.0, 500.0, 0.0);

    let cancelled = timeline.stop(Target::Label(0), 250.0);
    assert_eq!(cancelled, Some(CompletionEvent { id, target: Target::Label(0), completion: Completion::Cancelled }));
    assert_eq!(timeline.value(Target::Label(0)), Some(50.0));
    assert!(timeline.is_idle());

    // A cancelled animation never reports Finished later.
    let update = timeline.tick(1000.0);
    assert!(update.completed.is_empty());
}

#[test]
fn stop_then_animate_restarts_from_interrupted_value() {
    let mut timeline = Timeline::new();
    linear(&mut timeline, Target::Label(0), 100.0, 500.0, 0.0);
    timeline.stop(Target::Label(0), 250.0);
    linear(&mut timeline, Target::Label(0), 0.0, 500.0, 250.0);

    let update = timeline.tick(500.0);
    assert_eq!(update.values, vec![(Target::Label(0), 25.0)]);
}

#[test]
fn stop_starts_next_queued() {
    let mut timeline = Timeline::new();
    linear(&mut timeline, Target::Scroll, 800.0, 1000.0, 0.0);
    let queued = linear(&mut timeline, Target::Scroll, 0.0, 1000.0, 0.0);

    timeline.stop(Target::Scroll, 500.0);
    assert!(timeline.is_running(Target::Scroll));
    assert_eq!(timeline.destination(Target::Scroll), Some(0.0));

    let update = timeline.tick(1500.0);
    assert_eq!(update.completed[0].id, queued);
}

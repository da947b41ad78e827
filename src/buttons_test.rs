#![allow(clippy::float_cmp)]

use super::*;

fn buttons() -> ProjectButtons {
    ProjectButtons::new(3, 100.0, 500.0)
}

#[test]
fn seed_uses_measured_widths_and_defaults_missing_to_zero() {
    let mut timeline = Timeline::new();
    buttons().seed(&mut timeline, &[12.0]);
    assert_eq!(timeline.value(Target::Label(0)), Some(12.0));
    assert_eq!(timeline.value(Target::Label(2)), Some(0.0));
}

#[test]
fn enter_animates_towards_open_width() {
    let mut timeline = Timeline::new();
    let buttons = buttons();
    buttons.seed(&mut timeline, &[]);

    assert!(buttons.enter(&mut timeline, 1, 0.0).is_some());
    assert_eq!(timeline.destination(Target::Label(1)), Some(100.0));

    timeline.tick(500.0);
    assert_eq!(timeline.value(Target::Label(1)), Some(100.0));
}

#[test]
fn leave_animates_towards_zero() {
    let mut timeline = Timeline::new();
    let buttons = buttons();
    buttons.seed(&mut timeline, &[100.0]);

    buttons.leave(&mut timeline, 0, 0.0);
    assert_eq!(timeline.destination(Target::Label(0)), Some(0.0));
    timeline.tick(600.0);
    assert_eq!(timeline.value(Target::Label(0)), Some(0.0));
}

#[test]
fn rapid_toggle_interrupts_without_backlog() {
    let mut timeline = Timeline::new();
    let buttons = buttons();
    buttons.seed(&mut timeline, &[]);

    buttons.enter(&mut timeline, 0, 0.0);
    buttons.leave(&mut timeline, 0, 100.0);
    buttons.enter(&mut timeline, 0, 200.0);

    assert_eq!(timeline.destination(Target::Label(0)), Some(100.0));

    // One animation left: it finishes 500ms after the last enter, then idle.
    let update = timeline.tick(700.0);
    assert_eq!(update.completed.len(), 1);
    assert!(timeline.is_idle());
    assert_eq!(timeline.value(Target::Label(0)), Some(100.0));
}

#[test]
fn out_of_range_button_is_noop() {
    let mut timeline = Timeline::new();
    assert_eq!(buttons().enter(&mut timeline, 3, 0.0), None);
    assert!(timeline.is_idle());
}

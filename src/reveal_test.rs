use super::*;

#[test]
fn starts_hidden() {
    let reveal = ExplainReveal::new(3, ExplainHide::All);
    assert_eq!(reveal.visible_count(), 0);
}

#[test]
fn enter_shows_only_that_item() {
    let mut reveal = ExplainReveal::new(3, ExplainHide::All);
    assert_eq!(reveal.enter(1), Some(RevealChange::Show(1)));
    assert!(reveal.is_visible(1));
    assert_eq!(reveal.visible_count(), 1);
}

#[test]
fn leave_hides_all() {
    let mut reveal = ExplainReveal::new(3, ExplainHide::All);
    reveal.enter(0);
    reveal.enter(2);
    assert_eq!(reveal.leave(2), Some(RevealChange::HideAll));
    assert_eq!(reveal.visible_count(), 0);
}

#[test]
fn moving_between_neighbours_hides_all_then_shows_one() {
    let mut reveal = ExplainReveal::new(3, ExplainHide::All);
    reveal.enter(0);
    let changes = [reveal.leave(0), reveal.enter(1)];
    assert_eq!(changes, [Some(RevealChange::HideAll), Some(RevealChange::Show(1))]);
    assert!(!reveal.is_visible(0));
    assert!(reveal.is_visible(1));
}

#[test]
fn leave_with_own_policy_hides_only_left_item() {
    let mut reveal = ExplainReveal::new(3, ExplainHide::Own);
    reveal.enter(0);
    reveal.enter(1);
    assert_eq!(reveal.leave(0), Some(RevealChange::Hide(0)));
    assert!(reveal.is_visible(1));
}

#[test]
fn out_of_range_enter_is_noop() {
    let mut reveal = ExplainReveal::new(2, ExplainHide::All);
    assert_eq!(reveal.enter(5), None);
    assert_eq!(reveal.visible_count(), 0);
    assert!(!reveal.is_visible(5));
}

#[test]
fn leave_hides_all_even_out_of_range() {
    let mut reveal = ExplainReveal::new(2, ExplainHide::All);
    reveal.enter(0);
    assert_eq!(reveal.leave(9), Some(RevealChange::HideAll));
    assert_eq!(reveal.visible_count(), 0);
}

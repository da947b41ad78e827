use crate::buttons::ProjectButtons;
use crate::config::{PageConfig, ResizePolicy};
use crate::error::PageError;
use crate::modal::{Modal, ModalTrigger};
use crate::nav::{NavHighlight, NavPairing, click_target};
use crate::reveal::{ExplainReveal, RevealChange};
use crate::scroll::{FullPageScroller, WheelInput, WheelOutcome};
use crate::timeline::{CompletionEvent, Target, Timeline};
use crate::tween::Easing;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// What the host found on the page at load time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSkeleton {
    /// Window inner height in CSS pixels.
    pub viewport_height: f64,
    pub page_count: usize,
    pub nav_count: usize,
    pub section_count: usize,
    pub interest_count: usize,
    /// Measured label width of each project button, in button order.
    pub label_widths: Vec<f64>,
}

/// Input events delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Wheel or trackpad gesture on the document; `scroll_top` is the window
    /// offset when it arrived.
    Wheel { input: WheelInput, scroll_top: f64 },
    /// Click on nav item `index`; `scroll_top` is the window offset when it
    /// arrived.
    NavClick { index: usize, scroll_top: f64 },
    /// The window scrolled; `scroll_top` is the new offset.
    Scroll { scroll_top: f64 },
    /// The window was resized.
    Resize { viewport_height: f64 },
    /// Fresh document-relative tops of every section, in order.
    SectionsMeasured { tops: Vec<f64> },
    InterestEnter(usize),
    InterestLeave(usize),
    Modal(ModalTrigger),
    ProjectEnter(usize),
    ProjectLeave(usize),
}

/// Actions returned for the host to apply to the DOM.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Size every page element to this height.
    SetPageHeight(f64),
    /// Jump the window to this vertical offset.
    ScrollTo(f64),
    /// Move the active class to nav item `n`.
    Highlight(usize),
    Reveal(RevealChange),
    SetModalVisible(bool),
    SetLabelWidth { index: usize, width: f64 },
    /// Layout changed; measure section tops and send `SectionsMeasured`.
    MeasureSections,
}

/// Result of handling one event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    pub actions: Vec<Action>,
    /// The host must call `preventDefault` on the originating DOM event.
    pub prevent_default: bool,
}

impl Outcome {
    fn new(actions: Vec<Action>) -> Self {
        Self { actions, prevent_default: false }
    }

    fn prevented(actions: Vec<Action>) -> Self {
        Self { actions, prevent_default: true }
    }
}

/// The page controller: every piece of interaction state, no DOM.
///
/// Events go in through [`PageCore::handle`], animation time advances through
/// [`PageCore::frame`], and both return the [`Action`]s to apply.
#[derive(Debug)]
pub struct PageCore {
    config: PageConfig,
    viewport_height: f64,
    page_count: usize,
    section_tops: Vec<f64>,
    pairing: NavPairing<usize, usize>,
    highlight: NavHighlight,
    scroller: FullPageScroller,
    reveal: ExplainReveal,
    modal: Modal,
    buttons: ProjectButtons,
    timeline: Timeline,
}

impl PageCore {
    /// Build the controller for a page skeleton.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::NavMismatch`] when the nav and section counts differ.
    pub fn new(config: PageConfig, skeleton: &PageSkeleton) -> Result<Self, PageError> {
        let pairing = NavPairing::new((0..skeleton.nav_count).collect(), (0..skeleton.section_count).collect())?;
        let buttons = ProjectButtons::new(skeleton.label_widths.len(), config.label_open_px, config.label_animation_ms);
        let mut timeline = Timeline::new();
        buttons.seed(&mut timeline, &skeleton.label_widths);
        timeline.set_value(Target::Scroll, 0.0);

        Ok(Self {
            reveal: ExplainReveal::new(skeleton.interest_count, config.explain_hide),
            viewport_height: skeleton.viewport_height,
            page_count: skeleton.page_count,
            section_tops: Vec::new(),
            pairing,
            highlight: NavHighlight::default(),
            scroller: FullPageScroller::new(),
            modal: Modal::default(),
            buttons,
            timeline,
            config,
        })
    }

    /// Actions applied once on load: size the pages, rewind to the top, hide
    /// every explanation, then measure the sections in their final layout.
    pub fn start(&mut self) -> Vec<Action> {
        log::info!(
            "page controller started: {} pages, {} nav pairs, viewport {}px",
            self.page_count,
            self.pairing.len(),
            self.viewport_height
        );
        self.timeline.set_value(Target::Scroll, 0.0);
        let mut actions = Vec::with_capacity(4);
        if self.page_count > 0 {
            actions.push(Action::SetPageHeight(self.viewport_height));
        }
        actions.push(Action::ScrollTo(0.0));
        actions.push(Action::Reveal(self.reveal.reset()));
        actions.push(Action::MeasureSections);
        actions
    }

    /// Handle one input event at `now_ms`.
    pub fn handle(&mut self, event: PageEvent, now_ms: f64) -> Outcome {
        match event {
            PageEvent::Wheel { input, scroll_top } => {
                self.on_wheel(input, scroll_top, now_ms);
                Outcome::prevented(Vec::new())
            }
            PageEvent::NavClick { index, scroll_top } => {
                self.on_nav_click(index, scroll_top, now_ms);
                Outcome::prevented(Vec::new())
            }
            PageEvent::Scroll { scroll_top } => {
                self.timeline.set_value(Target::Scroll, scroll_top);
                Outcome::new(self.highlight_actions())
            }
            PageEvent::Resize { viewport_height } => Outcome::new(self.on_resize(viewport_height)),
            PageEvent::SectionsMeasured { tops } => {
                self.section_tops = tops;
                Outcome::new(self.highlight_actions())
            }
            PageEvent::InterestEnter(index) => {
                let change = self.reveal.enter(index);
                Outcome::new(change.map(Action::Reveal).into_iter().collect())
            }
            PageEvent::InterestLeave(index) => {
                let change = self.reveal.leave(index);
                Outcome::new(change.map(Action::Reveal).into_iter().collect())
            }
            PageEvent::Modal(trigger) => {
                let visible = self.modal.trigger(trigger);
                let actions = vec![Action::SetModalVisible(visible)];
                if trigger.prevents_default() {
                    Outcome::prevented(actions)
                } else {
                    Outcome::new(actions)
                }
            }
            PageEvent::ProjectEnter(index) => {
                self.buttons.enter(&mut self.timeline, index, now_ms);
                Outcome::default()
            }
            PageEvent::ProjectLeave(index) => {
                self.buttons.leave(&mut self.timeline, index, now_ms);
                Outcome::default()
            }
        }
    }

    /// Advance animations to `now_ms` and deliver their completions.
    pub fn frame(&mut self, now_ms: f64) -> Vec<Action> {
        let update = self.timeline.tick(now_ms);
        for event in &update.completed {
            self.deliver(event);
        }
        update
            .values
            .into_iter()
            .map(|(target, value)| match target {
                Target::Scroll => Action::ScrollTo(value),
                Target::Label(index) => Action::SetLabelWidth { index, width: value },
            })
            .collect()
    }

    fn on_wheel(&mut self, input: WheelInput, scroll_top: f64, now_ms: f64) {
        let outcome = self.scroller.on_wheel(
            &mut self.timeline,
            input,
            scroll_top,
            self.viewport_height,
            self.config.page_scroll_ms,
            now_ms,
        );
        if let WheelOutcome::Started { to, .. } = outcome {
            log::debug!("wheel {:?} -> page offset {to}", input.direction());
        }
    }

    fn on_nav_click(&mut self, index: usize, scroll_top: f64, now_ms: f64) {
        let Some(pair) = self.pairing.get(index) else {
            return;
        };
        let Some(top) = click_target(&self.section_tops, pair.section) else {
            log::warn!("nav {index}: section {} has not been measured", pair.section);
            return;
        };
        if let Some(cancelled) = self.timeline.stop(Target::Scroll, now_ms) {
            self.deliver(&cancelled);
        }
        // A cancelled page step may have been heading past the document end.
        if !self.timeline.is_running(Target::Scroll) {
            self.timeline.set_value(Target::Scroll, scroll_top);
        }
        self.timeline.animate(Target::Scroll, top, self.config.nav_scroll_ms, Easing::Swing, now_ms);
    }

    fn on_resize(&mut self, viewport_height: f64) -> Vec<Action> {
        self.viewport_height = viewport_height;
        let mut actions = Vec::new();
        if self.config.resize == ResizePolicy::Remeasure && self.page_count > 0 {
            actions.push(Action::SetPageHeight(viewport_height));
            actions.push(Action::MeasureSections);
        }
        actions.extend(self.highlight_actions());
        actions
    }

    fn highlight_actions(&mut self) -> Vec<Action> {
        let scroll_top = self.scroll_top();
        let Some(section) = self.highlight.update(&self.section_tops, scroll_top) else {
            return Vec::new();
        };
        self.pairing
            .iter()
            .position(|pair| pair.section == section)
            .map(Action::Highlight)
            .into_iter()
            .collect()
    }

    fn deliver(&mut self, event: &CompletionEvent) {
        if event.target == Target::Scroll {
            self.scroller.on_completion(event);
        }
    }

    // --- Queries ---

    /// Whether frames must keep being requested.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.timeline.is_idle()
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroller.is_locked()
    }

    #[must_use]
    pub fn scroll_top(&self) -> f64 {
        self.timeline.value(Target::Scroll).unwrap_or(0.0)
    }

    /// End value of the scroll animation in flight, if any.
    #[must_use]
    pub fn scroll_destination(&self) -> Option<f64> {
        self.timeline.destination(Target::Scroll)
    }

    #[must_use]
    pub fn label_width(&self, index: usize) -> Option<f64> {
        self.timeline.value(Target::Label(index))
    }

    #[must_use]
    pub fn label_destination(&self, index: usize) -> Option<f64> {
        self.timeline.destination(Target::Label(index))
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlight.current()
    }

    #[must_use]
    pub fn is_modal_visible(&self) -> bool {
        self.modal.is_visible()
    }

    #[must_use]
    pub fn is_explain_visible(&self, index: usize) -> bool {
        self.reveal.is_visible(index)
    }

    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }
}

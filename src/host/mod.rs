//! Browser host for [`PageCore`].
//!
//! ARCHITECTURE
//! ============
//! The core owns every piece of interaction state; this module only maps DOM
//! events into [`PageEvent`]s, applies the returned [`Action`]s, and keeps
//! requesting animation frames while the core reports animations in flight.
//! Listeners live for the lifetime of the page, so their closures are leaked
//! with `forget` once registered.

mod dom;

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use js_sys::Date;
use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{AddEventListenerOptions, Event, EventTarget, WheelEvent};

use crate::config::PageConfig;
use crate::engine::{Action, PageCore, PageEvent};
use crate::error::PageError;
use crate::modal::ModalTrigger;
use crate::reveal::RevealChange;
use crate::scroll::WheelInput;

use self::dom::{PageDom, dom_err};

/// Id of the optional `<script type="application/json">` config block.
const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Module entry point: install logging, then boot once the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let loaded = load_config();
    let level = loaded.as_ref().map_or(log::Level::Info, PageConfig::log_level);
    if let Err(err) = console_log::init_with_level(level) {
        log::warn!("console logger already installed: {err}");
    }
    let config = loaded.unwrap_or_else(|err| {
        log::error!("{err}; using default config");
        PageConfig::default()
    });

    if let Err(err) = when_ready(move || {
        if let Err(err) = boot(config) {
            log::error!("page controller failed to boot: {err}");
        }
    }) {
        log::error!("could not wait for DOMContentLoaded: {err}");
    }
}

fn load_config() -> Result<PageConfig, PageError> {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    PageConfig::from_json(&raw)
}

/// Run `f` now if the document is parsed, otherwise on `DOMContentLoaded`.
fn when_ready(f: impl FnOnce() + 'static) -> Result<(), PageError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PageError::Dom("no document".to_owned()))?;
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let cb = Closure::once(f);
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            cb.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(dom_err)?;
    cb.forget();
    Ok(())
}

fn boot(config: PageConfig) -> Result<(), PageError> {
    let window = web_sys::window().ok_or_else(|| PageError::Dom("no window".to_owned()))?;
    let document = window.document().ok_or_else(|| PageError::Dom("no document".to_owned()))?;
    let dom = PageDom::query(window, document, &config.selectors)?;
    let core = PageCore::new(config, &dom.skeleton()?)?;
    let host = Rc::new(Host { dom, core: RefCell::new(core), frame_pending: Cell::new(false) });

    host.bind()?;
    let actions = host.core.borrow_mut().start();
    host.apply_all(actions);
    Ok(())
}

fn now_ms() -> f64 {
    Date::now()
}

fn legacy_wheel(event: &Event) -> WheelInput {
    let read = |key: &str| {
        js_sys::Reflect::get(event, &JsValue::from_str(key)).map_or(0.0, |value| value.as_f64().unwrap_or(0.0))
    };
    WheelInput::Legacy { wheel_delta: read("wheelDelta"), detail: read("detail") }
}

struct Host {
    dom: PageDom,
    core: RefCell<PageCore>,
    frame_pending: Cell<bool>,
}

impl Host {
    // --- Binding ---

    fn bind(self: &Rc<Self>) -> Result<(), PageError> {
        let document: &EventTarget = &self.dom.document;
        self.listen(document, "wheel", |host, event| {
            let delta_y = event.dyn_ref::<WheelEvent>().map_or(0.0, WheelEvent::delta_y);
            Some(PageEvent::Wheel { input: WheelInput::Standard { delta_y }, scroll_top: host.offset() })
        })?;
        // Older engines; duplicates of one gesture are dropped by the scroll lock.
        for kind in ["mousewheel", "DOMMouseScroll"] {
            self.listen(document, kind, |host, event| {
                Some(PageEvent::Wheel { input: legacy_wheel(event), scroll_top: host.offset() })
            })?;
        }

        let window: &EventTarget = &self.dom.window;
        self.listen(window, "scroll", |host, _| match host.dom.scroll_top() {
            Ok(scroll_top) => Some(PageEvent::Scroll { scroll_top }),
            Err(err) => {
                log::warn!("scroll offset unavailable: {err}");
                None
            }
        })?;
        self.listen(window, "resize", |host, _| match host.dom.viewport_height() {
            Ok(viewport_height) => Some(PageEvent::Resize { viewport_height }),
            Err(err) => {
                log::warn!("viewport height unavailable: {err}");
                None
            }
        })?;

        for (index, item) in self.dom.nav_items.iter().enumerate() {
            self.listen(item, "click", move |host, _| {
                Some(PageEvent::NavClick { index, scroll_top: host.offset() })
            })?;
        }
        for (index, item) in self.dom.interest_items.iter().enumerate() {
            self.listen(item, "mouseenter", move |_, _| Some(PageEvent::InterestEnter(index)))?;
            self.listen(item, "mouseleave", move |_, _| Some(PageEvent::InterestLeave(index)))?;
        }
        let triggers = [
            (&self.dom.modal_opens, ModalTrigger::OpenButton),
            (&self.dom.modal_titles, ModalTrigger::SkillsTitle),
            (&self.dom.modal_closes, ModalTrigger::CloseButton),
        ];
        for (elements, trigger) in triggers {
            for el in elements {
                self.listen(el, "click", move |_, _| Some(PageEvent::Modal(trigger)))?;
            }
        }
        for (index, button) in self.dom.project_buttons.iter().enumerate() {
            self.listen(button, "mouseenter", move |_, _| Some(PageEvent::ProjectEnter(index)))?;
            self.listen(button, "mouseleave", move |_, _| Some(PageEvent::ProjectLeave(index)))?;
        }
        Ok(())
    }

    /// Register a non-passive listener that maps DOM events into page events.
    fn listen<F>(self: &Rc<Self>, target: &EventTarget, kind: &str, map: F) -> Result<(), PageError>
    where
        F: Fn(&Host, &Event) -> Option<PageEvent> + 'static,
    {
        let host = Rc::clone(self);
        let cb = Closure::wrap(Box::new(move |event: Event| {
            if let Some(page_event) = map(&host, &event) {
                host.dispatch(page_event, &event);
            }
        }) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(kind, cb.as_ref().unchecked_ref(), &options)
            .map_err(dom_err)?;
        cb.forget();
        Ok(())
    }

    // --- Event flow ---

    /// The browser's scroll offset, or the core's last known one if the
    /// window cannot report it.
    fn offset(&self) -> f64 {
        self.dom.scroll_top().unwrap_or_else(|err| {
            log::warn!("scroll offset unavailable: {err}");
            self.core.borrow().scroll_top()
        })
    }

    fn dispatch(self: &Rc<Self>, event: PageEvent, dom_event: &Event) {
        let outcome = self.core.borrow_mut().handle(event, now_ms());
        if outcome.prevent_default {
            dom_event.prevent_default();
        }
        self.apply_all(outcome.actions);
    }

    fn apply_all(self: &Rc<Self>, actions: Vec<Action>) {
        let mut queue = VecDeque::from(actions);
        while let Some(action) = queue.pop_front() {
            match self.apply(&action) {
                Ok(follow_up) => queue.extend(follow_up),
                Err(err) => log::warn!("failed to apply {action:?}: {err}"),
            }
        }
        if self.core.borrow().is_animating() {
            self.request_frame();
        }
    }

    /// Apply one action; measuring sections feeds a new event back into the core.
    fn apply(&self, action: &Action) -> Result<Vec<Action>, PageError> {
        match action {
            Action::SetPageHeight(height) => self.dom.set_page_height(*height)?,
            Action::ScrollTo(top) => self.dom.scroll_to(*top),
            Action::Highlight(index) => self.dom.highlight(*index)?,
            Action::Reveal(RevealChange::Show(index)) => {
                if let Some(explains) = self.dom.item_explains.get(*index) {
                    self.dom.set_all_visible(explains, true)?;
                }
            }
            Action::Reveal(RevealChange::Hide(index)) => {
                if let Some(explains) = self.dom.item_explains.get(*index) {
                    self.dom.set_all_visible(explains, false)?;
                }
            }
            Action::Reveal(RevealChange::HideAll) => self.dom.set_all_visible(&self.dom.explains, false)?,
            Action::SetModalVisible(visible) => self.dom.set_all_visible(&self.dom.modals, *visible)?,
            Action::SetLabelWidth { index, width } => {
                if let Some(labels) = self.dom.labels.get(*index) {
                    for label in labels {
                        PageDom::set_width(label, *width)?;
                    }
                }
            }
            Action::MeasureSections => {
                let tops = self.dom.section_tops()?;
                let outcome = self.core.borrow_mut().handle(PageEvent::SectionsMeasured { tops }, now_ms());
                return Ok(outcome.actions);
            }
        }
        Ok(Vec::new())
    }

    // --- Frames ---

    fn request_frame(self: &Rc<Self>) {
        if self.frame_pending.get() {
            return;
        }
        self.frame_pending.set(true);

        let host = Rc::clone(self);
        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            host.frame_pending.set(false);
            let actions = host.core.borrow_mut().frame(now_ms());
            host.apply_all(actions);
            holder_for_cb.borrow_mut().take();
        }) as Box<dyn FnMut(f64)>);

        match self.dom.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(_) => *holder.borrow_mut() = Some(cb),
            Err(err) => {
                self.frame_pending.set(false);
                log::warn!("requestAnimationFrame failed: {}", dom_err(err));
            }
        }
    }
}

//! Element lookup, layout measurement, and style writes.
//!
//! Selectors that match nothing yield empty lists, and every write to a
//! missing index is a no-op, so a page lacking one of the roles simply loses
//! that behavior.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window};

use crate::config::Selectors;
use crate::consts::NAV_ACTIVE_CLASS;
use crate::engine::PageSkeleton;
use crate::error::PageError;

pub(crate) fn dom_err(err: JsValue) -> PageError {
    PageError::Dom(format!("{err:?}"))
}

fn collect<T: JsCast>(list: &NodeList) -> Vec<T> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i)
            && let Ok(el) = node.dyn_into::<T>()
        {
            out.push(el);
        }
    }
    out
}

fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, PageError> {
    Ok(collect(&document.query_selector_all(selector).map_err(dom_err)?))
}

fn query_within<T: JsCast>(root: &Element, selector: &str) -> Result<Vec<T>, PageError> {
    Ok(collect(&root.query_selector_all(selector).map_err(dom_err)?))
}

/// Every element the page binds to, looked up once at boot.
pub(crate) struct PageDom {
    pub window: Window,
    pub document: Document,
    pub pages: Vec<HtmlElement>,
    pub sections: Vec<Element>,
    pub nav_items: Vec<Element>,
    pub interest_items: Vec<Element>,
    /// Every explanation on the page.
    pub explains: Vec<HtmlElement>,
    /// Explanations nested inside each interest item.
    pub item_explains: Vec<Vec<HtmlElement>>,
    pub modal_opens: Vec<Element>,
    pub modal_titles: Vec<Element>,
    pub modals: Vec<HtmlElement>,
    pub modal_closes: Vec<Element>,
    pub project_buttons: Vec<Element>,
    /// Labels nested inside each project button.
    pub labels: Vec<Vec<HtmlElement>>,
}

impl PageDom {
    pub fn query(window: Window, document: Document, selectors: &Selectors) -> Result<Self, PageError> {
        let interest_items: Vec<Element> = query_all(&document, &selectors.interest_items)?;
        let item_explains = interest_items
            .iter()
            .map(|item| query_within(item, &selectors.explain))
            .collect::<Result<Vec<_>, _>>()?;
        let project_buttons: Vec<Element> = query_all(&document, &selectors.project_buttons)?;
        let labels = project_buttons
            .iter()
            .map(|button| query_within(button, &selectors.project_label))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            pages: query_all(&document, &selectors.pages)?,
            sections: query_all(&document, &selectors.sections)?,
            nav_items: query_all(&document, &selectors.nav_items)?,
            explains: query_all(&document, &selectors.explain)?,
            modal_opens: query_all(&document, &selectors.modal_open)?,
            modal_titles: query_all(&document, &selectors.modal_title)?,
            modals: query_all(&document, &selectors.modal)?,
            modal_closes: query_all(&document, &selectors.modal_close)?,
            interest_items,
            item_explains,
            project_buttons,
            labels,
            window,
            document,
        })
    }

    pub fn skeleton(&self) -> Result<PageSkeleton, PageError> {
        Ok(PageSkeleton {
            viewport_height: self.viewport_height()?,
            page_count: self.pages.len(),
            nav_count: self.nav_items.len(),
            section_count: self.sections.len(),
            interest_count: self.interest_items.len(),
            label_widths: self
                .labels
                .iter()
                .map(|labels| labels.first().map_or(0.0, |label| label.get_bounding_client_rect().width()))
                .collect(),
        })
    }

    // --- Measurement ---

    pub fn viewport_height(&self) -> Result<f64, PageError> {
        let height = self.window.inner_height().map_err(dom_err)?;
        height.as_f64().ok_or_else(|| PageError::Dom("innerHeight is not a number".to_owned()))
    }

    pub fn scroll_top(&self) -> Result<f64, PageError> {
        self.window.scroll_y().map_err(dom_err)
    }

    /// Document-relative top of every section.
    pub fn section_tops(&self) -> Result<Vec<f64>, PageError> {
        let scroll_top = self.scroll_top()?;
        Ok(self
            .sections
            .iter()
            .map(|section| section.get_bounding_client_rect().top() + scroll_top)
            .collect())
    }

    // --- Writes ---

    pub fn set_page_height(&self, height: f64) -> Result<(), PageError> {
        let value = format!("{height}px");
        for page in &self.pages {
            page.style().set_property("height", &value).map_err(dom_err)?;
        }
        Ok(())
    }

    pub fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Instant);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    pub fn highlight(&self, index: usize) -> Result<(), PageError> {
        for item in &self.nav_items {
            item.class_list().remove_1(NAV_ACTIVE_CLASS).map_err(dom_err)?;
        }
        if let Some(item) = self.nav_items.get(index) {
            item.class_list().add_1(NAV_ACTIVE_CLASS).map_err(dom_err)?;
        }
        Ok(())
    }

    pub fn set_width(el: &HtmlElement, width: f64) -> Result<(), PageError> {
        el.style().set_property("width", &format!("{width}px")).map_err(dom_err)
    }

    pub fn hide(el: &HtmlElement) -> Result<(), PageError> {
        el.style().set_property("display", "none").map_err(dom_err)
    }

    /// Drop any inline `display`; fall back to `block` when the stylesheet
    /// hides the element.
    pub fn show(&self, el: &HtmlElement) -> Result<(), PageError> {
        let style = el.style();
        style.remove_property("display").map_err(dom_err)?;
        if let Some(computed) = self.window.get_computed_style(el).map_err(dom_err)?
            && computed.get_property_value("display").map_err(dom_err)? == "none"
        {
            style.set_property("display", "block").map_err(dom_err)?;
        }
        Ok(())
    }

    pub fn set_all_visible(&self, els: &[HtmlElement], visible: bool) -> Result<(), PageError> {
        for el in els {
            if visible {
                self.show(el)?;
            } else {
                Self::hide(el)?;
            }
        }
        Ok(())
    }
}

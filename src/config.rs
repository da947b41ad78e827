//! Runtime configuration for the page controller.
//!
//! Every field has a default matching the portfolio markup, so an absent or
//! partial config block is valid. The host reads the block from
//! `<script type="application/json" id="folio-config">` when present.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{LABEL_ANIMATION_MS, LABEL_OPEN_WIDTH_PX, NAV_SCROLL_MS, PAGE_SCROLL_MS};
use crate::error::PageError;

/// What happens to page heights when the viewport is resized after load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizePolicy {
    /// Page heights stay at the viewport height measured on load.
    #[default]
    KeepInitial,
    /// Page heights follow the viewport on every resize.
    Remeasure,
}

/// Which explanations are hidden when the pointer leaves an interest item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplainHide {
    /// Hide every explanation on the page.
    #[default]
    All,
    /// Hide only the explanation of the item that was left.
    Own,
}

/// Element selectors for every role the page binds to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub pages: String,
    pub sections: String,
    pub nav_items: String,
    pub interest_items: String,
    pub explain: String,
    pub modal_open: String,
    pub modal_title: String,
    pub modal: String,
    pub modal_close: String,
    pub project_buttons: String,
    pub project_label: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            pages: ".page".to_owned(),
            sections: "article".to_owned(),
            nav_items: "#header nav li".to_owned(),
            interest_items: ".interest li".to_owned(),
            explain: ".explain".to_owned(),
            modal_open: ".open_btn_box".to_owned(),
            modal_title: ".my_skills header > .ttl".to_owned(),
            modal: ".license_modal".to_owned(),
            modal_close: ".close_btn".to_owned(),
            project_buttons: ".proj_btns > li".to_owned(),
            project_label: "p".to_owned(),
        }
    }
}

/// Page controller configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub page_scroll_ms: f64,
    pub nav_scroll_ms: f64,
    pub label_open_px: f64,
    pub label_animation_ms: f64,
    pub resize: ResizePolicy,
    pub explain_hide: ExplainHide,
    /// Console log level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    pub selectors: Selectors,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_scroll_ms: PAGE_SCROLL_MS,
            nav_scroll_ms: NAV_SCROLL_MS,
            label_open_px: LABEL_OPEN_WIDTH_PX,
            label_animation_ms: LABEL_ANIMATION_MS,
            resize: ResizePolicy::KeepInitial,
            explain_hide: ExplainHide::All,
            log_level: "info".to_owned(),
            selectors: Selectors::default(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON config block. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] if the block is not valid JSON or a field
    /// has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// The configured log level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

//! Hover reveal for the "my interests" list.
//!
//! Entering an item shows that item's explanation only. Leaving any item
//! hides every explanation under [`ExplainHide::All`], so sliding from one
//! item to its neighbour hides all and then shows one.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::ExplainHide;

/// Visibility change for explanation elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealChange {
    Show(usize),
    Hide(usize),
    HideAll,
}

#[derive(Debug, Clone)]
pub struct ExplainReveal {
    visible: Vec<bool>,
    hide: ExplainHide,
}

impl ExplainReveal {
    /// All `count` explanations start hidden.
    #[must_use]
    pub fn new(count: usize, hide: ExplainHide) -> Self {
        Self { visible: vec![false; count], hide }
    }

    /// Change that hides everything, applied once on load.
    pub fn reset(&mut self) -> RevealChange {
        self.visible.fill(false);
        RevealChange::HideAll
    }

    pub fn enter(&mut self, index: usize) -> Option<RevealChange> {
        let slot = self.visible.get_mut(index)?;
        *slot = true;
        Some(RevealChange::Show(index))
    }

    pub fn leave(&mut self, index: usize) -> Option<RevealChange> {
        match self.hide {
            ExplainHide::All => Some(self.reset()),
            ExplainHide::Own => {
                let slot = self.visible.get_mut(index)?;
                *slot = false;
                Some(RevealChange::Hide(index))
            }
        }
    }

    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|shown| **shown).count()
    }
}

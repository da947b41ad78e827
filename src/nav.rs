//! Navigation: explicit nav/section pairing, click targets, and the
//! scroll-driven highlight.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::error::PageError;

/// One nav entry and the section it scrolls to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavPair<N, S> {
    pub nav: N,
    pub section: S,
}

/// Ordered nav/section pairs, built once and validated.
///
/// The core pairs indices; the browser host pairs elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavPairing<N, S> {
    pairs: Vec<NavPair<N, S>>,
}

impl<N, S> NavPairing<N, S> {
    /// Zip two lists into pairs.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::NavMismatch`] unless both lists have the same length.
    pub fn new(navs: Vec<N>, sections: Vec<S>) -> Result<Self, PageError> {
        if navs.len() != sections.len() {
            return Err(PageError::NavMismatch { navs: navs.len(), sections: sections.len() });
        }
        let pairs = navs.into_iter().zip(sections).map(|(nav, section)| NavPair { nav, section }).collect();
        Ok(Self { pairs })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&NavPair<N, S>> {
        self.pairs.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavPair<N, S>> {
        self.pairs.iter()
    }
}

/// Index of the last section whose top is at or above `scroll_top`.
///
/// Sections are walked in document order and a later match overwrites an
/// earlier one, so equal tops resolve to the later section.
#[must_use]
pub fn active_section(section_tops: &[f64], scroll_top: f64) -> Option<usize> {
    let mut active = None;
    for (index, top) in section_tops.iter().enumerate() {
        if *top <= scroll_top {
            active = Some(index);
        }
    }
    active
}

/// Scroll target for a click on nav item `index`.
#[must_use]
pub fn click_target(section_tops: &[f64], index: usize) -> Option<f64> {
    section_tops.get(index).copied()
}

/// The nav item currently carrying the active class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavHighlight {
    current: Option<usize>,
}

impl NavHighlight {
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Recompute from the section tops. Returns the new index when a section
    /// matches; when none does the previous highlight is left as is.
    pub fn update(&mut self, section_tops: &[f64], scroll_top: f64) -> Option<usize> {
        let active = active_section(section_tops, scroll_top)?;
        self.current = Some(active);
        Some(active)
    }
}

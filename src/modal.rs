//! Credentials modal: two ways in, one way out.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Elements that toggle the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTrigger {
    /// The "open" button box (a link; default suppressed).
    OpenButton,
    /// The skills panel header title.
    SkillsTitle,
    /// The close button (a link; default suppressed).
    CloseButton,
}

impl ModalTrigger {
    #[must_use]
    pub fn opens(self) -> bool {
        matches!(self, Self::OpenButton | Self::SkillsTitle)
    }

    /// Whether the click's default action must be suppressed.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::OpenButton | Self::CloseButton)
    }
}

/// Mirror of the modal element's display state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modal {
    visible: bool,
}

impl Modal {
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Apply a trigger and return the visibility to write to the element.
    pub fn trigger(&mut self, trigger: ModalTrigger) -> bool {
        self.visible = trigger.opens();
        self.visible
    }
}

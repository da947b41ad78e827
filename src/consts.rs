//! Shared numeric constants for the page controller.

// ── Full-page scroll ────────────────────────────────────────────

/// Duration of one wheel-driven page step, in milliseconds.
pub const PAGE_SCROLL_MS: f64 = 1000.0;

/// Duration of a nav click scroll, in milliseconds.
pub const NAV_SCROLL_MS: f64 = 400.0;

// ── Project buttons ─────────────────────────────────────────────

/// Label width while a project button is hovered, in CSS pixels.
pub const LABEL_OPEN_WIDTH_PX: f64 = 100.0;

/// Label width at rest, in CSS pixels.
pub const LABEL_CLOSED_WIDTH_PX: f64 = 0.0;

/// Duration of a label open/close animation, in milliseconds.
pub const LABEL_ANIMATION_MS: f64 = 500.0;

// ── Nav ─────────────────────────────────────────────────────────

/// Class applied to the nav item of the active section.
pub const NAV_ACTIVE_CLASS: &str = "on";

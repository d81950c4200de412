use std::time::Duration;

use crate::transitions::Easing;

/// Tuning for drag gesture recognition and the reorder animation.
#[derive(Debug, Clone, PartialEq)]
pub struct DragConfig {
    /// How long a press must be held before the row becomes a drag
    /// candidate (default: 500ms). Zero starts on the press itself.
    pub press_duration: Duration,

    /// How far, in cells, the pointer may wander while held before the press
    /// stops counting as press-and-hold (default: 1).
    pub movement_tolerance: u16,

    /// Whether Escape cancels an active drag (default: true).
    pub cancel_on_escape: bool,

    /// Whether a row may be dropped into another section (default: true).
    pub allow_cross_section: bool,

    /// Lines at the top and bottom edge of the list that scroll it while a
    /// row is dragged there (default: 1). Zero disables autoscroll.
    pub autoscroll_margin: u16,

    /// Minimum time between two autoscroll steps (default: 50ms).
    pub autoscroll_interval: Duration,

    /// Duration of the slide rows make when the placeholder passes them
    /// (default: 150ms).
    pub shift_duration: Duration,

    /// Easing of that slide (default: ease-out).
    pub easing: Easing,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            press_duration: Duration::from_millis(500),
            movement_tolerance: 1,
            cancel_on_escape: true,
            allow_cross_section: true,
            autoscroll_margin: 1,
            autoscroll_interval: Duration::from_millis(50),
            shift_duration: Duration::from_millis(150),
            easing: Easing::EaseOut,
        }
    }
}

impl DragConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_duration(mut self, duration: Duration) -> Self {
        self.press_duration = duration;
        self
    }

    pub fn movement_tolerance(mut self, cells: u16) -> Self {
        self.movement_tolerance = cells;
        self
    }

    /// Do not cancel drags on Escape.
    pub fn no_escape_cancel(mut self) -> Self {
        self.cancel_on_escape = false;
        self
    }

    /// Keep dragged rows inside their own section.
    pub fn within_section(mut self) -> Self {
        self.allow_cross_section = false;
        self
    }

    pub fn autoscroll(mut self, margin: u16, interval: Duration) -> Self {
        self.autoscroll_margin = margin;
        self.autoscroll_interval = interval;
        self
    }

    pub fn animation(mut self, duration: Duration, easing: Easing) -> Self {
        self.shift_duration = duration;
        self.easing = easing;
        self
    }

    /// Rows jump instead of sliding.
    pub fn reduced_motion(self) -> Self {
        self.animation(Duration::ZERO, Easing::Linear)
    }
}

use std::time::Instant;

use super::config::DragConfig;
use crate::event::{Event, MouseButton};
use crate::geometry::Point;
use crate::index_path::IndexPath;

/// A left press on a row that may turn into press-and-hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LongPress {
    pub origin: IndexPath,
    pub start: Point,
    pub at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PressOutcome {
    /// Still held, not long enough yet.
    Pending,
    /// Held long enough within tolerance.
    Recognized,
    /// Moved away or released first; it was a tap or a swipe.
    Failed,
}

impl LongPress {
    pub fn new(origin: IndexPath, start: Point, at: Instant) -> Self {
        Self { origin, start, at }
    }

    /// Feed the next event.
    ///
    /// Time is checked before movement: an event stamped after the hold
    /// duration means the hold completed before whatever the event reports.
    /// A new press is the exception and always fails the hold.
    pub fn update(&self, event: &Event, config: &DragConfig) -> PressOutcome {
        // Another press means the held button already went up.
        if let Event::Press { .. } = event {
            return PressOutcome::Failed;
        }
        let Some(now) = event.at() else {
            return match event {
                Event::Interrupt => PressOutcome::Failed,
                _ => PressOutcome::Pending,
            };
        };
        if now.saturating_duration_since(self.at) >= config.press_duration {
            return PressOutcome::Recognized;
        }
        if let Some(position) = event.position()
            && position.distance(self.start) > config.movement_tolerance
        {
            return PressOutcome::Failed;
        }
        match event {
            Event::Release {
                button: MouseButton::Left,
                ..
            } => PressOutcome::Failed,
            _ => PressOutcome::Pending,
        }
    }
}

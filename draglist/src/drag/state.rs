use std::fmt;
use std::time::Instant;

use super::gesture::LongPress;
use super::snapshot::Snapshot;
use crate::geometry::Point;
use crate::index_path::IndexPath;

/// Phases of one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    /// Held long enough; waiting on the delegate's approval.
    Candidate,
    Dragging,
    Dropped,
    Cancelled,
}

impl fmt::Display for DragPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DragPhase::Idle => "idle",
            DragPhase::Candidate => "candidate",
            DragPhase::Dragging => "dragging",
            DragPhase::Dropped => "dropped",
            DragPhase::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// Why a drag was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CancelReason {
    ReleasedOutside,
    Interrupted,
    Escape,
    Disabled,
    DelegateChanged,
    DelegateGone,
    DataChanged,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            CancelReason::ReleasedOutside => "released outside the list",
            CancelReason::Interrupted => "interrupted",
            CancelReason::Escape => "escape pressed",
            CancelReason::Disabled => "drag disabled",
            CancelReason::DelegateChanged => "delegate changed",
            CancelReason::DelegateGone => "delegate dropped",
            CancelReason::DataChanged => "data changed",
        };
        f.write_str(reason)
    }
}

#[derive(Debug)]
pub(crate) struct ActiveDrag {
    /// Where the row was when the drag began.
    pub origin: IndexPath,
    /// Where the row is now in the data source.
    pub placeholder: IndexPath,
    pub snapshot: Snapshot,
    /// Line of the row that the pointer grabbed.
    pub grab: u16,
    pub pointer: Point,
    pub last_autoscroll: Option<Instant>,
}

#[derive(Debug, Default)]
pub(crate) enum DragState {
    #[default]
    Idle,
    Pressing(LongPress),
    Dragging(ActiveDrag),
}

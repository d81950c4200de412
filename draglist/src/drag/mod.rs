//! Drag-to-reorder on top of [`ListView`](crate::list::ListView).
//!
//! A drag goes through `idle -> candidate -> dragging -> {dropped |
//! cancelled} -> idle`. A left press on a row that is held for
//! [`DragConfig::press_duration`] without moving makes the row a candidate;
//! the [`DragDelegate`] decides whether it is dragged. While dragging, the row
//! floats under the pointer as a snapshot and the rows underneath reorder
//! live. Releasing inside the list drops it; everything else cancels and puts
//! the row back where it started.

mod config;
mod delegate;
mod gesture;
mod snapshot;
mod state;
mod view;

pub use config::DragConfig;
pub use delegate::DragDelegate;
pub use state::DragPhase;
pub use view::DraggableListView;

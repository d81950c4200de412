//! A terminal list widget with press-and-hold drag-to-reorder.
//!
//! [`ListView`] is a plain sectioned, scrollable, selectable list of rows.
//! [`DraggableListView`] embeds it and adds reordering, opt-in through
//! [`DraggableListView::set_drag_enabled`] and approved/observed by a weakly
//! held [`DragDelegate`].

pub mod buffer;
pub mod drag;
pub mod error;
pub mod event;
pub mod geometry;
pub mod index_path;
pub mod list;
pub mod style;
pub mod text;
pub mod transitions;

pub use buffer::{Buffer, Cell};
pub use drag::{DragConfig, DragDelegate, DragPhase, DraggableListView};
pub use error::ReorderError;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use geometry::{Point, Rect};
pub use index_path::IndexPath;
pub use list::{DataSource, EventResult, Hit, ListId, ListStyle, ListView, Section, Sections};
pub use style::{Rgb, TextStyle};
pub use transitions::{Easing, Transition};

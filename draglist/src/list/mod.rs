//! The base list widget: sectioned rows with hit-testing, scrolling,
//! selection and animated row moves.
//!
//! [`ListView`] knows nothing about dragging. It renders whatever its
//! [`DataSource`] reports and exposes the operations the drag layer builds on
//! (`hit`, `rect_for_row`, `move_row`, `render_row`).

mod data_source;
mod render;
mod style;
mod view;

pub use data_source::{DataSource, Section, Sections};
pub use style::ListStyle;
pub use view::{EventResult, Hit, ListId, ListView};

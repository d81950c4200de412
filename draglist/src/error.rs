//! Errors for row reordering.

use thiserror::Error;

use crate::index_path::IndexPath;

/// A row move that cannot be applied to the current data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    /// The section does not exist.
    #[error("Section {section} out of bounds ({count} sections)")]
    SectionOutOfBounds { section: usize, count: usize },

    /// The source row does not exist.
    #[error("No row at {0}")]
    RowOutOfBounds(IndexPath),

    /// The destination is past the end of its section.
    #[error("Cannot move row to {0}: past the end of the section")]
    DestinationOutOfBounds(IndexPath),
}

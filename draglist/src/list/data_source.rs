use std::fmt::Display;

use crate::error::ReorderError;
use crate::index_path::IndexPath;

/// Supplies the rows a [`ListView`](super::ListView) renders.
pub trait DataSource {
    fn number_of_sections(&self) -> usize {
        1
    }

    fn number_of_rows(&self, section: usize) -> usize;

    /// Text shown on the first line of the row.
    fn row_text(&self, index_path: IndexPath) -> String;

    /// A titled section gets a one-line header.
    ///
    /// An untitled section with no rows takes up no lines, so a drag can only
    /// drop into it when it is the last section. Give empty sections a title
    /// if rows should be dragged into them.
    fn section_title(&self, _section: usize) -> Option<String> {
        None
    }

    /// Remove the row at `from` and reinsert it so it ends up at `to`.
    ///
    /// The list validates both coordinates before calling this.
    fn move_row(&mut self, from: IndexPath, to: IndexPath);
}

/// A section of rows with an optional header title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<T> {
    pub title: Option<String>,
    pub rows: Vec<T>,
}

impl<T> Section<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { title: None, rows }
    }

    pub fn titled(title: impl Into<String>, rows: Vec<T>) -> Self {
        Self {
            title: Some(title.into()),
            rows,
        }
    }
}

/// Stock data source: an ordered set of sections holding displayable rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections<T> {
    sections: Vec<Section<T>>,
}

impl<T> Default for Sections<T> {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
        }
    }
}

impl<T> Sections<T> {
    pub fn new(sections: Vec<Section<T>>) -> Self {
        Self { sections }
    }

    /// One untitled section holding `rows`.
    pub fn single(rows: Vec<T>) -> Self {
        Self::new(vec![Section::new(rows)])
    }

    pub fn push_section(&mut self, section: Section<T>) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[Section<T>] {
        &self.sections
    }

    pub fn section_mut(&mut self, section: usize) -> Option<&mut Section<T>> {
        self.sections.get_mut(section)
    }

    /// Rows of one section, empty if the section does not exist.
    pub fn rows(&self, section: usize) -> &[T] {
        self.sections
            .get(section)
            .map(|s| s.rows.as_slice())
            .unwrap_or(&[])
    }

    pub fn row(&self, index_path: IndexPath) -> Option<&T> {
        self.rows(index_path.section).get(index_path.row)
    }

    pub fn row_mut(&mut self, index_path: IndexPath) -> Option<&mut T> {
        self.sections
            .get_mut(index_path.section)?
            .rows
            .get_mut(index_path.row)
    }

    /// Move a row, checking both coordinates first.
    pub fn try_move_row(&mut self, from: IndexPath, to: IndexPath) -> Result<(), ReorderError> {
        let count = self.sections.len();
        if from.section >= count {
            return Err(ReorderError::SectionOutOfBounds {
                section: from.section,
                count,
            });
        }
        if to.section >= count {
            return Err(ReorderError::SectionOutOfBounds {
                section: to.section,
                count,
            });
        }
        if from.row >= self.sections[from.section].rows.len() {
            return Err(ReorderError::RowOutOfBounds(from));
        }
        let mut max_row = self.sections[to.section].rows.len();
        if from.section == to.section {
            max_row -= 1;
        }
        if to.row > max_row {
            return Err(ReorderError::DestinationOutOfBounds(to));
        }

        let item = self.sections[from.section].rows.remove(from.row);
        self.sections[to.section].rows.insert(to.row, item);
        Ok(())
    }
}

impl<T: Display> DataSource for Sections<T> {
    fn number_of_sections(&self) -> usize {
        self.sections.len()
    }

    fn number_of_rows(&self, section: usize) -> usize {
        self.rows(section).len()
    }

    fn row_text(&self, index_path: IndexPath) -> String {
        self.row(index_path).map(ToString::to_string).unwrap_or_default()
    }

    fn section_title(&self, section: usize) -> Option<String> {
        self.sections.get(section).and_then(|s| s.title.clone())
    }

    fn move_row(&mut self, from: IndexPath, to: IndexPath) {
        if let Err(e) = self.try_move_row(from, to) {
            log::warn!("Ignoring invalid row move {} -> {}: {}", from, to, e);
        }
    }
}

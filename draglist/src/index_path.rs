use std::fmt;

/// Coordinate of a row: its section, and its position within that section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// Where a row that is *not* being moved ends up after the row at `from`
    /// is removed and reinserted at `to`.
    ///
    /// Calling this with `self == from` is meaningless; the moved row lands
    /// at `to`.
    pub fn after_move(self, from: IndexPath, to: IndexPath) -> IndexPath {
        let mut path = self;
        if path.section == from.section && path.row > from.row {
            path.row -= 1;
        }
        if path.section == to.section && path.row >= to.row {
            path.row += 1;
        }
        path
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.section, self.row)
    }
}

impl From<(usize, usize)> for IndexPath {
    fn from((section, row): (usize, usize)) -> Self {
        Self::new(section, row)
    }
}

use super::Cell;
use crate::geometry::Rect;
use crate::text::char_width;

/// A grid of cells that widgets draw into.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self::filled(width, height, Cell::default())
    }

    pub fn filled(width: u16, height: u16, cell: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![cell; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let rect = rect.intersection(self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Write `text` starting at `(x, y)` with the colours and style of
    /// `brush`, clipped to `max_width` columns and to the buffer. Returns the
    /// number of columns written.
    pub fn write_str(&mut self, x: u16, y: u16, text: &str, max_width: u16, brush: Cell) -> u16 {
        if y >= self.height {
            return 0;
        }
        let limit = x.saturating_add(max_width).min(self.width);
        let mut col = x;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if col + w > limit {
                break;
            }
            self.set(col, y, Cell { char: ch, wide_continuation: false, ..brush });
            if w == 2 {
                let cont = Cell {
                    char: ' ',
                    wide_continuation: true,
                    ..brush
                };
                self.set(col + 1, y, cont);
            }
            col += w;
        }
        col - x
    }

    /// Copy a region into a new buffer of the region's size. Parts of the
    /// region outside this buffer come back as default cells.
    pub fn copy_region(&self, rect: Rect) -> Buffer {
        let mut out = Buffer::new(rect.width, rect.height);
        for dy in 0..rect.height {
            for dx in 0..rect.width {
                if let Some(cell) = self.get(rect.x.saturating_add(dx), rect.y.saturating_add(dy)) {
                    out.set(dx, dy, *cell);
                }
            }
        }
        out
    }

    /// Draw `other` with its top-left corner at `(x, y)`, clipped to `clip`.
    pub fn blit(&mut self, other: &Buffer, x: u16, y: u16, clip: Rect) {
        let clip = clip.intersection(self.area());
        for dy in 0..other.height {
            for dx in 0..other.width {
                let (tx, ty) = (x.saturating_add(dx), y.saturating_add(dy));
                if !clip.contains(tx, ty) {
                    continue;
                }
                if let Some(cell) = other.get(dx, dy) {
                    self.set(tx, ty, *cell);
                }
            }
        }
    }

    /// Iterate over the cells that differ from `other`, with coordinates.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let width = self.width as usize;
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| ((i % width) as u16, (i / width) as u16, cell))
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    /// The characters of one line, for inspection.
    pub fn line(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }
}

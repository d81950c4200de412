use crate::buffer::Cell;
use crate::style::{Rgb, TextStyle};

/// Colours used by the list and its drag overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub selected_fg: Rgb,
    pub selected_bg: Rgb,
    pub header_fg: Rgb,
    pub header_bg: Rgb,
    /// Fill of the empty slot a dragged row leaves behind.
    pub placeholder_bg: Rgb,
    /// Colours of the floating row while dragged.
    pub snapshot_fg: Rgb,
    pub snapshot_bg: Rgb,
}

impl Default for ListStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(24, 24, 28),
            selected_fg: Rgb::new(255, 255, 255),
            selected_bg: Rgb::new(50, 80, 130),
            header_fg: Rgb::new(150, 150, 160),
            header_bg: Rgb::new(34, 34, 40),
            placeholder_bg: Rgb::new(14, 14, 16),
            snapshot_fg: Rgb::new(255, 255, 255),
            snapshot_bg: Rgb::new(70, 70, 90),
        }
    }
}

impl ListStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colors(mut self, fg: Rgb, bg: Rgb) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }

    pub fn selected(mut self, fg: Rgb, bg: Rgb) -> Self {
        self.selected_fg = fg;
        self.selected_bg = bg;
        self
    }

    pub fn header(mut self, fg: Rgb, bg: Rgb) -> Self {
        self.header_fg = fg;
        self.header_bg = bg;
        self
    }

    pub fn placeholder(mut self, bg: Rgb) -> Self {
        self.placeholder_bg = bg;
        self
    }

    pub fn snapshot(mut self, fg: Rgb, bg: Rgb) -> Self {
        self.snapshot_fg = fg;
        self.snapshot_bg = bg;
        self
    }

    pub(crate) fn row_brush(&self, selected: bool) -> Cell {
        if selected {
            Cell::blank(self.selected_fg, self.selected_bg)
        } else {
            Cell::blank(self.fg, self.bg)
        }
    }

    pub(crate) fn header_brush(&self) -> Cell {
        Cell::blank(self.header_fg, self.header_bg).with_style(TextStyle::new().bold())
    }

    /// Elevated look for the dragged row: its own colours, bold.
    pub(crate) fn snapshot_brush(&self) -> Cell {
        Cell::blank(self.snapshot_fg, self.snapshot_bg).with_style(TextStyle::new().bold())
    }
}

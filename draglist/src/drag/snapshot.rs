use crate::buffer::Buffer;
use crate::geometry::Rect;

/// Off-screen copy of a dragged row, drawn above everything else at `top`.
#[derive(Debug, Clone)]
pub(crate) struct Snapshot {
    pub cells: Buffer,
    /// Screen line of the snapshot's first line.
    pub top: u16,
}

impl Snapshot {
    pub fn new(cells: Buffer, top: u16) -> Self {
        Self { cells, top }
    }

    pub fn height(&self) -> u16 {
        self.cells.height()
    }

    /// Place the snapshot so that its line `grab` sits under `pointer_y`,
    /// keeping it inside `area` vertically.
    pub fn follow(&mut self, pointer_y: u16, grab: u16, area: Rect) {
        let lowest = area.bottom().saturating_sub(self.height()).max(area.y);
        self.top = pointer_y.saturating_sub(grab).clamp(area.y, lowest);
    }

    pub fn draw(&self, buffer: &mut Buffer, area: Rect) {
        buffer.blit(&self.cells, area.x, self.top, area);
    }
}

//! Drawing the list into a cell buffer.

use std::time::Instant;

use super::data_source::DataSource;
use super::view::ListView;
use crate::buffer::{Buffer, Cell};
use crate::geometry::Rect;
use crate::index_path::IndexPath;
use crate::text::truncate_to_width;

impl<S: DataSource> ListView<S> {
    /// Draw the list into `buffer` at its area, with row animations sampled
    /// at `now`.
    pub fn render(&self, buffer: &mut Buffer, now: Instant) {
        self.render_with_placeholder(buffer, now, None);
    }

    /// Draw the list, leaving `placeholder` as an empty slot.
    pub(crate) fn render_with_placeholder(
        &self,
        buffer: &mut Buffer,
        now: Instant,
        placeholder: Option<IndexPath>,
    ) {
        let area = self.area().intersection(buffer.area());
        if area.is_empty() {
            return;
        }
        let style = self.style();
        buffer.fill(area, Cell::blank(style.fg, style.bg));

        for section in 0..self.number_of_sections() {
            if let Some(title) = self.data_source().section_title(section) {
                let y = self.screen_y(self.section_top(section));
                if y >= area.y as i64 && y < area.bottom() as i64 {
                    let header = Rect::new(area.x, y as u16, area.width, 1);
                    let brush = style.header_brush();
                    buffer.fill(header, brush);
                    buffer.write_str(area.x, y as u16, &title, area.width, brush);
                }
            }
        }

        // Sliding rows go last so they pass over the ones at rest.
        let (moving, resting): (Vec<IndexPath>, Vec<IndexPath>) = self
            .all_index_paths()
            .into_iter()
            .partition(|&path| self.row_offset(path, now) != 0);

        for path in resting.into_iter().chain(moving) {
            let top = self.screen_y(self.content_y(path)) + self.row_offset(path, now) as i64;
            if placeholder == Some(path) {
                self.fill_rows(buffer, top, area, Cell::blank(style.fg, style.placeholder_bg));
            } else {
                let brush = style.row_brush(self.selected_row() == Some(path));
                self.draw_row(buffer, path, top, area, brush);
            }
        }
    }

    /// Fill the lines a row occupies when its top is at screen line `top`,
    /// clipped to `clip`.
    fn fill_rows(&self, buffer: &mut Buffer, top: i64, clip: Rect, brush: Cell) {
        for line in 0..self.row_height() as i64 {
            let y = top + line;
            if y >= clip.y as i64 && y < clip.bottom() as i64 {
                buffer.fill(Rect::new(clip.x, y as u16, clip.width, 1), brush);
            }
        }
    }

    /// Draw one row with its top at screen line `top`, clipped to `clip`.
    pub(crate) fn draw_row(
        &self,
        buffer: &mut Buffer,
        index_path: IndexPath,
        top: i64,
        clip: Rect,
        brush: Cell,
    ) {
        self.fill_rows(buffer, top, clip, brush);
        if top >= clip.y as i64 && top < clip.bottom() as i64 {
            let text = self.data_source().row_text(index_path);
            let text = truncate_to_width(&text, clip.width as usize);
            buffer.write_str(clip.x, top as u16, &text, clip.width, brush);
        }
    }

    /// Render a single row off-screen, full width and height, regardless of
    /// whether it is currently visible.
    pub fn render_row(&self, index_path: IndexPath, brush: Cell) -> Buffer {
        let width = self.area().width;
        let height = self.row_height();
        let mut buffer = Buffer::filled(width, height, brush);
        let clip = buffer.area();
        self.draw_row(&mut buffer, index_path, 0, clip, brush);
        buffer
    }
}

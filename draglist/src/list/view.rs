use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use log::{debug, trace};

use super::data_source::DataSource;
use super::style::ListStyle;
use crate::error::ReorderError;
use crate::event::{Event, Key, MouseButton};
use crate::geometry::Rect;
use crate::index_path::IndexPath;
use crate::transitions::{Easing, Transition};

/// Unique identifier for a list widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(usize);

impl ListId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__list_{}", self.0)
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// What lies under a point of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Row(IndexPath),
    /// Header line of a titled section.
    Header(usize),
    /// Inside the viewport but below the last row.
    Empty,
    /// Outside the viewport.
    Outside,
}

/// A scrollable, selectable list of rows grouped in sections.
#[derive(Debug)]
pub struct ListView<S: DataSource> {
    id: ListId,
    source: S,
    /// Viewport on screen (set by the host or by `render`).
    area: Rect,
    row_height: u16,
    /// First visible content line.
    scroll_offset: u32,
    selected: Option<IndexPath>,
    /// Row under a left press that has not been released yet.
    pressed: Option<IndexPath>,
    style: ListStyle,
    /// Rows still sliding towards their layout position, as line offsets.
    shifts: HashMap<IndexPath, Transition>,
    shift_duration: Duration,
    easing: Easing,
}

impl<S: DataSource> ListView<S> {
    pub fn new(source: S) -> Self {
        Self {
            id: ListId::new(),
            source,
            area: Rect::default(),
            row_height: 1,
            scroll_offset: 0,
            selected: None,
            pressed: None,
            style: ListStyle::default(),
            shifts: HashMap::new(),
            shift_duration: Duration::from_millis(150),
            easing: Easing::EaseOut,
        }
    }

    pub fn id(&self) -> ListId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    pub fn data_source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the rows. Call [`reload_data`](Self::reload_data)
    /// after changing their count or order.
    pub fn data_source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Forget per-row state that may no longer match the data.
    pub fn reload_data(&mut self) {
        self.shifts.clear();
        self.pressed = None;
        if let Some(selected) = self.selected
            && !self.contains(selected)
        {
            self.selected = None;
        }
        self.clamp_scroll();
        debug!("{}: reloaded, {} rows", self.id, self.all_index_paths().len());
    }

    pub fn number_of_sections(&self) -> usize {
        self.source.number_of_sections()
    }

    pub fn number_of_rows(&self, section: usize) -> usize {
        if section < self.number_of_sections() {
            self.source.number_of_rows(section)
        } else {
            0
        }
    }

    pub fn contains(&self, index_path: IndexPath) -> bool {
        index_path.row < self.number_of_rows(index_path.section)
    }

    /// Every row coordinate in display order.
    pub fn all_index_paths(&self) -> Vec<IndexPath> {
        (0..self.number_of_sections())
            .flat_map(|section| {
                (0..self.number_of_rows(section)).map(move |row| IndexPath::new(section, row))
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Appearance
    // -------------------------------------------------------------------------

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
        self.clamp_scroll();
    }

    pub fn row_height(&self) -> u16 {
        self.row_height
    }

    pub fn set_row_height(&mut self, height: u16) {
        self.row_height = height.max(1);
        self.shifts.clear();
        self.clamp_scroll();
    }

    pub fn style(&self) -> &ListStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: ListStyle) {
        self.style = style;
    }

    /// Duration and easing of the slide rows make when another row moves
    /// past them. A zero duration disables the animation.
    pub fn set_animation(&mut self, duration: Duration, easing: Easing) {
        self.shift_duration = duration;
        self.easing = easing;
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    fn header_height(&self, section: usize) -> u32 {
        if self.source.section_title(section).is_some() { 1 } else { 0 }
    }

    fn section_height(&self, section: usize) -> u32 {
        self.header_height(section) + self.number_of_rows(section) as u32 * self.row_height as u32
    }

    /// Content line where a section (its header, if any) starts.
    pub(crate) fn section_top(&self, section: usize) -> u32 {
        (0..section).map(|s| self.section_height(s)).sum()
    }

    /// Content line where a row starts.
    pub(crate) fn content_y(&self, index_path: IndexPath) -> u32 {
        self.section_top(index_path.section)
            + self.header_height(index_path.section)
            + index_path.row as u32 * self.row_height as u32
    }

    pub fn content_height(&self) -> u32 {
        (0..self.number_of_sections()).map(|s| self.section_height(s)).sum()
    }

    /// Screen line of a content line, which may lie outside the viewport.
    pub(crate) fn screen_y(&self, content_y: u32) -> i64 {
        self.area.y as i64 + content_y as i64 - self.scroll_offset as i64
    }

    /// What is under the screen point `(x, y)`.
    pub fn hit(&self, x: u16, y: u16) -> Hit {
        if !self.area.contains(x, y) {
            return Hit::Outside;
        }
        let line = self.scroll_offset + (y - self.area.y) as u32;
        let mut top = 0;
        for section in 0..self.number_of_sections() {
            let header = self.header_height(section);
            if line < top + header {
                return Hit::Header(section);
            }
            let rows_end = top + self.section_height(section);
            if line < rows_end {
                let row = (line - top - header) / self.row_height as u32;
                return Hit::Row(IndexPath::new(section, row as usize));
            }
            top = rows_end;
        }
        Hit::Empty
    }

    pub fn index_path_at(&self, x: u16, y: u16) -> Option<IndexPath> {
        match self.hit(x, y) {
            Hit::Row(index_path) => Some(index_path),
            _ => None,
        }
    }

    /// Visible part of a row on screen, ignoring animations.
    pub fn rect_for_row(&self, index_path: IndexPath) -> Option<Rect> {
        if !self.contains(index_path) {
            return None;
        }
        let top = self.screen_y(self.content_y(index_path));
        let bottom = top + self.row_height as i64;
        let visible_top = top.max(self.area.y as i64);
        let visible_bottom = bottom.min(self.area.bottom() as i64);
        if visible_bottom <= visible_top {
            return None;
        }
        Some(Rect::new(
            self.area.x,
            visible_top as u16,
            self.area.width,
            (visible_bottom - visible_top) as u16,
        ))
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    fn max_scroll_offset(&self) -> u32 {
        self.content_height().saturating_sub(self.area.height as u32)
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }

    /// Scroll by `delta` lines. Returns true if the offset changed.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let previous = self.scroll_offset;
        let target = (previous as i64 + delta as i64).clamp(0, self.max_scroll_offset() as i64);
        self.scroll_offset = target as u32;
        self.scroll_offset != previous
    }

    /// Scroll just enough to show the whole row.
    pub fn scroll_to_row(&mut self, index_path: IndexPath) {
        if !self.contains(index_path) || self.area.height == 0 {
            return;
        }
        let top = self.content_y(index_path);
        let bottom = top + self.row_height as u32;
        if top < self.scroll_offset {
            self.scroll_offset = top;
        } else if bottom > self.scroll_offset + self.area.height as u32 {
            self.scroll_offset = bottom.saturating_sub(self.area.height as u32);
        }
        self.clamp_scroll();
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn selected_row(&self) -> Option<IndexPath> {
        self.selected
    }

    pub fn select_row(&mut self, index_path: IndexPath) -> bool {
        if !self.contains(index_path) {
            return false;
        }
        self.selected = Some(index_path);
        debug!("{}: selected {}", self.id, index_path);
        true
    }

    pub fn deselect_row(&mut self) -> Option<IndexPath> {
        self.selected.take()
    }

    /// Drop a pending tap so the coming release does not select anything.
    pub fn cancel_press(&mut self) {
        self.pressed = None;
    }

    fn move_selection(&mut self, key: Key) -> bool {
        let paths = self.all_index_paths();
        if paths.is_empty() {
            return false;
        }
        let current = self.selected.and_then(|s| paths.iter().position(|p| *p == s));
        let page = (self.area.height / self.row_height).max(1) as usize;
        let last = paths.len() - 1;
        let next = match (key, current) {
            (Key::Up, Some(i)) => i.saturating_sub(1),
            (Key::Down, Some(i)) => (i + 1).min(last),
            (Key::PageUp, Some(i)) => i.saturating_sub(page),
            (Key::PageDown, Some(i)) => (i + page).min(last),
            (Key::Home, _) => 0,
            (Key::End, _) => last,
            (Key::Up | Key::Down | Key::PageUp | Key::PageDown, None) => 0,
            _ => return false,
        };
        if current == Some(next) {
            return false;
        }
        self.selected = Some(paths[next]);
        self.scroll_to_row(paths[next]);
        true
    }

    // -------------------------------------------------------------------------
    // Reordering
    // -------------------------------------------------------------------------

    fn validate_move(&self, from: IndexPath, to: IndexPath) -> Result<(), ReorderError> {
        let count = self.number_of_sections();
        for section in [from.section, to.section] {
            if section >= count {
                return Err(ReorderError::SectionOutOfBounds { section, count });
            }
        }
        if !self.contains(from) {
            return Err(ReorderError::RowOutOfBounds(from));
        }
        let mut max_row = self.number_of_rows(to.section);
        if from.section == to.section {
            max_row -= 1;
        }
        if to.row > max_row {
            return Err(ReorderError::DestinationOutOfBounds(to));
        }
        Ok(())
    }

    /// Move a row in the data source, animating the rows it passes.
    pub fn move_row(&mut self, from: IndexPath, to: IndexPath) -> Result<(), ReorderError> {
        self.move_row_at(from, to, Instant::now())
    }

    /// [`move_row`](Self::move_row) with animations starting at `now`.
    pub fn move_row_at(
        &mut self,
        from: IndexPath,
        to: IndexPath,
        now: Instant,
    ) -> Result<(), ReorderError> {
        self.validate_move(from, to)?;
        if from == to {
            return Ok(());
        }

        // Rows whose coordinate changes, with where they are drawn right now.
        let displaced: Vec<(IndexPath, i64)> = self
            .all_index_paths()
            .into_iter()
            .filter(|&path| path != from && path.after_move(from, to) != path)
            .map(|path| {
                let drawn = self.content_y(path) as i64 + self.row_offset(path, now) as i64;
                (path.after_move(from, to), drawn)
            })
            .collect();

        let previous = std::mem::take(&mut self.shifts);
        for (path, transition) in previous {
            if path != from && !transition.is_finished(now) {
                self.shifts.insert(path.after_move(from, to), transition);
            }
        }

        self.source.move_row(from, to);
        trace!("{}: moved row {} -> {}", self.id, from, to);

        if !self.shift_duration.is_zero() {
            for (path, drawn) in displaced {
                let offset = (drawn - self.content_y(path) as i64) as i32;
                if offset == 0 {
                    self.shifts.remove(&path);
                    continue;
                }
                let transition =
                    Transition::new(offset, 0, now, self.shift_duration, self.easing);
                self.shifts.insert(path, transition);
            }
        }

        self.selected = self.selected.map(|s| {
            if s == from { to } else { s.after_move(from, to) }
        });
        self.pressed = None;
        Ok(())
    }

    /// Start a row `offset` lines away from its layout position and let it
    /// slide home.
    pub(crate) fn settle_row(&mut self, index_path: IndexPath, offset: i32, now: Instant) {
        if offset == 0 || self.shift_duration.is_zero() {
            self.shifts.remove(&index_path);
            return;
        }
        let transition = Transition::new(offset, 0, now, self.shift_duration, self.easing);
        self.shifts.insert(index_path, transition);
    }

    /// Current animation offset of a row, in lines.
    pub fn row_offset(&self, index_path: IndexPath, now: Instant) -> i32 {
        self.shifts
            .get(&index_path)
            .map(|t| t.value(now))
            .unwrap_or(0)
    }

    /// True while any row is still sliding; the host should keep rendering.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.shifts.values().any(|t| !t.is_finished(now))
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Plain list behaviour: tap to select, wheel to scroll, keys to move the
    /// selection.
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        match *event {
            Event::Press {
                x,
                y,
                button: MouseButton::Left,
                ..
            } => match self.hit(x, y) {
                Hit::Outside => EventResult::Ignored,
                hit => {
                    self.pressed = match hit {
                        Hit::Row(index_path) => Some(index_path),
                        _ => None,
                    };
                    EventResult::Consumed
                }
            },
            Event::Drag {
                x,
                y,
                button: MouseButton::Left,
                ..
            } => {
                if self.pressed.is_some() && self.pressed != self.index_path_at(x, y) {
                    self.pressed = None;
                }
                EventResult::Ignored
            }
            Event::Release {
                x,
                y,
                button: MouseButton::Left,
                ..
            } => match self.pressed.take() {
                Some(pressed) if self.index_path_at(x, y) == Some(pressed) => {
                    self.select_row(pressed);
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            },
            Event::Scroll { x, y, delta, .. } if self.area.contains(x, y) => {
                if self.scroll_by(delta as i32) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Event::Key { key, modifiers, .. } if modifiers.none() => {
                if self.move_selection(key) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Event::Interrupt => {
                self.pressed = None;
                EventResult::Ignored
            }
            _ => EventResult::Ignored,
        }
    }
}

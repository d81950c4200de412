use std::cell::RefCell;
use std::ops::Deref;
use std::rc::{Rc, Weak};
use std::time::Instant;

use log::{debug, trace, warn};

use super::config::DragConfig;
use super::delegate::DragDelegate;
use super::gesture::{LongPress, PressOutcome};
use super::snapshot::Snapshot;
use super::state::{ActiveDrag, CancelReason, DragPhase, DragState};
use crate::buffer::Buffer;
use crate::event::{Event, Key, MouseButton};
use crate::geometry::{Point, Rect};
use crate::index_path::IndexPath;
use crate::list::{DataSource, EventResult, Hit, ListStyle, ListView};

/// A [`ListView`] whose rows can be reordered by press-and-hold dragging.
///
/// Dragging is off by default; until [`set_drag_enabled`](Self::set_drag_enabled)
/// turns it on, every event goes straight to the embedded list. Read-only list
/// queries are available through `Deref`.
pub struct DraggableListView<S: DataSource> {
    list: ListView<S>,
    drag_enabled: bool,
    delegate: Option<Weak<RefCell<dyn DragDelegate>>>,
    config: DragConfig,
    state: DragState,
}

impl<S: DataSource> DraggableListView<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, DragConfig::default())
    }

    pub fn with_config(source: S, config: DragConfig) -> Self {
        let mut list = ListView::new(source);
        list.set_animation(config.shift_duration, config.easing);
        Self {
            list,
            drag_enabled: false,
            delegate: None,
            config,
            state: DragState::Idle,
        }
    }

    // -------------------------------------------------------------------------
    // Drag settings
    // -------------------------------------------------------------------------

    pub fn is_drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    /// Turn reordering on or off. Turning it off cancels a drag in progress.
    pub fn set_drag_enabled(&mut self, enabled: bool) {
        if self.drag_enabled == enabled {
            return;
        }
        if !enabled {
            self.abort(CancelReason::Disabled);
        }
        self.drag_enabled = enabled;
        debug!("{}: drag {}", self.list.id(), if enabled { "enabled" } else { "disabled" });
    }

    /// Set the delegate. Only a weak reference is kept. Replacing the
    /// delegate mid-drag cancels the drag and tells the outgoing delegate.
    pub fn set_delegate<D: DragDelegate + 'static>(&mut self, delegate: &Rc<RefCell<D>>) {
        self.abort(CancelReason::DelegateChanged);
        let weak: Weak<RefCell<D>> = Rc::downgrade(delegate);
        self.delegate = Some(weak);
    }

    /// Remove the delegate; drags can no longer start.
    pub fn clear_delegate(&mut self) {
        self.abort(CancelReason::DelegateChanged);
        self.delegate = None;
    }

    /// The delegate, if one is set and still alive.
    pub fn delegate(&self) -> Option<Rc<RefCell<dyn DragDelegate>>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DragConfig) {
        self.list.set_animation(config.shift_duration, config.easing);
        self.config = config;
    }

    /// True between did-begin and did-end/did-cancel.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    // -------------------------------------------------------------------------
    // Forwarded list operations
    // -------------------------------------------------------------------------

    /// Mutable access to the rows. Cancels a drag in progress, since the
    /// dragged row may no longer be where the drag thinks it is.
    pub fn data_source_mut(&mut self) -> &mut S {
        self.abort(CancelReason::DataChanged);
        self.list.data_source_mut()
    }

    pub fn reload_data(&mut self) {
        self.abort(CancelReason::DataChanged);
        self.list.reload_data();
    }

    pub fn set_area(&mut self, area: Rect) {
        self.list.set_area(area);
        if let DragState::Dragging(drag) = &mut self.state {
            let area = self.list.area();
            drag.snapshot.follow(drag.pointer.y, drag.grab, area);
        }
    }

    pub fn set_row_height(&mut self, height: u16) {
        self.abort(CancelReason::DataChanged);
        self.list.set_row_height(height);
    }

    pub fn set_style(&mut self, style: ListStyle) {
        self.list.set_style(style);
    }

    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let scrolled = self.list.scroll_by(delta);
        if scrolled {
            self.retarget(Instant::now());
        }
        scrolled
    }

    pub fn scroll_to_row(&mut self, index_path: IndexPath) {
        self.list.scroll_to_row(index_path);
        self.retarget(Instant::now());
    }

    pub fn select_row(&mut self, index_path: IndexPath) -> bool {
        self.list.select_row(index_path)
    }

    pub fn deselect_row(&mut self) -> Option<IndexPath> {
        self.list.deselect_row()
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Draw the list; while dragging, the row's slot is left empty and its
    /// snapshot is drawn on top at the pointer.
    pub fn render(&self, buffer: &mut Buffer, now: Instant) {
        match &self.state {
            DragState::Dragging(drag) => {
                self.list
                    .render_with_placeholder(buffer, now, Some(drag.placeholder));
                drag.snapshot.draw(buffer, self.list.area());
            }
            _ => self.list.render(buffer, now),
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        if !self.drag_enabled {
            return self.list.handle_event(event);
        }
        if self.is_dragging() {
            return self.handle_drag_event(event);
        }

        if let Event::Press {
            x,
            y,
            button: MouseButton::Left,
            at,
        } = *event
            && let Hit::Row(origin) = self.list.hit(x, y)
        {
            trace!("{}: press on {}", self.list.id(), origin);
            self.state = DragState::Pressing(LongPress::new(origin, Point::new(x, y), at));
            let result = self.list.handle_event(event);
            // A zero hold duration is recognised on the press itself.
            if self.advance_press(&Event::Tick { at }) {
                return EventResult::Consumed;
            }
            return result;
        }

        if self.advance_press(event) {
            return self.handle_drag_event(event);
        }
        self.list.handle_event(event)
    }

    /// Feed `event` to a pending press. Returns true if it started a drag.
    fn advance_press(&mut self, event: &Event) -> bool {
        let DragState::Pressing(press) = self.state else {
            return false;
        };
        match press.update(event, &self.config) {
            PressOutcome::Pending => false,
            PressOutcome::Failed => {
                trace!("{}: press on {} was not a hold", self.list.id(), press.origin);
                self.state = DragState::Idle;
                false
            }
            PressOutcome::Recognized => {
                self.state = DragState::Idle;
                self.begin(press)
            }
        }
    }

    /// Ask the delegate about the held row and start dragging it if allowed.
    fn begin(&mut self, press: LongPress) -> bool {
        let id = self.list.id();
        let origin = press.origin;
        debug!("{}: {} -> {} at {}", id, DragPhase::Idle, DragPhase::Candidate, origin);

        let Some(delegate) = self.delegate() else {
            debug!("{}: no delegate, {} stays put", id, origin);
            return false;
        };
        let approved = match delegate.try_borrow_mut() {
            Ok(mut delegate) => delegate.should_drag_row(id, origin),
            Err(_) => {
                warn!("{}: delegate busy, not dragging {}", id, origin);
                false
            }
        };
        if !approved || !self.list.contains(origin) {
            debug!("{}: {} -> {}, {} denied", id, DragPhase::Candidate, DragPhase::Idle, origin);
            return false;
        }

        self.list.cancel_press();
        let area = self.list.area();
        let row_top = self.list.screen_y(self.list.content_y(origin));
        let grab = (press.start.y as i64 - row_top).clamp(0, self.list.row_height() as i64 - 1);
        let cells = self.list.render_row(origin, self.list.style().snapshot_brush());
        let mut snapshot = Snapshot::new(cells, area.y);
        snapshot.follow(press.start.y, grab as u16, area);

        self.state = DragState::Dragging(ActiveDrag {
            origin,
            placeholder: origin,
            snapshot,
            grab: grab as u16,
            pointer: press.start,
            last_autoscroll: None,
        });
        debug!("{}: {} -> {} at {}", id, DragPhase::Candidate, DragPhase::Dragging, origin);
        self.notify(|d| d.did_begin_dragging(id, origin));
        true
    }

    fn handle_drag_event(&mut self, event: &Event) -> EventResult {
        if self.delegate().is_none() {
            self.cancel(CancelReason::DelegateGone, event.at().unwrap_or_else(Instant::now));
            return EventResult::Consumed;
        }
        match *event {
            Event::Drag { x, y, at, .. } => {
                self.track_pointer(Point::new(x, y), at);
                self.autoscroll(at);
            }
            Event::Release {
                x,
                y,
                button: MouseButton::Left,
                at,
            } => {
                if self.list.area().contains(x, y) {
                    self.track_pointer(Point::new(x, y), at);
                    self.drop_row(at);
                } else {
                    self.cancel(CancelReason::ReleasedOutside, at);
                }
            }
            Event::Scroll { delta, at, .. } => {
                if self.list.scroll_by(delta as i32) {
                    self.retarget(at);
                }
            }
            Event::Key {
                key: Key::Escape,
                at,
                ..
            } if self.config.cancel_on_escape => self.cancel(CancelReason::Escape, at),
            Event::Tick { at } => self.autoscroll(at),
            Event::Interrupt => self.cancel(CancelReason::Interrupted, Instant::now()),
            // Other buttons and keys are swallowed while a row is in the air.
            _ => {}
        }
        EventResult::Consumed
    }

    fn track_pointer(&mut self, pointer: Point, now: Instant) {
        let area = self.list.area();
        if let DragState::Dragging(drag) = &mut self.state {
            drag.pointer = pointer;
            drag.snapshot.follow(pointer.y, drag.grab, area);
        }
        self.retarget(now);
    }

    /// Move the placeholder to whatever is under the pointer.
    fn retarget(&mut self, now: Instant) {
        let DragState::Dragging(drag) = &mut self.state else {
            return;
        };
        let Some(target) = drop_target(&self.list, drag.placeholder, drag.pointer, &self.config)
        else {
            return;
        };
        if target == drag.placeholder {
            return;
        }
        match self.list.move_row_at(drag.placeholder, target, now) {
            Ok(()) => {
                trace!("{}: placeholder {} -> {}", self.list.id(), drag.placeholder, target);
                drag.placeholder = target;
            }
            Err(e) => warn!("{}: cannot move placeholder: {}", self.list.id(), e),
        }
    }

    /// Scroll one line when the pointer rests at an edge of the list.
    fn autoscroll(&mut self, now: Instant) {
        let margin = self.config.autoscroll_margin;
        let area = self.list.area();
        let DragState::Dragging(drag) = &mut self.state else {
            return;
        };
        if margin == 0 || area.is_empty() {
            return;
        }
        let direction = if drag.pointer.y < area.y.saturating_add(margin) {
            -1
        } else if drag.pointer.y >= area.bottom().saturating_sub(margin) {
            1
        } else {
            drag.last_autoscroll = None;
            return;
        };
        if let Some(last) = drag.last_autoscroll
            && now.saturating_duration_since(last) < self.config.autoscroll_interval
        {
            return;
        }
        if !self.list.scroll_by(direction) {
            return;
        }
        drag.last_autoscroll = Some(now);
        // Aim at the edge row even if the pointer has left the list.
        drag.pointer.y = drag.pointer.y.clamp(area.y, area.bottom() - 1);
        drag.pointer.x = drag.pointer.x.clamp(area.x, area.right().saturating_sub(1));
        trace!("{}: autoscroll {}", self.list.id(), direction);
        self.retarget(now);
    }

    fn drop_row(&mut self, now: Instant) {
        let DragState::Dragging(drag) = std::mem::take(&mut self.state) else {
            return;
        };
        let id = self.list.id();
        let destination = drag.placeholder;
        let row_top = self.list.screen_y(self.list.content_y(destination));
        self.list
            .settle_row(destination, (drag.snapshot.top as i64 - row_top) as i32, now);
        debug!(
            "{}: {} -> {}, {} -> {}",
            id,
            DragPhase::Dragging,
            DragPhase::Dropped,
            drag.origin,
            destination
        );
        self.notify(|d| d.did_end_dragging(id, destination));
    }

    fn cancel(&mut self, reason: CancelReason, now: Instant) {
        let DragState::Dragging(drag) = std::mem::take(&mut self.state) else {
            return;
        };
        let id = self.list.id();
        if drag.placeholder != drag.origin
            && let Err(e) = self.list.move_row_at(drag.placeholder, drag.origin, now)
        {
            warn!("{}: cannot restore {} to {}: {}", id, drag.placeholder, drag.origin, e);
        }
        let row_top = self.list.screen_y(self.list.content_y(drag.origin));
        self.list
            .settle_row(drag.origin, (drag.snapshot.top as i64 - row_top) as i32, now);
        debug!(
            "{}: {} -> {} ({}), {} restored",
            id,
            DragPhase::Dragging,
            DragPhase::Cancelled,
            reason,
            drag.origin
        );
        let origin = drag.origin;
        self.notify(|d| d.did_cancel_dragging(id, origin));
    }

    /// Stop whatever gesture is in flight without new input.
    fn abort(&mut self, reason: CancelReason) {
        match self.state {
            DragState::Dragging(_) => self.cancel(reason, Instant::now()),
            DragState::Pressing(_) => self.state = DragState::Idle,
            DragState::Idle => {}
        }
    }

    fn notify(&self, f: impl FnOnce(&mut dyn DragDelegate)) {
        let Some(delegate) = self.delegate() else {
            debug!("{}: delegate gone, notification dropped", self.list.id());
            return;
        };
        match delegate.try_borrow_mut() {
            Ok(mut delegate) => f(&mut *delegate),
            Err(_) => warn!("{}: delegate busy, notification dropped", self.list.id()),
        }
    }
}

impl<S: DataSource> Deref for DraggableListView<S> {
    type Target = ListView<S>;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}

impl<S: DataSource + std::fmt::Debug> std::fmt::Debug for DraggableListView<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraggableListView")
            .field("list", &self.list)
            .field("drag_enabled", &self.drag_enabled)
            .field("has_delegate", &self.delegate().is_some())
            .field("config", &self.config)
            .field("state", &self.state)
            .finish()
    }
}

/// Where the placeholder should go for a pointer at `pointer`.
///
/// A row targets itself. A section header is the boundary between the end of
/// the previous section and the start of its own. Empty space below the rows
/// targets the end of the last section.
fn drop_target<S: DataSource>(
    list: &ListView<S>,
    placeholder: IndexPath,
    pointer: Point,
    config: &DragConfig,
) -> Option<IndexPath> {
    let rows_without_placeholder = |section: usize| {
        let rows = list.number_of_rows(section);
        if section == placeholder.section { rows - 1 } else { rows }
    };

    let target = match list.hit(pointer.x, pointer.y) {
        Hit::Outside => return None,
        Hit::Row(index_path) => index_path,
        Hit::Header(section) if section > placeholder.section => IndexPath::new(section, 0),
        Hit::Header(0) => return None,
        Hit::Header(section) => {
            let above = section - 1;
            IndexPath::new(above, rows_without_placeholder(above))
        }
        Hit::Empty => {
            let last = list.number_of_sections().checked_sub(1)?;
            IndexPath::new(last, rows_without_placeholder(last))
        }
    };

    if target.section != placeholder.section && !config.allow_cross_section {
        return None;
    }
    Some(target)
}

use crate::index_path::IndexPath;
use crate::list::ListId;

/// Approves and observes drags on a [`DraggableListView`](super::DraggableListView).
///
/// Every method is optional. A delegate that does not override
/// [`should_drag_row`](Self::should_drag_row) never lets a drag start.
///
/// The list only keeps a weak reference; keep the delegate alive for as long
/// as drags should work.
pub trait DragDelegate {
    /// Asked once the user has held a press on `index_path`. Return true to
    /// start dragging the row.
    fn should_drag_row(&mut self, _list: ListId, _index_path: IndexPath) -> bool {
        false
    }

    /// The row at `index_path` is now being dragged.
    fn did_begin_dragging(&mut self, _list: ListId, _index_path: IndexPath) {}

    /// The row was dropped and now lives at `index_path`. The list has
    /// already reordered its data source; persist the new order elsewhere if
    /// needed.
    fn did_end_dragging(&mut self, _list: ListId, _index_path: IndexPath) {}

    /// The drag was abandoned and the row is back at `index_path`, where it
    /// started. No reorder happened.
    fn did_cancel_dragging(&mut self, _list: ListId, _index_path: IndexPath) {}
}

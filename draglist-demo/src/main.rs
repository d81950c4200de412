//! Interactive demo: a sectioned task board whose rows can be reordered by
//! holding the left mouse button on a row and dragging it.
//!
//! Keys: `d` toggles dragging, arrows move the selection, Esc cancels a
//! drag, `q` quits. Logs go to `draglist-demo.log`.

mod terminal;

use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use draglist::{
    Buffer, Cell, DragConfig, DragDelegate, DraggableListView, Event, IndexPath, Key, ListId,
    Rect, Section, Sections, TextStyle,
};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use terminal::Terminal;

/// Approves drags for every section except the pinned one and keeps a line
/// of status text about the last drag.
#[derive(Debug, Default)]
struct Board {
    status: String,
    moves: usize,
}

const PINNED_SECTION: usize = 0;

impl DragDelegate for Board {
    fn should_drag_row(&mut self, _list: ListId, index_path: IndexPath) -> bool {
        if index_path.section == PINNED_SECTION {
            self.status = format!("{} is pinned", index_path);
            return false;
        }
        true
    }

    fn did_begin_dragging(&mut self, _list: ListId, index_path: IndexPath) {
        self.status = format!("dragging {}", index_path);
    }

    fn did_end_dragging(&mut self, _list: ListId, index_path: IndexPath) {
        self.moves += 1;
        self.status = format!("dropped at {} ({} moves)", index_path, self.moves);
        info!("Row dropped at {}", index_path);
    }

    fn did_cancel_dragging(&mut self, _list: ListId, index_path: IndexPath) {
        self.status = format!("cancelled, back at {}", index_path);
    }
}

fn tasks() -> Sections<String> {
    let rows = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    Sections::new(vec![
        Section::titled("Pinned", rows(&["Read the release notes"])),
        Section::titled(
            "Today",
            rows(&["Review pull requests", "Fix flaky test", "Write changelog"]),
        ),
        Section::titled(
            "This week",
            rows(&[
                "Profile startup time",
                "Update dependencies",
                "Plan the sprint",
                "Reply to issues",
            ]),
        ),
        Section::titled("Someday", rows(&["Rewrite the docs site", "Try a new theme"])),
    ])
}

fn draw_status(buffer: &mut Buffer, list: &DraggableListView<Sections<String>>, board: &Board) {
    let y = buffer.height().saturating_sub(1);
    let brush = Cell::default().with_style(TextStyle::new().dim());
    let mode = if list.is_drag_enabled() { "drag on" } else { "drag off" };
    let line = format!(" [{}] {}  (d: toggle, q: quit)", mode, board.status);
    buffer.write_str(0, y, &line, buffer.width(), brush);
}

fn run() -> io::Result<()> {
    let board = Rc::new(RefCell::new(Board::default()));
    let mut list = DraggableListView::with_config(tasks(), DragConfig::default());
    list.set_delegate(&board);
    list.set_drag_enabled(true);

    let mut terminal = Terminal::new()?;
    loop {
        let (width, height) = terminal.size();
        list.set_area(Rect::new(2, 1, width.saturating_sub(4), height.saturating_sub(3)));

        let now = Instant::now();
        terminal.draw(|buffer| {
            list.render(buffer, now);
            draw_status(buffer, &list, &board.borrow());
        })?;

        let timeout = if list.is_animating(now) {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(50)
        };
        for event in terminal.poll(timeout)? {
            if let Event::Key { key, .. } = event {
                match key {
                    Key::Char('q') => return Ok(()),
                    Key::Char('d') => {
                        let enabled = !list.is_drag_enabled();
                        list.set_drag_enabled(enabled);
                        continue;
                    }
                    _ => {}
                }
            }
            list.handle_event(&event);
        }
    }
}

fn main() {
    let log_file = File::create("draglist-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

use std::time::Instant;

use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as CtButton,
    MouseEvent, MouseEventKind,
};
use draglist::{Event, Key, Modifiers, MouseButton, Point};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CtEvent {
    CtEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_mouse_events_convert() {
    let at = Instant::now();
    assert_eq!(
        Event::from_crossterm(mouse(MouseEventKind::Down(CtButton::Left), 3, 4), at),
        Some(Event::Press {
            x: 3,
            y: 4,
            button: MouseButton::Left,
            at
        })
    );
    assert_eq!(
        Event::from_crossterm(mouse(MouseEventKind::Drag(CtButton::Left), 5, 6), at),
        Some(Event::Drag {
            x: 5,
            y: 6,
            button: MouseButton::Left,
            at
        })
    );
    assert_eq!(
        Event::from_crossterm(mouse(MouseEventKind::Up(CtButton::Right), 1, 1), at),
        Some(Event::Release {
            x: 1,
            y: 1,
            button: MouseButton::Right,
            at
        })
    );
    assert_eq!(
        Event::from_crossterm(mouse(MouseEventKind::ScrollUp, 0, 0), at),
        Some(Event::Scroll {
            x: 0,
            y: 0,
            delta: -1,
            at
        })
    );
    assert_eq!(
        Event::from_crossterm(mouse(MouseEventKind::Moved, 0, 0), at),
        None
    );
}

#[test]
fn test_key_events_convert() {
    let at = Instant::now();
    let press = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
    assert_eq!(
        Event::from_crossterm(CtEvent::Key(press), at),
        Some(Event::Key {
            key: Key::Escape,
            modifiers: Modifiers::new(),
            at
        })
    );

    let mut release = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
    release.kind = KeyEventKind::Release;
    assert_eq!(Event::from_crossterm(CtEvent::Key(release), at), None);
}

#[test]
fn test_focus_and_resize_convert() {
    let at = Instant::now();
    assert_eq!(
        Event::from_crossterm(CtEvent::FocusLost, at),
        Some(Event::Interrupt)
    );
    assert_eq!(Event::from_crossterm(CtEvent::FocusGained, at), None);
    assert_eq!(
        Event::from_crossterm(CtEvent::Resize(80, 24), at),
        Some(Event::Resize {
            width: 80,
            height: 24
        })
    );
}

#[test]
fn test_event_accessors() {
    let at = Instant::now();
    let event = Event::Drag {
        x: 2,
        y: 9,
        button: MouseButton::Left,
        at,
    };
    assert_eq!(event.at(), Some(at));
    assert_eq!(event.position(), Some(Point::new(2, 9)));
    assert_eq!(Event::Interrupt.at(), None);
    assert_eq!(Event::Tick { at }.position(), None);
}

//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use counter_tui::config::UiConfig;
use counter_tui::ui::app::App;
use counter_tui::ui::counter::{CounterState, CounterStore};
use counter_tui::ui::layout::{card_layout, CardLayout};
use counter_tui::ui::render::draw;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

pub const COLS: u16 = 80;
pub const ROWS: u16 = 24;

pub fn screen() -> Rect {
    Rect::new(0, 0, COLS, ROWS)
}

pub fn layout() -> CardLayout {
    card_layout(screen())
}

/// App sized to the test screen, starting from `value`.
pub fn make_app(value: i64) -> App {
    let store = CounterStore::with_state(CounterState::new(value));
    let mut app = App::with_store(UiConfig::default(), store);
    app.on_resize(COLS, ROWS);
    app
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn release_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    }
}

pub fn mouse(kind: MouseEventKind, rect: Rect) -> MouseEvent {
    MouseEvent {
        kind,
        column: rect.x + rect.width / 2,
        row: rect.y + rect.height / 2,
        modifiers: KeyModifiers::NONE,
    }
}

pub fn click(rect: Rect) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), rect)
}

/// Draw `app` once and return the screen as text, one string per row.
pub fn render(app: &App) -> Vec<String> {
    let backend = TestBackend::new(COLS, ROWS);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..ROWS)
        .map(|y| {
            (0..COLS)
                .map(|x| buffer.cell((x, y)).map(|cell| cell.symbol()).unwrap_or(" "))
                .collect::<String>()
        })
        .collect()
}

/// Text of the value row inside the card, trimmed.
pub fn displayed_value(app: &App) -> String {
    let rows = render(app);
    let value = layout().value;
    rows[value.y as usize]
        .chars()
        .skip(value.x as usize)
        .take(value.width as usize)
        .collect::<String>()
        .trim()
        .to_string()
}

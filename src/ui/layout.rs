use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

pub const CARD_WIDTH: u16 = 34;
pub const CARD_HEIGHT: u16 = 9;
pub const BUTTON_WIDTH: u16 = 9;
const BUTTON_GAP: u16 = 2;

/// One of the two clickable controls on the counter card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Decrement,
    Increment,
}

/// Rectangles of everything drawn on the counter card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub card: Rect,
    pub title: Rect,
    pub value: Rect,
    pub decrement: Rect,
    pub increment: Rect,
}

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Center a `width` x `height` rect inside `area`, clamped to its size.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Lay the card out in the body region of a full-screen `area`.
pub fn card_layout(area: Rect) -> CardLayout {
    let (_, body, _) = layout_regions(area);
    let card = centered_rect_by_size(body, CARD_WIDTH, CARD_HEIGHT);
    let inner = card.inner(Margin::new(1, 1));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(inner);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_GAP),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Fill(1),
        ])
        .split(rows[4]);

    CardLayout {
        card,
        title: rows[0],
        value: rows[2],
        decrement: buttons[1],
        increment: buttons[3],
    }
}

/// Which control, if any, sits under the cell at (`column`, `row`).
pub fn control_at(area: Rect, column: u16, row: u16) -> Option<Control> {
    let layout = card_layout(area);
    let position = Position::new(column, row);
    if layout.decrement.contains(position) {
        Some(Control::Decrement)
    } else if layout.increment.contains(position) {
        Some(Control::Increment)
    } else {
        None
    }
}

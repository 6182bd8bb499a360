//! The counter view: a store subscription plus the card it draws.
//!
//! The view keeps no copy of the value. Its subscription only marks the
//! frame stale; drawing always reads the store.

use std::cell::Cell;
use std::rc::Rc;

use crate::ui::counter::CounterStore;
use crate::ui::layout::CardLayout;
use crate::ui::mvi::Subscription;
use crate::ui::theme::{
    BUTTON_TEXT, CARD_BACKGROUND, CARD_TITLE, COUNTER_VALUE, DECREMENT_BUTTON, INCREMENT_BUTTON,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

pub struct CounterView {
    stale: Rc<Cell<bool>>,
    subscription: Subscription,
}

impl CounterView {
    /// Subscribe to `store`. A freshly mounted view is stale so the first
    /// frame gets drawn.
    pub fn mount(store: &mut CounterStore) -> Self {
        let stale = Rc::new(Cell::new(true));
        let flag = Rc::clone(&stale);
        let subscription = store.subscribe(move |_| flag.set(true));
        Self {
            stale,
            subscription,
        }
    }

    pub fn unmount(self, store: &mut CounterStore) {
        store.unsubscribe(self.subscription);
    }

    pub fn invalidate(&self) {
        self.stale.set(true);
    }

    /// Returns whether a redraw is due and clears the flag.
    pub fn take_stale(&self) -> bool {
        self.stale.replace(false)
    }
}

pub fn render_card(frame: &mut Frame<'_>, layout: &CardLayout, title: &str, value: i64) {
    let card_style = Style::default().bg(CARD_BACKGROUND);
    frame.render_widget(Clear, layout.card);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(card_style.fg(CARD_TITLE))
            .style(card_style),
        layout.card,
    );

    frame.render_widget(
        Paragraph::new(Line::from(title.to_string()))
            .alignment(Alignment::Center)
            .style(card_style.fg(CARD_TITLE).add_modifier(Modifier::BOLD)),
        layout.title,
    );
    frame.render_widget(
        Paragraph::new(Line::from(value.to_string()))
            .alignment(Alignment::Center)
            .style(card_style.fg(COUNTER_VALUE).add_modifier(Modifier::BOLD)),
        layout.value,
    );

    render_button(frame, layout.decrement, "−", DECREMENT_BUTTON);
    render_button(frame, layout.increment, "+", INCREMENT_BUTTON);
}

fn render_button(frame: &mut Frame<'_>, area: Rect, label: &'static str, color: Color) {
    let style = Style::default().bg(color).fg(BUTTON_TEXT);
    frame.render_widget(
        Paragraph::new(Line::from(label))
            .alignment(Alignment::Center)
            .style(style.add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            ),
        area,
    );
}

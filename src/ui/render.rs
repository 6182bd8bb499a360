use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{card_layout, layout_regions};
use crate::ui::theme::PAGE_BACKGROUND;
use crate::ui::view::render_card;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.title()).widget(), header);
    frame.render_widget(
        Block::default().style(Style::default().bg(PAGE_BACKGROUND)),
        body,
    );
    render_card(frame, &card_layout(area), app.title(), app.store().value());
    frame.render_widget(Footer::new(app.mouse_enabled()).widget(footer), footer);
}

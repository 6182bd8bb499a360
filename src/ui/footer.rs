use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const KEY_HINTS: &str = " +/→: Increment │ -/←: Decrement │ q: Quit";
const MOUSE_HINTS: &str = " +/→: Increment │ -/←: Decrement │ Click: Press │ q: Quit";

pub struct Footer {
    mouse: bool,
}

impl Footer {
    /// `mouse` is whether clicks are captured; the click hint is shown only then.
    pub fn new(mouse: bool) -> Self {
        Self { mouse }
    }

    pub fn hints(&self) -> &'static str {
        if self.mouse {
            MOUSE_HINTS
        } else {
            KEY_HINTS
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Pad by char count; the hints contain multi-byte arrows.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

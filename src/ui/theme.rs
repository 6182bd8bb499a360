use ratatui::style::Color;

pub const PAGE_BACKGROUND: Color = Color::Rgb(0x0f, 0x17, 0x2a);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const CARD_BACKGROUND: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const CARD_TITLE: Color = Color::Rgb(0x1f, 0x29, 0x37);
pub const COUNTER_VALUE: Color = Color::Rgb(0x0f, 0x17, 0x2a);
pub const BUTTON_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const DECREMENT_BUTTON: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const INCREMENT_BUTTON: Color = Color::Rgb(0x22, 0xc5, 0x5e);

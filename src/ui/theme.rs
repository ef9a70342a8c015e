use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x5f, 0xf0, 0xd5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

pub const CATEGORY_SOFT: Color = Color::Rgb(0x83, 0xfa, 0x9d);
pub const CATEGORY_HARD: Color = Color::Rgb(0xfa, 0xa0, 0x83);
pub const CATEGORY_OTHER: Color = Color::Rgb(0xfa, 0xd8, 0x83);
pub const CATEGORY_ADDITIONAL: Color = Color::Rgb(0xb8, 0x83, 0xfa);
pub const CATEGORY_BUTTON: Color = Color::Rgb(0x83, 0xdd, 0xfa);

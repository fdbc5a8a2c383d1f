use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xff, 0xb9, 0x51);
pub const TEXT: Color = Color::Rgb(0xf6, 0xf6, 0xf6);
pub const MUTED_TEXT: Color = Color::Rgb(0x9e, 0x9e, 0x9e);
pub const CARD_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const DIALOG_BORDER: Color = Color::Rgb(0xbb, 0x86, 0xfc);
pub const FEMALE_TAG: Color = Color::Rgb(0xf9, 0x4a, 0xff);
pub const MALE_TAG: Color = Color::Rgb(0x03, 0xa9, 0xf4);
pub const TAG_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const HEART: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const GAUGE: Color = Color::Rgb(0x37, 0x00, 0xb3);

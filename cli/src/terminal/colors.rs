use crossterm::style::Color;

pub const SELECTION: Color = Color::AnsiValue(196);
pub const STATUS_BG: Color = Color::AnsiValue(196);
pub const STATUS_FG: Color = Color::AnsiValue(0);
pub const BACKDROP: Color = Color::AnsiValue(235);

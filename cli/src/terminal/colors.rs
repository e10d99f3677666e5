use colored::Color;

pub const PASS: Color = Color::Green;
pub const FAIL: Color = Color::Red;
pub const SECTION: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const DETAIL: Color = Color::White;

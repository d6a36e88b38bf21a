use colored::Color;

pub const PRIMARY: Color = Color::BrightMagenta;
pub const SEPARATOR: Color = Color::BrightBlack;

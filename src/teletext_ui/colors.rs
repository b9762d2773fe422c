use crossterm::style::Color;

// Constants for teletext appearance
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn header_fg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn win_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn loss_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red
pub fn highlight_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn blue_side_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn red_side_fg() -> Color {
    Color::AnsiValue(203)
} // Soft red
pub fn chart_title_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn badge_fg() -> Color {
    Color::AnsiValue(201)
} // Bright magenta
pub fn detail_fg() -> Color {
    Color::AnsiValue(250)
} // Light gray
pub fn title_bg() -> Color {
    Color::AnsiValue(46)
} // Bright green

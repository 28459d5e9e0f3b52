use crossterm::terminal;

/// Columns available for drawing, falling back to 80 when the terminal
/// size cannot be queried (e.g. redirected output).
pub fn terminal_width() -> u16 {
    terminal::size().map(|(columns, _)| columns).unwrap_or(80)
}

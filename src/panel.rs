use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHandleResult {
    Consumed,
    Ignored,
}

/// What the board needs from a column's list widget.
pub trait Panel {
    /// Draw the panel contents into `area`. Borders belong to the caller.
    fn render(&mut self, frame: &mut Frame, area: Rect);

    fn handle_key(&mut self, key: KeyEvent) -> KeyHandleResult;
}

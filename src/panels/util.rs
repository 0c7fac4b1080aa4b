use ratatui::{
    style::{Color, Style},
    symbols::border,
    widgets::{Block, BorderType, Padding},
};

/// Border accent used for the focused column
pub const FOCUS_COLOR: Color = Color::Indexed(62);

/// Frame around a board column. Unfocused columns keep a blank border so the
/// contents line up with the focused one.
pub fn column_block<'a>(focused: bool) -> Block<'a> {
    let block = Block::bordered().padding(Padding::symmetric(2, 1));
    if focused {
        block
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(FOCUS_COLOR))
    } else {
        block.border_set(border::EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

    use super::*;
    use crate::util::buffer_lines;

    fn draw(focused: bool) -> Vec<String> {
        let area = Rect::new(0, 0, 8, 4);
        let mut buffer = Buffer::empty(area);
        column_block(focused).render(area, &mut buffer);
        buffer_lines(&buffer)
    }

    #[test]
    fn unfocused_border_is_blank() {
        assert!(draw(false).iter().all(|line| line.trim().is_empty()));
    }

    #[test]
    fn focused_border_is_rounded() {
        let lines = draw(true);
        assert_eq!(lines[0], "╭──────╮");
        assert_eq!(lines[3], "╰──────╯");
    }
}

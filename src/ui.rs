use ratatui::{widgets::Paragraph, Frame};

use crate::app::{App, Phase};
use crate::config::BoardConfig;
use crate::panels::column_block;
use crate::task::Column;

pub const LOADING: &str = "loading...";

pub fn render(frame: &mut Frame, app: &mut App) {
    match app.phase() {
        // Leave the frame blank so nothing lingers on exit
        Phase::Quitting => {}
        Phase::Uninitialized => frame.render_widget(Paragraph::new(LOADING), frame.area()),
        Phase::Ready => render_board(frame, app),
    }
}

fn render_board(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let config = BoardConfig::from_area(area);
    let focused = app.focused;

    for (column, panel) in Column::ALL.into_iter().zip(app.columns_mut()) {
        let column_area = config.column_area(area, column.index());
        let block = column_block(column == focused);
        let inner = block.inner(column_area);
        frame.render_widget(block, column_area);
        panel.render(frame, inner);
    }
}

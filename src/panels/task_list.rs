use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{HighlightSpacing, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::util::FOCUS_COLOR;
use crate::panel::{KeyHandleResult, Panel};
use crate::task::Task;
use crate::util::{pluralize, truncate_with_ellipsis};

const CURSOR: &str = "│ ";
const SELECTED_COLOR: Color = Color::Indexed(170);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FilterState {
    #[default]
    Unfiltered,
    Editing,
    Applied,
}

/// Scrollable, filterable list of tasks for one board column
pub struct TaskListPanel {
    title: &'static str,
    tasks: Vec<Task>,
    filter: String,
    filter_state: FilterState,
    state: ListState,
}

impl TaskListPanel {
    pub fn new(title: &'static str, tasks: Vec<Task>) -> Self {
        let selected = if tasks.is_empty() { None } else { Some(0) };
        Self {
            title,
            tasks,
            filter: String::new(),
            filter_state: FilterState::Unfiltered,
            state: ListState::default().with_selected(selected),
        }
    }

    /// Tasks that pass the current filter, in seed order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        if self.filter_state == FilterState::Unfiltered || self.filter.is_empty() {
            return self.tasks.iter().collect();
        }
        let needle = self.filter.to_lowercase();
        self.tasks
            .iter()
            .filter(|t| t.filter_value().to_lowercase().contains(&needle))
            .collect()
    }

    // -- Navigation --

    fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        let selected = match self.state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.state.select(selected);
    }

    fn move_down(&mut self) {
        let len = self.visible_tasks().len();
        if let Some(i) = self.state.selected() {
            if i + 1 < len {
                self.state.select(Some(i + 1));
            }
        }
    }

    fn move_up(&mut self) {
        if let Some(i) = self.state.selected() {
            self.state.select(Some(i.saturating_sub(1)));
        }
    }

    fn go_to_start(&mut self) {
        if !self.visible_tasks().is_empty() {
            self.state.select(Some(0));
        }
    }

    fn go_to_end(&mut self) {
        let len = self.visible_tasks().len();
        if len > 0 {
            self.state.select(Some(len - 1));
        }
    }

    // -- Filtering --

    fn start_filter(&mut self) {
        self.filter.clear();
        self.filter_state = FilterState::Editing;
        self.clamp_selection();
    }

    fn clear_filter(&mut self) {
        self.filter.clear();
        self.filter_state = FilterState::Unfiltered;
        self.state.select(Some(0));
        self.clamp_selection();
    }

    fn handle_filter_key(&mut self, key: KeyEvent) -> KeyHandleResult {
        match key.code {
            KeyCode::Esc => self.clear_filter(),
            KeyCode::Enter => {
                if self.filter.is_empty() {
                    self.clear_filter();
                } else {
                    self.filter_state = FilterState::Applied;
                }
            }
            KeyCode::Backspace => {
                self.filter.pop();
                self.clamp_selection();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.filter.push(c);
                self.state.select(Some(0));
                self.clamp_selection();
            }
            _ => {}
        }
        KeyHandleResult::Consumed
    }

    // -- Rendering helpers --

    fn status_line(&self) -> Line<'_> {
        let dim = Style::default().fg(Color::DarkGray);
        match self.filter_state {
            FilterState::Editing => Line::from(vec![
                Span::styled("Filter: ", Style::default().fg(FOCUS_COLOR)),
                Span::raw(self.filter.as_str()),
                Span::styled("_", dim),
            ]),
            FilterState::Applied => Line::styled(
                format!(
                    "\"{}\" {} of {}",
                    self.filter,
                    self.visible_tasks().len(),
                    pluralize(self.tasks.len(), "item")
                ),
                dim,
            ),
            FilterState::Unfiltered => Line::styled(pluralize(self.tasks.len(), "item"), dim),
        }
    }

    fn task_item(task: &Task, width: usize) -> ListItem<'static> {
        ListItem::new(Text::from(vec![
            Line::from(truncate_with_ellipsis(&task.title, width)),
            Line::styled(
                truncate_with_ellipsis(&task.description, width),
                Style::default().fg(Color::DarkGray),
            ),
            Line::from(""),
        ]))
    }
}

impl Panel for TaskListPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

        let title = Span::styled(
            format!(" {} ", self.title),
            Style::default().fg(Color::Indexed(230)).bg(FOCUS_COLOR),
        );
        frame.render_widget(Paragraph::new(Line::from(title)), chunks[0]);

        let text_width = (chunks[2].width as usize).saturating_sub(CURSOR.chars().count());
        let items: Vec<ListItem> = self
            .visible_tasks()
            .into_iter()
            .map(|task| Self::task_item(task, text_width))
            .collect();

        if items.is_empty() {
            let placeholder =
                Paragraph::new("No items.").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(placeholder, chunks[2]);
        } else {
            let list = List::new(items)
                .highlight_symbol(CURSOR)
                .highlight_spacing(HighlightSpacing::Always)
                .highlight_style(
                    Style::default()
                        .fg(SELECTED_COLOR)
                        .add_modifier(Modifier::BOLD),
                );
            frame.render_stateful_widget(list, chunks[2], &mut self.state);
        }

        frame.render_widget(Paragraph::new(self.status_line()), chunks[3]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyHandleResult {
        if self.filter_state == FilterState::Editing {
            return self.handle_filter_key(key);
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.move_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_up(),
            KeyCode::Char('g') | KeyCode::Home => self.go_to_start(),
            KeyCode::Char('G') | KeyCode::End => self.go_to_end(),
            KeyCode::Char('/') => self.start_filter(),
            KeyCode::Esc if self.filter_state == FilterState::Applied => self.clear_filter(),
            _ => return KeyHandleResult::Ignored,
        }
        KeyHandleResult::Consumed
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::task::Column;
    use crate::task_store::seed_tasks;
    use crate::util::buffer_lines;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(panel: &mut TaskListPanel, text: &str) {
        for c in text.chars() {
            panel.handle_key(key(KeyCode::Char(c)));
        }
    }

    impl TaskListPanel {
        fn selected_task(&self) -> Option<&Task> {
            let index = self.state.selected()?;
            self.visible_tasks().get(index).copied()
        }
    }

    fn panel() -> TaskListPanel {
        TaskListPanel::new(Column::Todo.title(), seed_tasks(Column::Todo))
    }

    fn render(panel: &mut TaskListPanel, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                panel.render(frame, area);
            })
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    #[test]
    fn starts_on_first_task() {
        let panel = panel();
        assert_eq!(panel.selected_task().unwrap().title, "title 1 goes here");
    }

    #[test]
    fn empty_list_has_no_selection() {
        let panel = TaskListPanel::new("done", Vec::new());
        assert!(panel.selected_task().is_none());
    }

    #[test]
    fn cursor_stops_at_both_ends() {
        let mut panel = panel();
        panel.handle_key(key(KeyCode::Up));
        assert_eq!(panel.state.selected(), Some(0));

        for _ in 0..5 {
            panel.handle_key(key(KeyCode::Char('j')));
        }
        assert_eq!(panel.state.selected(), Some(2));
    }

    #[test]
    fn home_and_end_jump() {
        let mut panel = panel();
        panel.handle_key(key(KeyCode::Char('G')));
        assert_eq!(panel.selected_task().unwrap().title, "title 3 goes here");
        panel.handle_key(key(KeyCode::Home));
        assert_eq!(panel.selected_task().unwrap().title, "title 1 goes here");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut panel = panel();
        assert_eq!(
            panel.handle_key(key(KeyCode::Char('z'))),
            KeyHandleResult::Ignored
        );
        assert_eq!(panel.handle_key(key(KeyCode::Esc)), KeyHandleResult::Ignored);
    }

    #[test]
    fn filter_narrows_visible_tasks() {
        let mut panel = panel();
        panel.handle_key(key(KeyCode::Char('/')));
        assert_eq!(panel.filter_state, FilterState::Editing);

        type_str(&mut panel, "TITLE 2");
        assert_eq!(panel.visible_tasks().len(), 1);
        assert_eq!(panel.selected_task().unwrap().title, "title 2 goes here");

        panel.handle_key(key(KeyCode::Enter));
        assert_eq!(panel.filter_state, FilterState::Applied);
        assert_eq!(panel.visible_tasks().len(), 1);
        assert_eq!(panel.tasks.len(), 3);
    }

    #[test]
    fn backspace_widens_filter() {
        let mut panel = panel();
        panel.handle_key(key(KeyCode::Char('/')));
        type_str(&mut panel, "title 9");
        assert!(panel.visible_tasks().is_empty());
        assert!(panel.selected_task().is_none());

        panel.handle_key(key(KeyCode::Backspace));
        assert_eq!(panel.visible_tasks().len(), 3);
        assert!(panel.selected_task().is_some());
    }

    #[test]
    fn escape_clears_applied_filter() {
        let mut panel = panel();
        panel.handle_key(key(KeyCode::Char('/')));
        type_str(&mut panel, "3");
        panel.handle_key(key(KeyCode::Enter));
        assert_eq!(panel.visible_tasks().len(), 1);

        assert_eq!(panel.handle_key(key(KeyCode::Esc)), KeyHandleResult::Consumed);
        assert_eq!(panel.visible_tasks().len(), 3);
        assert_eq!(panel.selected_task().unwrap().title, "title 1 goes here");
    }

    #[test]
    fn empty_filter_on_enter_cancels() {
        let mut panel = panel();
        panel.handle_key(key(KeyCode::Char('/')));
        panel.handle_key(key(KeyCode::Enter));
        assert_eq!(panel.filter_state, FilterState::Unfiltered);
    }

    #[test]
    fn renders_title_tasks_and_status() {
        let mut panel = panel();
        let lines = render(&mut panel, 30, 14);

        assert!(lines[0].starts_with(" to do "));
        assert!(lines[2].starts_with("│ title 1 goes here"));
        assert!(lines[3].starts_with("  description 1 goes here"));
        assert!(lines[5].starts_with("  title 2 goes here"));
        assert!(lines[13].starts_with("3 items"));
    }

    #[test]
    fn renders_filter_prompt_while_editing() {
        let mut panel = panel();
        panel.handle_key(key(KeyCode::Char('/')));
        type_str(&mut panel, "zz");
        let lines = render(&mut panel, 30, 8);

        assert!(lines[2].starts_with("No items."));
        assert!(lines[7].starts_with("Filter: zz_"));
    }

    #[test]
    fn truncates_to_width() {
        let mut panel = panel();
        let lines = render(&mut panel, 16, 8);
        assert_eq!(lines[3], "  description...");
    }
}

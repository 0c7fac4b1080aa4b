use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::panel::Panel;
use crate::panels::TaskListPanel;
use crate::task::Column;
use crate::task_store::seed_tasks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No terminal size seen yet
    Uninitialized,
    Ready,
    Quitting,
}

#[derive(Default)]
pub struct App {
    pub should_quit: bool,
    pub loaded: bool,
    pub focused: Column,
    /// One panel per `Column`, in screen order. Empty until loaded.
    columns: Vec<Box<dyn Panel>>,
}

impl App {
    pub fn phase(&self) -> Phase {
        if self.should_quit {
            Phase::Quitting
        } else if self.loaded {
            Phase::Ready
        } else {
            Phase::Uninitialized
        }
    }

    pub fn columns_mut(&mut self) -> &mut [Box<dyn Panel>] {
        &mut self.columns
    }

    /// Size notification from the terminal. Only the first one seeds the board.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.loaded {
            return;
        }
        self.columns = Column::ALL
            .iter()
            .map(|&column| {
                Box::new(TaskListPanel::new(column.title(), seed_tasks(column))) as Box<dyn Panel>
            })
            .collect();
        self.loaded = true;
        info!(width, height, "board seeded");
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }
        if self.should_quit {
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.focus_previous();
                return;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.focus_next();
                return;
            }
            _ => {}
        }

        if let Some(panel) = self.columns.get_mut(self.focused.index()) {
            let result = panel.handle_key(key);
            debug!(code = ?key.code, ?result, column = ?self.focused, "key passed to column");
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
        debug!(column = ?self.focused, "focus moved");
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.prev();
        debug!(column = ?self.focused, "focus moved");
    }

    fn quit(&mut self) {
        self.should_quit = true;
        info!("quit requested");
    }
}

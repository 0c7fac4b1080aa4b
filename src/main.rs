mod app;
mod config;
mod error;
mod logging;
mod panel;
mod panels;
mod task;
mod task_store;
mod ui;
mod util;

use std::io;
use std::process::ExitCode;

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::prelude::*;
use tracing::{error, info, warn};

use app::App;
use error::Result;

fn main() -> ExitCode {
    let log = logging::init();

    let code = match run_terminal() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "board failed");
            ExitCode::FAILURE
        }
    };

    // The screen is ours again, so held log lines can go out
    let _ = log.flush_to(&mut io::stderr());
    code
}

fn run_terminal() -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let setup = execute!(io::stdout(), EnterAlternateScreen, SetTitle("kanban"))
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
    let mut terminal = match setup {
        Ok(terminal) => terminal,
        Err(err) => {
            if let Err(restore_err) = restore_terminal() {
                warn!(%restore_err, "terminal restore failed");
            }
            return Err(err.into());
        }
    };

    // Run the app
    let result = run(&mut terminal);

    // Restore terminal
    let restored = restore_terminal();
    result?;
    Ok(restored?)
}

/// Undo raw mode and the alternate screen. Every step runs even if an earlier
/// one fails; the first failure is returned.
fn restore_terminal() -> io::Result<()> {
    first_error([
        disable_raw_mode(),
        execute!(io::stdout(), LeaveAlternateScreen, Show),
    ])
}

fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().fold(Ok(()), |acc, step| acc.and(step))
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let mut app = App::default();

    // The starting size counts as the first size notification
    let size = terminal.size()?;
    app.resize(size.width, size.height);
    info!(width = size.width, height = size.height, "board started");

    loop {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        if app.should_quit {
            break;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Resize(width, height) => app.resize(width, height),
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_error_wins() {
        let result = first_error([
            Ok(()),
            Err(io::Error::other("raw mode")),
            Err(io::Error::other("alternate screen")),
        ]);
        assert_eq!(result.unwrap_err().to_string(), "raw mode");
    }

    #[test]
    fn all_steps_ok() {
        assert!(first_error([Ok(()), Ok(())]).is_ok());
    }
}

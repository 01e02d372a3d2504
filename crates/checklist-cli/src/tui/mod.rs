//! Terminal user interface (TUI) for the to-do panel.
//!
//! ## Entry points
//!
//! - [`run`] takes over the terminal and drives a [`panel::TodoPanel`] until
//!   the user quits.

pub mod panel;

use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result};
use checklist_core::ErrorCode;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing::{info, warn};

use panel::TodoPanel;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Errors raised before the panel can take over the terminal.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("stdout is not a terminal")]
    TerminalUnavailable,
}

impl TuiError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::TerminalUnavailable => ErrorCode::TerminalUnavailable,
        }
    }
}

/// Run the panel on the real terminal. The terminal is restored on every exit
/// path, including errors from the event loop.
///
/// Log lines are emitted only while the normal screen is active.
pub fn run(panel: &mut TodoPanel) -> Result<()> {
    if !io::stdout().is_terminal() {
        return Err(TuiError::TerminalUnavailable.into());
    }

    info!("tui starting");
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err).context("enter alternate screen");
    }
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(err).context("create terminal");
        }
    };

    let result = run_event_loop(&mut terminal, panel);

    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();
    if let Err(err) = raw {
        warn!(%err, "failed to disable raw mode");
    }
    if let Err(err) = screen {
        warn!(%err, "failed to leave alternate screen");
    }
    info!("tui stopped");

    result
}

fn run_event_loop<B: Backend>(terminal: &mut Terminal<B>, panel: &mut TodoPanel) -> Result<()> {
    loop {
        terminal
            .draw(|frame| panel.render(frame, frame.area()))
            .context("draw frame")?;

        if !event::poll(POLL_INTERVAL).context("poll terminal events")? {
            continue;
        }
        if let Event::Key(key) = event::read().context("read terminal event")? {
            // Windows reports both press and release.
            if key.kind == KeyEventKind::Press {
                panel.handle_key(key);
            }
        }

        if panel.should_quit() {
            return Ok(());
        }
    }
}

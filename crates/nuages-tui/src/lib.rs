//! # nuages-tui
//!
//! Interactive terminal dashboard for managing Nuages containers.
//!
//! Built with `ratatui` and `crossterm`, providing:
//! - Overview statistics and recent activity.
//! - A container list with start, stop and delete actions.
//! - A creation form with inline name validation.
//! - A dismissible notification bar.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod app;
pub mod event;
pub mod format;
pub mod ui;

use std::time::Duration;

use ratatui::DefaultTerminal;
use thiserror::Error;

use crate::app::App;
use crate::event::TerminalEvent;

/// How long the loop waits for input before redrawing.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Errors raised while driving the terminal.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Reading input or drawing to the terminal failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Takes over the terminal and runs the dashboard until the user quits.
///
/// The terminal is restored even when the loop fails.
///
/// # Errors
///
/// Returns an error if terminal input or output fails.
pub fn run(app: &mut App) -> Result<(), TuiError> {
    tracing::info!("starting dashboard");
    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, app);
    ratatui::restore();
    tracing::info!(ok = result.is_ok(), "dashboard exited");
    result
}

fn run_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<(), TuiError> {
    while app.running {
        let _ = terminal.draw(|frame| ui::render(frame, app))?;
        match event::next_event(TICK_RATE)? {
            TerminalEvent::Key(key) => event::handle_key(app, key),
            TerminalEvent::Resize(width, height) => {
                tracing::trace!(width, height, "terminal resized");
            }
            TerminalEvent::Tick => {}
        }
    }
    Ok(())
}

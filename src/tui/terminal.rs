//! Terminal setup and teardown
//!
//! Raw mode and the alternate screen are undone on exit and on panic.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::config::settings::Settings;
use crate::provider::PaymentProvider;
use crate::storage::Storage;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI until the user quits
///
/// Provider calls are spawned on `runtime`; with no provider the dashboard
/// still works but balance checks and transfers report an error.
pub fn run_tui(
    storage: &Storage,
    settings: &Settings,
    runtime: Handle,
    provider: Option<Arc<dyn PaymentProvider>>,
) -> Result<()> {
    let events = EventHandler::default();
    let mut app = App::new(storage, settings, runtime, provider, events.sender());

    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, &mut app, &events);
    restore_terminal()?;

    if app.in_flight > 0 {
        tracing::warn!(pending = app.in_flight, "Exited with provider calls still running");
    }
    result
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;
        handle_event(app, events.next()?)?;
    }
    Ok(())
}

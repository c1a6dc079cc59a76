//! Event handler for the TUI
//!
//! Routes key presses to the active dialog or screen, and applies the
//! results of provider calls as they arrive.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, Screen};
use super::event::Event;
use super::views::dashboard::{DashboardState, FocusedPanel};
use super::widgets::TextInput;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
        Event::Api(api) => {
            app.apply_api_event(api);
            Ok(())
        }
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.screen {
        Screen::Setup => handle_setup_key(app, key),
        Screen::Dashboard => handle_dashboard_key(app, key),
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if let ActiveDialog::ConfirmTransfer(_) = app.active_dialog {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_transfer(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        }
    }
    Ok(())
}

/// Editing keys shared by every text input; returns whether the key was used
fn edit_input(input: &mut TextInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}

fn handle_setup_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab | KeyCode::Down => app.setup_form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.setup_form.focus_prev(),
        KeyCode::Enter => app.submit_setup(),
        _ => {
            if let Some(input) = app.setup_form.focused_input_mut() {
                edit_input(input, key);
            }
        }
    }
    Ok(())
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let Some(state) = app.dashboard.as_mut() else {
        return Ok(());
    };

    match key.code {
        KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        KeyCode::Tab => {
            state.toggle_panel();
            return Ok(());
        }
        _ => {}
    }

    match state.focused_panel {
        FocusedPanel::Inputs => handle_inputs_key(state, key),
        FocusedPanel::Accounts => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
            KeyCode::Char('j') | KeyCode::Down => state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => state.select_prev(),
            KeyCode::Char('b') => app.check_balance(),
            KeyCode::Char('t') | KeyCode::Enter => app.stage_selected_transfer(),
            _ => {}
        },
    }
    Ok(())
}

/// Keys while the income/percentage inputs have focus
///
/// Every printable key is typed into the field, so nothing here is a hotkey.
fn handle_inputs_key(state: &mut DashboardState, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Enter => state.focus_next(),
        KeyCode::Up | KeyCode::BackTab => state.focus_prev(),
        KeyCode::Left if state.focused_field > 0 => state.nudge(-1.0),
        KeyCode::Right if state.focused_field > 0 => state.nudge(1.0),
        _ => {
            if edit_input(state.focused_input_mut(), key) {
                state.sync_inputs();
            }
        }
    }
}
